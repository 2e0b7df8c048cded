use colored::Colorize;
use drishti_core::knowledge::KnowledgeBase;
use drishti_interaction::KnowledgeResolver;
use drishti_interaction::resolver::MATCH_THRESHOLD;

pub fn run(explain: Option<&str>) {
    let knowledge = KnowledgeBase::builtin();
    match explain {
        Some(message) => explain_scores(knowledge, message),
        None => list(&knowledge),
    }
}

fn list(knowledge: &KnowledgeBase) {
    for entry in knowledge.entries() {
        println!("{:>2}. {} {}", entry.id, entry.topic_icon, entry.question.bold());
    }
}

fn explain_scores(knowledge: KnowledgeBase, message: &str) {
    let resolver = KnowledgeResolver::new(knowledge);
    let mut scores = resolver.score_all(message);
    scores.sort_by(|a, b| b.score.cmp(&a.score).then(a.entry.id.cmp(&b.entry.id)));

    for scored in scores.iter().filter(|s| s.score > 0) {
        println!("{:>4}  #{:<2} {}", scored.score, scored.entry.id, scored.entry.question);
    }

    match resolver.best_match(message) {
        Some(best) => println!(
            "{}",
            format!("best: #{} (score {}, threshold {})", best.entry.id, best.score, MATCH_THRESHOLD)
                .green()
        ),
        None => println!(
            "{}",
            format!("no entry reaches the threshold of {MATCH_THRESHOLD}").yellow()
        ),
    }
}
