use drishti_interaction::IntentClassifier;
use drishti_interaction::classifier::canned_reply;

pub fn run(message: &str) {
    let intent = IntentClassifier::new().classify(message);
    println!("{}", intent.label);
    if let Some(line) = canned_reply(&intent) {
        println!("  -> {line}");
    }
}
