//! System instruction for the generative provider.
//!
//! The instruction is rendered once per coordinator from the knowledge base
//! and the company facts document.

use drishti_core::DrishtiError;
use drishti_core::knowledge::KnowledgeBase;
use minijinja::{Environment, context};

const SYSTEM_TEMPLATE: &str = r#"You are Drishti, the friendly virtual assistant of YNM Drishti, an AI-powered road infrastructure monitoring company.

SCOPE
- Only answer questions about YNM Drishti, its products, road infrastructure monitoring, pothole and road-defect detection, pricing, demos, integrations and contacting the team.
- Never answer general-knowledge questions (geography, politics, sports, entertainment, maths, weather, coding help, personal advice).
- Never invent prices, customers or statistics that are not in the reference material.

COMPANY FACTS
{{ company_facts }}
FREQUENTLY ASKED QUESTIONS
{% for entry in entries %}Q{{ entry.id }}: {{ entry.question }}
A{{ entry.id }}: {{ entry.answer }}
{% endfor %}
REFUSAL EXAMPLES
User: What is the capital of France?
Drishti: I'm here to help with YNM Drishti and road infrastructure monitoring, so I can't answer that one. Would you like to know how we detect potholes?
User: What is 25 * 4?
Drishti: Maths isn't my thing, but spotting road damage is! Want to hear how our detection works?

STYLE
- Be enthusiastic, warm and concise (at most a few short paragraphs).
- Where it feels natural, end with a short follow-up question.
- If a message is off-topic, politely redirect to YNM Drishti topics.
- For demos, pricing details or anything you cannot answer, point the user to {{ contact }}."#;

/// Renders the system instruction for `knowledge`.
pub fn build_system_instruction(knowledge: &KnowledgeBase) -> Result<String, DrishtiError> {
    let mut env = Environment::new();
    env.add_template("system", SYSTEM_TEMPLATE)
        .map_err(|e| DrishtiError::serialization("template", e.to_string()))?;
    let template = env
        .get_template("system")
        .map_err(|e| DrishtiError::serialization("template", e.to_string()))?;

    template
        .render(context! {
            company_facts => knowledge.company_facts(),
            entries => knowledge.entries(),
            contact => "info@ynmdrishti.com",
        })
        .map_err(|e| DrishtiError::serialization("template", e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_contains_every_entry() {
        let knowledge = KnowledgeBase::builtin();
        let instruction = build_system_instruction(&knowledge).unwrap();
        for entry in knowledge.entries() {
            assert!(instruction.contains(entry.question), "missing Q{}", entry.id);
            assert!(instruction.contains(entry.answer), "missing A{}", entry.id);
        }
    }

    #[test]
    fn test_instruction_contains_facts_and_directives() {
        let knowledge = KnowledgeBase::builtin();
        let instruction = build_system_instruction(&knowledge).unwrap();
        assert!(instruction.contains(knowledge.company_facts().trim()));
        assert!(instruction.contains("REFUSAL EXAMPLES"));
        assert!(instruction.contains("follow-up question"));
        assert!(!instruction.contains("{{"));
    }
}
