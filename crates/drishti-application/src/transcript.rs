//! Plain-text export of a conversation.

use chrono::{DateTime, Utc};
use drishti_core::chat::{ConversationTurn, Speaker};

pub const TRANSCRIPT_HEADER: &str = "YNM Drishti chat transcript";

fn speaker_name(speaker: Speaker) -> &'static str {
    match speaker {
        Speaker::User => "You",
        Speaker::Assistant => "Drishti",
    }
}

/// Renders turns as `[YYYY-MM-DD HH:MM:SS] Speaker: text`, one block per turn.
pub fn render_transcript(turns: &[ConversationTurn]) -> String {
    let mut out = String::from(TRANSCRIPT_HEADER);
    out.push('\n');

    for turn in turns {
        out.push('\n');
        out.push_str(&format!(
            "[{}] {}: {}\n",
            turn.timestamp().format("%Y-%m-%d %H:%M:%S"),
            speaker_name(turn.speaker()),
            turn.text()
        ));
    }

    out
}

pub fn transcript_file_name(now: DateTime<Utc>) -> String {
    format!("drishti-chat-{}.txt", now.format("%Y%m%d-%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_render_lists_turns_in_order() {
        let turns = vec![
            ConversationTurn::assistant("Hi there!"),
            ConversationTurn::user("What is Drishti?"),
        ];

        let text = render_transcript(&turns);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], TRANSCRIPT_HEADER);
        assert_eq!(lines[1], "");
        assert!(lines[2].ends_with("] Drishti: Hi there!"));
        assert_eq!(lines[3], "");
        assert!(lines[4].ends_with("] You: What is Drishti?"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_transcript(&[]), format!("{TRANSCRIPT_HEADER}\n"));
    }

    #[test]
    fn test_file_name_uses_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap();
        assert_eq!(transcript_file_name(now), "drishti-chat-20240305-140709.txt");
    }
}
