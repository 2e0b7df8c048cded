pub mod ask;
pub mod chat;
pub mod classify;
pub mod config;
pub mod faq;

use colored::Colorize;
use drishti_interaction::ResponseSource;

/// Short label for where a reply came from.
pub fn source_label(source: ResponseSource) -> String {
    match source {
        ResponseSource::ShortCircuit(label) => format!("intent:{label}"),
        ResponseSource::Provider => "provider".to_string(),
        ResponseSource::LocalKnowledge => "faq".to_string(),
        ResponseSource::LocalFallback => "faq (fallback)".to_string(),
    }
}

pub fn print_reply(text: &str) {
    for line in text.lines() {
        println!("{}", line.bright_blue());
    }
}

pub fn print_notice(notice: &str) {
    eprintln!("{}", notice.dimmed());
}

pub fn mode_line(configured: bool) -> String {
    if configured {
        "mode: AI assistant".to_string()
    } else {
        "mode: FAQ only (no API key)".to_string()
    }
}
