use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::Path;

use anyhow::{Context as _, Result};
use chrono::Utc;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use drishti_application::{
    ChatSession, EngineBootstrap, SendOutcome, SessionError, render_transcript,
    transcript_file_name,
};
use drishti_core::knowledge::KnowledgeBase;
use drishti_infrastructure::{DrishtiPaths, TranscriptStore};

use super::{mode_line, print_notice, print_reply};

const COMMANDS: &[&str] = &["/new", "/save", "/faq", "/quit"];

/// Completion and hints for slash commands.
#[derive(Clone)]
struct ChatHelper;

impl Helper for ChatHelper {}

impl Completer for ChatHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if !line.starts_with('/') {
            return Ok((0, vec![]));
        }

        let candidates = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for ChatHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ChatHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if !line.starts_with('/') || line.contains(' ') {
            return None;
        }
        COMMANDS
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for ChatHelper {}

enum Command {
    New,
    Save,
    Faq,
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Option<Command> {
    if !line.starts_with('/') {
        return None;
    }
    Some(match line.split_whitespace().next().unwrap_or_default() {
        "/new" => Command::New,
        "/save" => Command::Save,
        "/faq" => Command::Faq,
        "/quit" | "/exit" => Command::Quit,
        _ => Command::Unknown,
    })
}

async fn print_last_turn(session: &ChatSession) {
    if let Some(turn) = session.turns().await.last() {
        print_reply(turn.text());
    }
}

async fn save_transcript(session: &ChatSession, store: &TranscriptStore) -> Result<()> {
    let contents = render_transcript(&session.turns().await);
    let path = store
        .save(&contents, &transcript_file_name(Utc::now()))
        .context("Failed to save transcript")?;
    println!("{}", format!("Transcript saved to {}", path.display()).green());
    Ok(())
}

/// Runs the interactive chat REPL.
pub async fn run(base: Option<&Path>, local_only: bool) -> Result<()> {
    let paths = DrishtiPaths::new(base)?;
    let engine = EngineBootstrap::load_default(base, local_only)
        .await
        .context("Failed to load configuration")?;
    let store = TranscriptStore::new(&paths);
    let session = engine.build_session();

    println!("{}", mode_line(session.is_configured()).bright_black());
    println!("{}", "Commands: /new /save /faq /quit".bright_black());
    print_last_turn(&session).await;

    let mut rl: Editor<ChatHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ChatHelper));

    loop {
        let line = match rl.readline(&"you> ".bright_green().to_string()) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        rl.add_history_entry(line)?;

        match parse_command(line) {
            Some(Command::Quit) => break,
            Some(Command::New) => {
                session.reset().await;
                println!("{}", "Started a new chat.".bright_black());
                print_last_turn(&session).await;
            }
            Some(Command::Save) => {
                if let Err(err) = save_transcript(&session, &store).await {
                    eprintln!("{}", format!("{err:#}").red());
                }
            }
            Some(Command::Faq) => {
                for entry in KnowledgeBase::builtin().entries() {
                    println!("  {} {}", entry.topic_icon, entry.question);
                }
            }
            Some(Command::Unknown) => {
                println!("{}", "Unknown command".bright_black());
            }
            None => match session.send(line).await {
                Ok(SendOutcome::Replied { reply, notice, .. }) => {
                    if let Some(notice) = notice {
                        print_notice(&notice);
                    }
                    print_reply(reply.text());
                }
                Ok(SendOutcome::Discarded) => {}
                Err(SessionError::Busy) => {
                    println!("{}", "Still thinking about your last message...".bright_black());
                }
                Err(SessionError::EmptyMessage) => {}
            },
        }
    }

    println!("{}", "Goodbye!".bright_black());
    Ok(())
}
