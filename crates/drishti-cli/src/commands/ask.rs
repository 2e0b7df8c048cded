use super::{print_notice, print_reply, source_label};
use anyhow::{Context, Result};
use colored::Colorize;
use drishti_application::{EngineBootstrap, SendOutcome};
use std::path::Path;

pub async fn run(base: Option<&Path>, local_only: bool, message: &str, verbose: bool) -> Result<()> {
    let engine = EngineBootstrap::load_default(base, local_only)
        .await
        .context("Failed to load configuration")?;
    let session = engine.build_session();

    match session.send(message).await? {
        SendOutcome::Replied {
            reply,
            source,
            notice,
        } => {
            if let Some(notice) = notice {
                print_notice(&notice);
            }
            print_reply(reply.text());
            if verbose {
                println!("{}", format!("[source: {}]", source_label(source)).bright_black());
            }
        }
        SendOutcome::Discarded => {}
    }

    Ok(())
}
