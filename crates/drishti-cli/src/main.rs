use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "drishti")]
#[command(about = "Drishti - chat assistant for YNM Drishti road monitoring", long_about = None)]
struct Cli {
    /// Configuration directory (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "PATH")]
    config_dir: Option<PathBuf>,

    /// Ignore any API key and answer from the local knowledge base
    #[arg(long, global = true)]
    local_only: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat
    Chat,
    /// Ask a single question
    Ask {
        message: String,
        /// Also print where the reply came from
        #[arg(short, long)]
        verbose: bool,
    },
    /// Print the intent label for a message
    Classify { message: String },
    /// List the FAQ, or explain how a message scores against it
    Faq {
        #[arg(long, value_name = "MESSAGE")]
        explain: Option<String>,
    },
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print resolved file locations
    Path,
    /// Print the effective configuration
    Show,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let base = cli.config_dir.as_deref();

    match cli.command {
        Commands::Chat => commands::chat::run(base, cli.local_only).await?,
        Commands::Ask { message, verbose } => {
            commands::ask::run(base, cli.local_only, &message, verbose).await?
        }
        Commands::Classify { message } => commands::classify::run(&message),
        Commands::Faq { explain } => commands::faq::run(explain.as_deref()),
        Commands::Config { action } => match action {
            ConfigAction::Path => commands::config::path(base)?,
            ConfigAction::Show => commands::config::show(base).await?,
        },
    }

    Ok(())
}
