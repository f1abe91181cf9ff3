mod cmd;
mod logging;
mod output;
mod remote;
mod settings;

use clap::{Parser, Subcommand};
use settings::{MissingConfig, Settings};

#[derive(Parser)]
#[command(
    name = "boostbot",
    about = "Boost statuses that mention this account, at most once per account per interval",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    settings: Settings,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll notifications and boost qualifying mentions (default)
    Run,

    /// Show the persisted cursor, rate-limit and boost tables
    State {
        /// Output as JSON
        #[arg(long, short = 'j')]
        json: bool,
    },
}

fn main() {
    // A missing .env is normal; real env vars still apply.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("error: failed to load .env: {e}");
            std::process::exit(2);
        }
    }

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => cmd::run::run(&cli.settings),
        Commands::State { json } => cmd::state::run(&cli.settings, json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        let code = if e.downcast_ref::<MissingConfig>().is_some() {
            2
        } else {
            1
        };
        std::process::exit(code);
    }
}
