//! Checkers CLI - Command-line interface
//!
//! Commands:
//! - play: Play white against the AI
//! - battle: Run AI-vs-AI games and report win rates

mod battle;
mod play;
mod render;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "checkers")]
#[command(about = "Checkers against an alpha-beta AI")]
struct Cli {
    /// Random seed for AI tie-breaks
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play white against the AI
    Play(play::PlayArgs),
    /// Run AI-vs-AI games
    Battle(battle::BattleArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play::run(args, cli.seed),
        Commands::Battle(args) => battle::run(args, cli.seed),
    }
}
