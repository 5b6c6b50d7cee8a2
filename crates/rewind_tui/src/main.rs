//! Rewind - unified CLI.

use anyhow::{Context, Result};
use clap::Parser;
use rewind_tui::{Cli, Command, TuiConfig, logging, parse_moves, replay, terminal};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command() {
        Command::Play => {
            logging::init_file(&config)?;
            terminal::run(&config)
        }
        Command::Replay {
            moves,
            jump,
            descending,
            json,
        } => {
            logging::init_stderr(&config);
            let moves = parse_moves(&moves)?;
            info!(count = moves.len(), "Replaying moves");
            let ascending = *config.ascending() && !descending;
            let report = replay(&moves, jump, ascending);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.to_text());
            }
            Ok(())
        }
    }
}
