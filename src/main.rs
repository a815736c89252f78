//! tictactoe_timeline - unified CLI.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use std::sync::Arc;
use tictactoe_timeline::{AppConfig, Position, render_text, replay_view, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let source = AppConfig::resolve_path(cli.config.as_deref());
    let config = AppConfig::load(source.as_deref())?;

    match cli.command.unwrap_or(Command::Play {
        order: None,
        log_file: None,
    }) {
        Command::Play { order, log_file } => {
            let config = config.apply_overrides(order, log_file);
            let log_file = std::fs::File::create(config.log_file()).with_context(|| {
                format!("Failed to create log file {}", config.log_file().display())
            })?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(&config))
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .init();
            log_config(source.as_deref(), &config);
            run_tui(&config)
        }
        Command::Replay {
            cells,
            jump,
            order,
            json,
        } => {
            let config = config.apply_overrides(order, None);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(&config))
                .with_writer(std::io::stderr)
                .init();
            log_config(source.as_deref(), &config);
            run_replay(&config, &cells, jump, json)
        }
    }
}

/// `RUST_LOG` if set, else the configured filter.
fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

fn log_config(source: Option<&Path>, config: &AppConfig) {
    match source {
        Some(path) => info!(path = %path.display(), ?config, "Config loaded"),
        None => info!(?config, "No config file, using defaults"),
    }
}

/// Replays `cells` and prints the resulting view to stdout.
fn run_replay(config: &AppConfig, cells: &[u8], jump: Option<usize>, json: bool) -> Result<()> {
    let positions: Vec<Position> = cells
        .iter()
        .map(|&c| Position::from_index(c as usize).context("Cell out of range"))
        .collect::<Result<_>>()?;
    info!(moves = positions.len(), ?jump, "Replaying moves");

    let view = replay_view(&positions, jump, *config.history_order());
    if json {
        let out = serde_json::to_string_pretty(&view).context("Failed to serialize view")?;
        println!("{out}");
    } else {
        print!("{}", render_text(&view));
    }
    Ok(())
}
