//! Command-line interface for tictactoe_timeline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_timeline::SortOrder;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Initial history order
        #[arg(long, value_enum)]
        order: Option<SortOrder>,

        /// File to write logs to
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Apply a list of moves and print the resulting game
    Replay {
        /// Cells to play in order (0-8, row-major)
        #[arg(value_parser = clap::value_parser!(u8).range(0..=8))]
        cells: Vec<u8>,

        /// History step to select after the moves
        #[arg(long)]
        jump: Option<usize>,

        /// History order
        #[arg(long, value_enum)]
        order: Option<SortOrder>,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["tictactoe_timeline"]).expect("valid");
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_replay_args() {
        let cli = Cli::try_parse_from([
            "tictactoe_timeline",
            "replay",
            "0",
            "4",
            "8",
            "--jump",
            "1",
            "--order",
            "descending",
            "--json",
        ])
        .expect("valid");
        match cli.command {
            Some(Command::Replay { cells, jump, order, json }) => {
                assert_eq!(cells, [0, 4, 8]);
                assert_eq!(jump, Some(1));
                assert_eq!(order, Some(SortOrder::Descending));
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cell_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["tictactoe_timeline", "replay", "9"]).is_err());
    }
}
