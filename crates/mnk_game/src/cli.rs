//! Command-line interface for mnk.

use crate::config::{ConfigError, GameConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, instrument};

/// mnk - tic-tac-toe on any board size
#[derive(Parser, Debug)]
#[command(name = "mnk")]
#[command(about = "Play m,n,k tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game config (defaults are used if it does not exist)
    #[arg(long, global = true, default_value = "mnk.toml")]
    pub config: PathBuf,

    /// Override the number of rows
    #[arg(long, global = true)]
    pub rows: Option<usize>,

    /// Override the number of columns
    #[arg(long, global = true)]
    pub columns: Option<usize>,

    /// Override the winning run length
    #[arg(long, global = true)]
    pub win_length: Option<usize>,

    /// Skip the onboarding prompts
    #[arg(long, global = true)]
    pub no_onboarding: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play interactively: type `row,col` to open a cell, `reset` or `quit`
    Play,

    /// Apply a fixed list of moves and print the resulting events and board
    Script {
        /// Moves as `row,col`
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print events as JSON lines
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Loads the config file and applies command-line overrides.
    #[instrument(skip(self), fields(config_path = %self.config.display()))]
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let mut config = GameConfig::load_or_default(&self.config)?;

        if let Some(rows) = self.rows {
            info!(rows, "Overriding rows");
            config = config.with_rows(rows);
        }
        if let Some(columns) = self.columns {
            info!(columns, "Overriding columns");
            config = config.with_columns(columns);
        }
        if let Some(win_length) = self.win_length {
            info!(win_length, "Overriding win length");
            config = config.with_win_length(Some(win_length));
        }
        if self.no_onboarding {
            config = config.with_onboarding(false);
        }

        config.validate()?;
        Ok(config)
    }
}
