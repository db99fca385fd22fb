//! Command-line interface wiring for coveet.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod cases;
pub mod dates;
pub mod sentiment;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Regional COVID tweet-sentiment pipeline", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Dates => dates::run(settings),
            Commands::Sentiment(args) => sentiment::run(args, settings),
            Commands::Cases(args) => cases::run(args, settings),
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List collection dates discovered under the data root.
    Dates,
    /// Per-region mean tweet sentiment for one date.
    Sentiment(sentiment::Args),
    /// Per-region COVID case counts for one date.
    Cases(cases::Args),
}
