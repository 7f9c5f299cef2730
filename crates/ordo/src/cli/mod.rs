//! CLI command definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

/// Resolve liturgical years day by day.
#[derive(Debug, Parser)]
#[command(name = "ordo")]
#[command(version, about = "Resolve liturgical years day by day", long_about = None)]
pub struct Cli {
    /// Language code, `es` or `la` (overrides ORDO_LANG).
    #[arg(long)]
    pub lang: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Directory with generator exports laid out as `<bundle>/<year>.json`
    /// (overrides ORDO_DATA_DIR).
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Use built-in sample data instead of generator exports.
    #[arg(long)]
    pub sample: bool,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve every day of a liturgical year.
    Year {
        /// Civil year in which the liturgical year ends (default: the current one).
        #[arg(long)]
        year: Option<i32>,
    },
    /// Resolve a single day.
    Day {
        /// Date as YYYY-MM-DD (default: today).
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show the first and last day of a liturgical year.
    Window {
        #[arg(long)]
        year: i32,
    },
    /// Show the Sunday and weekday reading cycles of a liturgical year.
    Cycle {
        #[arg(long)]
        year: i32,
    },
    /// List the season banners.
    Seasons,
}
