//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tally_core::TimestampFormat;

/// Time-tracking duration calculator and entry validator.
///
/// Measures, formats and sums durations, and checks time entries given as
/// JSON.
#[derive(Debug, Parser)]
#[command(name = "tally", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Measure the time between two ISO-8601 timestamps.
    Duration {
        /// Start timestamp (e.g., 2023-01-01T09:00:00Z).
        start: String,

        /// End timestamp, strictly after the start.
        end: String,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Convert an HH:MM or HH:MM:SS duration to milliseconds.
    Parse {
        /// Duration text (e.g., 02:30:45).
        text: String,
    },

    /// Render hours, minutes and seconds as HH:MM:SS.
    Format {
        hours: i64,
        minutes: i64,
        #[arg(default_value_t = 0)]
        seconds: i64,
    },

    /// Sum the closed entries of a JSON array of time entries.
    Total {
        /// JSON file to read; stdin when omitted.
        file: Option<PathBuf>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Validate each entry of a JSON array of time entries.
    Validate {
        /// JSON file to read; stdin when omitted.
        file: Option<PathBuf>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Render a timestamp for display.
    Show {
        timestamp: String,

        /// date, time or datetime. Defaults to the configured format.
        #[arg(long)]
        format: Option<TimestampFormat>,
    },

    /// Print the current time as ISO-8601 UTC.
    Now,
}
