use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tally_cli::commands::{duration, show, total, util, validate};
use tally_cli::{Cli, Commands, Config};
use tally_core::SystemClock;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let mut stdout = io::stdout().lock();

    match &cli.command {
        Some(Commands::Duration { start, end, json }) => {
            duration::run(&mut stdout, start, end, *json || config.json)?;
        }
        Some(Commands::Parse { text }) => {
            duration::parse(&mut stdout, text)?;
        }
        Some(Commands::Format {
            hours,
            minutes,
            seconds,
        }) => {
            duration::format(&mut stdout, *hours, *minutes, *seconds)?;
        }
        Some(Commands::Total { file, json }) => {
            let entries = util::read_entries(file.as_deref())?;
            total::run(&mut stdout, &entries, *json || config.json)?;
        }
        Some(Commands::Validate { file, json }) => {
            let entries = util::read_entries(file.as_deref())?;
            let invalid = validate::run(&mut stdout, &entries, *json || config.json)?;
            if invalid > 0 {
                anyhow::bail!("{invalid} of {} entries failed validation", entries.len());
            }
        }
        Some(Commands::Show { timestamp, format }) => {
            show::run(
                &mut stdout,
                timestamp,
                format.unwrap_or(config.timestamp_format),
            )?;
        }
        Some(Commands::Now) => {
            show::now(&mut stdout, &SystemClock)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
