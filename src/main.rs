mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Cli, Request};
use log::{debug, LevelFilter};
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::str::FromStr;
use vizkit::{info, Config, Dataset};

fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", args.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
    debug!("Parsed arguments: {:?}", args);

    let (kind, options, input) = match args.command.into_request() {
        Request::Info(topic) => {
            print!("{}", info::render(topic));
            return Ok(());
        }
        Request::Chart {
            kind,
            options,
            input,
        } => (kind, options, input),
    };

    let config = match &args.config {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?,
        None => Config::default(),
    };

    let dataset = read_dataset(input.as_deref())?;
    let build = vizkit::build_chart(kind, &dataset, &options, &config)?;
    let json = build.document.to_json().context("Failed to serialize chart")?;

    // Write the document before any warnings
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", json).context("Failed to write chart to stdout")?;
    handle.flush().context("Failed to flush stdout")?;

    for warning in &build.warnings {
        eprintln!("Warning: {}", warning);
    }

    Ok(())
}

fn read_dataset(input: Option<&Path>) -> Result<Dataset> {
    match input {
        Some(path) if path != Path::new("-") => Dataset::from_path(path)
            .with_context(|| format!("Failed to read CSV from {}", path.display())),
        _ => {
            if io::stdin().is_terminal() {
                bail!("No input data: pass a CSV file path or pipe CSV through stdin");
            }
            Dataset::from_csv_reader(io::stdin().lock()).context("Failed to read CSV from stdin")
        }
    }
}
