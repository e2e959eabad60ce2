//! `license-recognizer` — resolve declared license names and classify LICENSE files.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Install the stderr log subscriber (`-v`, or `RUST_LOG`).
//! 3. Load config ([`license_recognizer::config::load_config`]) and build the catalog once.
//! 4. Run each lookup through one shared [`Recognizer`].
//! 5. Render the requested report.
//! 6. Exit `0`, or `1` under `--strict` when anything was unrecognized.

mod cli;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, ReportFormat};
use license_recognizer::config::load_config;
use license_recognizer::models::{LookupMode, Recognition};
use license_recognizer::report;
use license_recognizer::Recognizer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().context("resolving current directory")?;
    let config = load_config(&cwd, cli.config.as_deref())?;
    let catalog = config.build_catalog()?;
    let recognizer =
        Recognizer::new(&catalog).with_fallback_name(config.recognition.fallback_name.clone());

    let results = match &cli.command {
        Command::List => {
            match cli.report {
                ReportFormat::Terminal => report::terminal::render_catalog(&catalog),
                ReportFormat::Json => println!("{}", serde_json::to_string_pretty(catalog.all())?),
            }
            return Ok(());
        }
        Command::Name { names } => names
            .iter()
            .map(|name| Recognition::new(name.as_str(), LookupMode::Name, recognizer.by_name(name)))
            .collect::<Vec<_>>(),
        Command::Text { files } => {
            let mut results = Vec::with_capacity(files.len());
            for file in files {
                let text = read_input(file)?;
                let verdict = recognizer.by_text(&text);
                results.push(Recognition::new(file.display().to_string(), LookupMode::Text, verdict));
            }
            results
        }
    };

    match cli.report {
        ReportFormat::Terminal => report::terminal::render(&results, cli.quiet),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
    }

    if cli.strict && results.iter().any(|r| !r.recognized) {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading standard input")?;
        return Ok(text);
    }

    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
