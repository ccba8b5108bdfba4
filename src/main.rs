use std::fs;
use std::io::{self, Read, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use logmend::cli::Cli;
use logmend::config::Config;
use logmend::report::DropReporter;
use logmend::{batch, BatchOutcome};

fn main() {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    if let Err(err) = run(&config) {
        eprintln!("logmend: {:#}", err);
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let input = read_input(config)?;
    let outcome = batch::process_batch(&input, config)?;

    report(config, &outcome);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !outcome.body.is_empty() {
        writeln!(out, "{}", outcome.body).context("failed to write output")?;
    }

    Ok(())
}

fn report(config: &Config, outcome: &BatchOutcome) {
    let mut reporter = DropReporter::new(config.output.quiet);
    for event in &outcome.drops {
        reporter.record(event);
    }
    reporter.record_repairs(outcome.repaired);

    if config.output.stats {
        if let Some(summary) = reporter.summary() {
            eprintln!("{}", summary);
        }
    }
}

/// Reads the whole batch up front; one batch is one unit of work.
/// Multiple files are joined on line boundaries.
fn read_input(config: &Config) -> Result<String> {
    if config.input.files.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        return Ok(input);
    }

    let mut input = String::new();
    for path in &config.input.files {
        let contents =
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
        if !input.is_empty() && !input.ends_with('\n') {
            input.push('\n');
        }
        input.push_str(&contents);
    }
    Ok(input)
}
