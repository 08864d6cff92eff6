use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use probedict::{logging::init_logging, Session, Settings};
use tracing::info;

/// Runs dictionary commands from a script or stdin.
#[derive(Debug, Parser)]
#[command(name = "probedict", version, about)]
struct Args {
    /// File with one command per line. Reads stdin when omitted.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Initial capacity, overrides the configured one.
    #[arg(long, allow_negative_numbers = true)]
    capacity: Option<i64>,

    /// Settings file (TOML, YAML or JSON).
    #[arg(long, env = "PROBEDICT_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `probedict=trace`.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => Settings::load_from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::load().context("failed to load settings")?,
    };
    if let Some(capacity) = args.capacity {
        settings.dict.initial_capacity = capacity;
    }
    if let Some(level) = args.log_level {
        settings.logging.level = level;
    }

    init_logging(&settings.logging)
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let mut session = Session::from_settings(&settings)?;
    let stdout = io::stdout().lock();

    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            session.run(BufReader::new(file), stdout)?;
        }
        None => session.run(io::stdin().lock(), stdout)?,
    }

    info!(
        executed = session.executed(),
        errors = session.errors(),
        capacity = session.dict().capacity(),
        "session finished"
    );

    Ok(())
}
