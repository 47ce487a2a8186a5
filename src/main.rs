//! Backgammon Verifier
//!
//! Reads a provably-fair report from a file or stdin and prints the verdict.
//! Exits 0 when verified, 1 when verification fails, 2 when the report
//! cannot be read.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use backgammon_fair::{
    config::{OutputFormat, VerifierConfig, DEFAULT_LOG_FILTER},
    verify_bytes, VerificationOutcome, VERSION,
};

#[derive(Parser, Debug)]
#[command(name = "backgammon-verify", version)]
#[command(about = "Verify the dice of a provably-fair backgammon report")]
struct Args {
    /// Report file (JSON). Reads stdin when omitted or "-"
    input: Option<PathBuf>,

    /// Output format (overrides VERIFIER_FORMAT)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Tracing filter, e.g. "debug" (overrides VERIFIER_LOG)
    #[arg(long)]
    log: Option<String>,
}

impl Args {
    fn into_config(self, mut config: VerifierConfig) -> VerifierConfig {
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(log) = self.log {
            config.log_filter = log;
        }
        config.with_input(self.input)
    }
}

fn main() -> ExitCode {
    let config = Args::parse().into_config(VerifierConfig::from_env());

    match run(&config) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("backgammon-verify: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(config: &VerifierConfig) -> Result<ExitCode> {
    init_tracing(&config.log_filter)?;
    info!("Backgammon verifier v{}", VERSION);

    let blob = read_report(config.input.as_deref())?;
    debug!(bytes = blob.len(), "report loaded");

    let result = verify_bytes(&blob);
    let outcome = VerificationOutcome::from_result(&result);

    match config.format {
        OutputFormat::Human => println!("{}", outcome.human_line()),
        OutputFormat::Json => println!("{}", outcome.to_json().context("encoding outcome")?),
    }

    Ok(if outcome.verified {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Log to stderr so stdout carries only the verdict.
fn init_tracing(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")
}

fn read_report(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            fs::read(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut blob = Vec::new();
            io::stdin()
                .read_to_end(&mut blob)
                .context("reading report from stdin")?;
            Ok(blob)
        }
    }
}
