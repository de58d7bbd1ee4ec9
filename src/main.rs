//! Splice CLI - Drum Machine Pattern Decoder
//!
//! Command-line interface for decoding `.splice` pattern files.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use splice::cli::{commands, Cli, Commands};
use splice::SpliceError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    info!("Splice decoder v{}", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            let mut stderr = io::stderr().lock();
            let _ = writeln!(stderr, "Error: {:#}", err);
            if let Some(splice_err) = err.downcast_ref::<SpliceError>() {
                let _ = commands::report_suggestions(splice_err, &mut stderr);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = commands::load_config(cli.config.as_deref(), cli.ignore_payload_length)
        .context("failed to load decoder config")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let code = match cli.command {
        Commands::Show { paths } => {
            commands::show(&paths, &config, &mut out).context("failed to decode pattern")?;
            ExitCode::SUCCESS
        }
        Commands::Json { path } => {
            commands::json(&path, &config, &mut out)
                .with_context(|| format!("failed to decode {}", path.display()))?;
            ExitCode::SUCCESS
        }
        Commands::Scan { dir } => {
            let summary = commands::scan(&dir, &config, &mut out)
                .with_context(|| format!("failed to scan {}", dir.display()))?;
            info!(
                "Scan complete: {} decoded, {} failed",
                summary.decoded, summary.failed
            );
            if summary.failed > 0 {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    };

    out.flush()?;
    Ok(code)
}
