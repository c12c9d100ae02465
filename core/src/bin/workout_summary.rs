use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use workout_core::{
    load_packages, parse_packages, run_packages, sample_packages, Metrics, OutputFormat, RunOptions,
};

/// Oppsummerer treningsøkter fra sensorpakker.
#[derive(Debug, Parser)]
#[command(name = "workout-summary", version, about)]
struct Args {
    /// JSON-fil med pakker, eller "-" for stdin. Uten: innebygde eksempelpakker.
    input: Option<PathBuf>,

    /// Utdataformat
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Hopp over pakker som feiler i stedet for å avbryte
    #[arg(long)]
    keep_going: bool,

    /// Skriv Prometheus-tellere til stderr til slutt
    #[arg(long)]
    metrics: bool,
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let packages = match args.input.as_deref() {
        None => sample_packages(),
        Some(p) if p.as_os_str() == "-" => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("kunne ikke lese stdin")?;
            parse_packages(&buf)?
        }
        Some(p) => load_packages(p)
            .with_context(|| format!("kunne ikke lese pakker fra {}", p.display()))?,
    };
    info!("{} pakker i kø", packages.len());

    let metrics = Metrics::global().context("kunne ikke registrere metrics")?;
    let opts = RunOptions {
        format: args.format,
        keep_going: args.keep_going,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run_packages(&packages, &mut out, opts, metrics);
    out.flush()?;

    // tellerne skrives også når kjøringen avbrytes
    if args.metrics {
        eprint!("{}", metrics.render()?);
    }
    let report = result?;

    if report.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        for (idx, err) in &report.failed {
            eprintln!("pakke #{idx}: {err}");
        }
        Ok(ExitCode::FAILURE)
    }
}
