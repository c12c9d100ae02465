use std::io::Write;

use log::{debug, warn};

use crate::error::{Result, WorkoutError};
use crate::input::Package;
use crate::message::InfoMessage;
use crate::metrics::Metrics;
use crate::package::read_package;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Fast tekstmal, én linje per økt
    #[default]
    Text,
    /// Ett JSON-objekt per linje
    Json,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub format: OutputFormat,
    /// Hopp over pakker som feiler i stedet for å avbryte kjøringen.
    pub keep_going: bool,
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub emitted: usize,
    /// (indeks i input, feil) for pakker som ble hoppet over.
    pub failed: Vec<(usize, WorkoutError)>,
}

impl RunReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Dispatch + oppsummering for én pakke.
pub fn summarize(package: &Package) -> Result<InfoMessage> {
    let training = read_package(&package.code, &package.data)?;
    Ok(training.summary())
}

pub fn render(info: &InfoMessage, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(info.get_message()),
        OutputFormat::Json => Ok(serde_json::to_string(info).map_err(std::io::Error::from)?),
    }
}

/// Kjører pakkene i rekkefølge og skriver én linje per økt til `out`.
///
/// Uten `keep_going` avbryter første dispatch-feil resten av kjøringen.
/// Skrivefeil avbryter alltid.
pub fn run_packages<W: Write>(
    packages: &[Package],
    out: &mut W,
    opts: RunOptions,
    metrics: &Metrics,
) -> Result<RunReport> {
    let mut report = RunReport::default();

    for (idx, package) in packages.iter().enumerate() {
        match summarize(package) {
            Ok(info) => {
                writeln!(out, "{}", render(&info, opts.format)?)?;
                metrics.processed(&info.training_type).inc();
                report.emitted += 1;
            }
            Err(e) => {
                metrics.rejected(e.reason()).inc();
                if !opts.keep_going {
                    warn!("pakke #{} ({}) feilet, avbryter: {}", idx, package.code, e);
                    return Err(e);
                }
                warn!("pakke #{} ({}) hoppet over: {}", idx, package.code, e);
                report.failed.push((idx, e));
            }
        }
    }

    debug!("kjøring ferdig: {} skrevet, {} feilet", report.emitted, report.failed.len());
    Ok(report)
}
