//! Run every example with the configured settings

use std::io::Write;

use serde::Serialize;
use tracing::info;

use super::{jacobi, newton, taylor};
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Combined output of the three examples.
#[derive(Debug, Clone, Serialize)]
pub struct AllReport {
    /// Break-even point
    pub newton: newton::NewtonReport,
    /// Circuit currents
    pub jacobi: jacobi::JacobiReport,
    /// Cosine series
    pub taylor: taylor::TaylorReport,
}

/// Build all three reports.
pub fn report(config: &CliConfig) -> Result<AllReport> {
    Ok(AllReport {
        newton: newton::report(&config.newton, false)?,
        jacobi: jacobi::report(&config.jacobi)?,
        taylor: taylor::report(&config.taylor)?,
    })
}

/// Run the all command
///
/// JSON output is a single document; table and CSV output are sections
/// separated by blank lines.
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    info!("Running all examples");

    let report = report(config)?;
    match config.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        format => {
            section(out, format, "Newton-Raphson: break-even point")?;
            newton::write(&report.newton, format, out)?;
            writeln!(out)?;
            section(out, format, "Jacobi: circuit currents")?;
            jacobi::write(&report.jacobi, format, out)?;
            writeln!(out)?;
            section(out, format, "Taylor series: cosine")?;
            taylor::write(&report.taylor, format, out)?;
        }
    }

    info!("All examples complete");
    Ok(())
}

fn section<W: Write>(out: &mut W, format: OutputFormat, title: &str) -> Result<()> {
    if format == OutputFormat::Table {
        writeln!(out, "== {title} ==")?;
    }
    Ok(())
}
