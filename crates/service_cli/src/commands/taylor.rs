//! Truncated cosine series

use std::io::Write;

use serde::Serialize;
use tracing::info;

use numerics_core::math::series::{TaylorApproximation, TaylorCosine};

use crate::config::{OutputFormat, TaylorSettings};
use crate::render::{self, chart, summary, trace, Chart};
use crate::{CliError, Result};

/// Full output of a series evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct TaylorReport {
    /// Terms and accuracy
    pub approximation: TaylorApproximation<f64>,
    /// Partial sums against the exact value
    pub chart: Chart,
}

/// Sum the configured number of cosine terms at the configured point.
pub fn report(settings: &TaylorSettings) -> Result<TaylorReport> {
    let series = TaylorCosine::try_new(settings.terms)?;
    if !settings.x.is_finite() {
        return Err(CliError::InvalidArgument(format!(
            "x must be finite, got {}",
            settings.x
        )));
    }

    let approximation = series.approximate(settings.x);
    Ok(TaylorReport {
        chart: chart::taylor(&approximation),
        approximation,
    })
}

/// Render a report in the requested format.
pub fn write<W: Write>(report: &TaylorReport, format: OutputFormat, out: &mut W) -> Result<()> {
    render::emit(
        out,
        format,
        &summary::taylor(&report.approximation),
        &trace::taylor_table(&report.approximation),
        report,
    )
}

/// Run the taylor command
pub fn run<W: Write>(settings: &TaylorSettings, format: OutputFormat, out: &mut W) -> Result<()> {
    info!(
        x = settings.x,
        terms = settings.terms,
        %format,
        "Starting Taylor series"
    );

    let report = report(settings)?;
    write(&report, format, out)?;

    info!(
        absolute_error = report.approximation.absolute_error,
        "Taylor series complete"
    );
    Ok(())
}
