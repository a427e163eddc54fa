//! Terminal, JSON and CSV rendering of solver output.

pub mod chart;
pub mod summary;
mod table;
pub mod trace;

use std::io::Write;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

pub use chart::Chart;
pub use table::Table;

/// Write one command's output in the requested format.
///
/// `Table` prints the summary lines followed by the trace, `Json` the full
/// report, and `Csv` the trace alone.
pub fn emit<W, R>(
    out: &mut W,
    format: OutputFormat,
    summary: &[String],
    table: &Table,
    report: &R,
) -> Result<()>
where
    W: Write,
    R: Serialize,
{
    match format {
        OutputFormat::Table => {
            for line in summary {
                writeln!(out, "{line}")?;
            }
            writeln!(out)?;
            write!(out, "{table}")?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => table.write_csv(&mut *out)?,
    }
    Ok(())
}
