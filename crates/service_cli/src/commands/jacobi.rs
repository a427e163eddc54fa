//! Jacobi on the three-loop circuit

use std::io::Write;

use serde::Serialize;
use tracing::info;

use numerics_core::math::solvers::{JacobiSolution, JacobiSolver};
use numerics_core::math::LinearSystem;
use numerics_core::problems::circuit;

use crate::config::{JacobiSettings, OutputFormat};
use crate::render::{self, summary, trace};
use crate::Result;

/// Full output of a circuit solve.
#[derive(Debug, Clone, Serialize)]
pub struct JacobiReport {
    /// Resistance matrix and source voltages
    pub system: LinearSystem<f64>,
    /// Trace and outcome
    pub solution: JacobiSolution<f64>,
    /// `A x - b` at the final iterate
    pub residual: Vec<f64>,
}

/// Solve the circuit's loop equations for the mesh currents.
pub fn report(settings: &JacobiSettings) -> Result<JacobiReport> {
    let config = settings.solver_config();
    config.validate()?;

    let system = circuit::system();
    let solution = JacobiSolver::new(config).solve(&system);
    let residual = system.residual(&solution.result.value)?;

    Ok(JacobiReport {
        system,
        solution,
        residual,
    })
}

/// Render a report in the requested format.
pub fn write<W: Write>(report: &JacobiReport, format: OutputFormat, out: &mut W) -> Result<()> {
    render::emit(
        out,
        format,
        &summary::jacobi(&report.solution, "I", "A"),
        &trace::jacobi_table(&report.solution, "I", "A"),
        report,
    )
}

/// Run the jacobi command
pub fn run<W: Write>(settings: &JacobiSettings, format: OutputFormat, out: &mut W) -> Result<()> {
    info!(
        tolerance = settings.tolerance,
        max_iterations = settings.max_iterations,
        %format,
        "Starting Jacobi"
    );

    let report = report(settings)?;
    write(&report, format, out)?;

    info!(
        converged = report.solution.result.converged,
        iterations = report.solution.result.iterations_used,
        "Jacobi complete"
    );
    Ok(())
}
