//! Newton-Raphson on the break-even problem

use std::io::Write;

use serde::Serialize;
use tracing::info;

use numerics_core::format::to_fixed;
use numerics_core::math::solvers::{NewtonRaphsonSolver, NewtonSolution};
use numerics_core::problems::break_even;

use crate::config::{NewtonSettings, OutputFormat};
use crate::render::{self, chart, summary, trace, Chart};
use crate::{CliError, Result};

/// Full output of a break-even solve.
#[derive(Debug, Clone, Serialize)]
pub struct NewtonReport {
    /// Starting production level
    pub initial_guess: f64,
    /// Whether the derivative came from dual numbers
    pub autodiff: bool,
    /// Trace and outcome
    pub solution: NewtonSolution<f64>,
    /// Iterates for plotting
    pub chart: Chart,
}

/// Solve `profit(x) = 0` from the configured initial guess.
///
/// With `autodiff` the marginal profit is taken from dual numbers instead of
/// the closed-form derivative.
pub fn report(settings: &NewtonSettings, autodiff: bool) -> Result<NewtonReport> {
    let config = settings.solver_config();
    config.validate()?;
    if !settings.initial_guess.is_finite() {
        return Err(CliError::InvalidArgument(format!(
            "initial guess must be finite, got {}",
            settings.initial_guess
        )));
    }

    let solver = NewtonRaphsonSolver::new(config);
    let solution = if autodiff {
        solver.solve_ad(break_even::profit_dual, settings.initial_guess)
    } else {
        solver.solve(
            break_even::profit,
            break_even::profit_derivative,
            settings.initial_guess,
        )
    };

    Ok(NewtonReport {
        initial_guess: settings.initial_guess,
        autodiff,
        chart: chart::newton(&solution),
        solution,
    })
}

/// Summary lines, with the break-even reading on success.
pub fn summary_lines(report: &NewtonReport) -> Vec<String> {
    let mut lines = summary::newton(&report.solution);
    if let Some(root) = report.solution.root() {
        lines.push(format!(
            "Interpretation: profit reaches zero at a production level of {} units",
            to_fixed(root, 1)
        ));
    }
    lines
}

/// Render a report in the requested format.
pub fn write<W: Write>(report: &NewtonReport, format: OutputFormat, out: &mut W) -> Result<()> {
    render::emit(
        out,
        format,
        &summary_lines(report),
        &trace::newton_table(&report.solution),
        report,
    )
}

/// Run the newton command
pub fn run<W: Write>(
    settings: &NewtonSettings,
    autodiff: bool,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    info!(
        initial_guess = settings.initial_guess,
        tolerance = settings.tolerance,
        max_iterations = settings.max_iterations,
        autodiff,
        %format,
        "Starting Newton-Raphson"
    );

    let report = report(settings, autodiff)?;
    write(&report, format, out)?;

    info!(
        converged = report.solution.result.converged,
        iterations = report.solution.result.iterations_used,
        "Newton-Raphson complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_settings_find_lower_root() {
        let report = report(&NewtonSettings::default(), false).unwrap();

        assert!(report.solution.result.converged);
        assert_eq!(report.solution.result.iterations_used, 4);
        assert_relative_eq!(report.solution.result.value, 2.632, epsilon = 1e-3);
    }

    #[test]
    fn test_autodiff_matches_closed_form() {
        let closed = report(&NewtonSettings::default(), false).unwrap();
        let dual = report(&NewtonSettings::default(), true).unwrap();

        assert_eq!(closed.solution.iterations.len(), dual.solution.iterations.len());
        assert_relative_eq!(
            closed.solution.result.value,
            dual.solution.result.value,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_interpretation_line() {
        let report = report(&NewtonSettings::default(), false).unwrap();

        let lines = summary_lines(&report);

        assert_eq!(
            lines.last().unwrap(),
            "Interpretation: profit reaches zero at a production level of 2.6 units"
        );
    }

    #[test]
    fn test_rejects_bad_tolerance() {
        let settings = NewtonSettings {
            tolerance: 0.0,
            ..NewtonSettings::default()
        };
        assert!(matches!(report(&settings, false), Err(CliError::Solver(_))));
    }

    #[test]
    fn test_rejects_non_finite_guess() {
        let settings = NewtonSettings {
            initial_guess: f64::NAN,
            ..NewtonSettings::default()
        };
        assert!(matches!(
            report(&settings, false),
            Err(CliError::InvalidArgument(_))
        ));
    }
}
