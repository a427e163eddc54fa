//! Convergence summaries in plain text.

use numerics_core::format::{
    to_fixed, CURRENT_PLACES, FINAL_ERROR_PLACES, PERCENT_PLACES, SERIES_PLACES, TRACE_PLACES,
};
use numerics_core::math::series::TaylorApproximation;
use numerics_core::math::solvers::{JacobiSolution, NewtonSolution};
use numerics_core::types::Termination;

/// Newton outcome: the root on success, or the last iterate and a hint.
pub fn newton(solution: &NewtonSolution<f64>) -> Vec<String> {
    let result = &solution.result;
    match result.termination {
        Termination::Converged => vec![
            format!("Solution found after {} iterations", result.iterations_used),
            format!("Root: x = {}", to_fixed(result.value, TRACE_PLACES)),
            format!("Final error: {}", to_fixed(result.final_error, FINAL_ERROR_PLACES)),
        ],
        Termination::MaxIterationsReached => vec![
            format!(
                "The method did not converge after {} iterations",
                result.iterations_used
            ),
            format!("Last approximation: x = {}", to_fixed(result.value, TRACE_PLACES)),
            format!("Last error: {}", to_fixed(result.final_error, TRACE_PLACES)),
            "Suggestion: try a different initial guess".to_string(),
        ],
        Termination::DerivativeNearZero { x } => vec![
            format!(
                "The method stopped after {} iterations: derivative is near zero at x = {}",
                result.iterations_used,
                to_fixed(x, TRACE_PLACES)
            ),
            format!("Last error: {}", to_fixed(result.final_error, TRACE_PLACES)),
            "Suggestion: try a different initial guess".to_string(),
        ],
    }
}

/// Jacobi outcome with each unknown named `{label}{k}` and suffixed by `unit`.
pub fn jacobi(solution: &JacobiSolution<f64>, label: &str, unit: &str) -> Vec<String> {
    let result = &solution.result;
    let mut lines = Vec::new();

    if result.converged {
        lines.push(format!(
            "Solution found after {} iterations",
            result.iterations_used
        ));
        lines.extend(result.value.iter().enumerate().map(|(k, &v)| {
            format!("{label}{} = {} {unit}", k + 1, to_fixed(v, CURRENT_PLACES))
        }));
        lines.push(format!(
            "Final error: {}",
            to_fixed(result.final_error, FINAL_ERROR_PLACES)
        ));
    } else {
        lines.push(format!(
            "The method did not converge after {} iterations",
            result.iterations_used
        ));
        let last: Vec<String> = result
            .value
            .iter()
            .enumerate()
            .map(|(k, &v)| format!("{label}{} = {}", k + 1, to_fixed(v, CURRENT_PLACES)))
            .collect();
        lines.push(format!("Last approximation: {}", last.join(", ")));
        lines.push(format!(
            "Last error: {}",
            to_fixed(result.final_error, TRACE_PLACES)
        ));
    }

    if !solution.diagonal_dominant {
        lines.push(
            "Note: the matrix is not diagonally dominant, so convergence is not guaranteed"
                .to_string(),
        );
    }
    lines
}

/// Series value against `cos(x)` with absolute and relative error.
pub fn taylor(approximation: &TaylorApproximation<f64>) -> Vec<String> {
    let relative = match approximation.relative_error_checked() {
        Some(percent) => format!("{}%", to_fixed(percent, PERCENT_PLACES)),
        None => "undefined (exact value is zero)".to_string(),
    };
    vec![
        format!(
            "Approximation of cos({}) using {} terms",
            approximation.x,
            approximation.terms.len()
        ),
        format!(
            "Approximate value: {}",
            to_fixed(approximation.approximation, SERIES_PLACES)
        ),
        format!(
            "Exact value of cos({}): {}",
            approximation.x,
            to_fixed(approximation.exact_value, SERIES_PLACES)
        ),
        format!(
            "Absolute error: {}",
            to_fixed(approximation.absolute_error, SERIES_PLACES)
        ),
        format!("Relative error: {relative}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use numerics_core::math::series::TaylorCosine;
    use numerics_core::math::solvers::{JacobiSolver, NewtonRaphsonSolver, SolverConfig};
    use numerics_core::math::LinearSystem;
    use numerics_core::problems::circuit;

    #[test]
    fn test_newton_converged() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-6, 50));
        let solution = solver.solve(|x: f64| x * x - 4.0, |x: f64| 2.0 * x, 3.0);

        let lines = newton(&solution);

        assert_eq!(
            lines[0],
            format!("Solution found after {} iterations", solution.iterations.len())
        );
        assert_eq!(lines[1], "Root: x = 2.000000");
        assert!(lines[2].starts_with("Final error: 0.0000"));
    }

    #[test]
    fn test_newton_budget_exhausted() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-12, 2));
        let solution = solver.solve(|x: f64| x * x - 4.0, |x: f64| 2.0 * x, 3.0);

        let lines = newton(&solution);

        assert_eq!(lines[0], "The method did not converge after 2 iterations");
        assert_eq!(lines[3], "Suggestion: try a different initial guess");
    }

    #[test]
    fn test_newton_flat_derivative() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-6, 50));
        let solution = solver.solve(|x: f64| x * x + 1.0, |x: f64| 2.0 * x, 0.0);

        let lines = newton(&solution);

        assert!(lines[0].contains("derivative is near zero at x = 0.000000"));
        assert_eq!(lines[1], "Last error: Infinity");
    }

    #[test]
    fn test_jacobi_converged_lists_currents() {
        let solver = JacobiSolver::new(SolverConfig::new(1e-6, 100));
        let solution = solver.solve(&circuit::system());

        let lines = jacobi(&solution, "I", "A");

        assert_eq!(lines[0], "Solution found after 25 iterations");
        assert_eq!(lines[1], "I1 = 1.6286 A");
        assert_eq!(lines[2], "I2 = 0.6000 A");
        assert_eq!(lines[3], "I3 = 0.7714 A");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_jacobi_not_converged_non_dominant() {
        let system =
            LinearSystem::new(vec![vec![1.0, 3.0], vec![3.0, 1.0]], vec![4.0, 4.0]).unwrap();
        let solver = JacobiSolver::new(SolverConfig::new(1e-6, 3));
        let solution = solver.solve(&system);

        let lines = jacobi(&solution, "x", "");

        assert_eq!(lines[0], "The method did not converge after 3 iterations");
        assert!(lines[1].starts_with("Last approximation: x1 = "));
        assert!(lines.last().unwrap().contains("convergence is not guaranteed"));
    }

    #[test]
    fn test_taylor_lines() {
        let approximation = TaylorCosine::new(1).approximate(0.0_f64);

        let lines = taylor(&approximation);

        assert_eq!(lines[0], "Approximation of cos(0) using 1 terms");
        assert_eq!(lines[1], "Approximate value: 1.00000000");
        assert_eq!(lines[3], "Absolute error: 0.00000000");
        assert_eq!(lines[4], "Relative error: 0.0000%");
    }
}
