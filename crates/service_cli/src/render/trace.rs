//! Iteration traces as tables.

use numerics_core::format::{to_fixed, SERIES_PLACES, TRACE_PLACES};
use numerics_core::math::series::TaylorApproximation;
use numerics_core::math::solvers::{JacobiSolution, NewtonSolution};

use super::Table;

/// One row per Newton step, every field to [`TRACE_PLACES`].
pub fn newton_table(solution: &NewtonSolution<f64>) -> Table {
    let mut table = Table::new(["Iteration", "x", "f(x)", "f'(x)", "x_next", "Error"]);
    for record in &solution.iterations {
        table.push_row(vec![
            record.index.to_string(),
            to_fixed(record.x, TRACE_PLACES),
            to_fixed(record.fx, TRACE_PLACES),
            to_fixed(record.dfx, TRACE_PLACES),
            to_fixed(record.x_next, TRACE_PLACES),
            to_fixed(record.error, TRACE_PLACES),
        ]);
    }
    table
}

/// One row per Jacobi sweep with a column per unknown.
///
/// Unknowns are headed `{label}{k} ({unit})` with `k` counted from one.
pub fn jacobi_table(solution: &JacobiSolution<f64>, label: &str, unit: &str) -> Table {
    let size = solution.result.value.len();
    let headers = std::iter::once("Iteration".to_string())
        .chain((1..=size).map(|k| format!("{label}{k} ({unit})")))
        .chain(std::iter::once("Max error".to_string()));

    let mut table = Table::new(headers);
    for record in &solution.iterations {
        let row = std::iter::once(record.index.to_string())
            .chain(record.solution.iter().map(|&v| to_fixed(v, TRACE_PLACES)))
            .chain(std::iter::once(to_fixed(record.max_error, TRACE_PLACES)))
            .collect();
        table.push_row(row);
    }
    table
}

/// One row per series term, values to [`SERIES_PLACES`].
pub fn taylor_table(approximation: &TaylorApproximation<f64>) -> Table {
    let mut table = Table::new(["n", "Term value", "Cumulative approximation"]);
    for term in &approximation.terms {
        table.push_row(vec![
            term.n.to_string(),
            to_fixed(term.term_value, SERIES_PLACES),
            to_fixed(term.cumulative_approximation, SERIES_PLACES),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use numerics_core::math::series::TaylorCosine;
    use numerics_core::math::solvers::{JacobiSolver, NewtonRaphsonSolver, SolverConfig};
    use numerics_core::problems::circuit;

    #[test]
    fn test_newton_table_rows() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::new(1e-6, 50));
        let solution = solver.solve(|x: f64| x * x - 4.0, |x: f64| 2.0 * x, 3.0);

        let table = newton_table(&solution);

        assert_eq!(table.headers().len(), 6);
        assert_eq!(table.rows().len(), solution.iterations.len());
        // x1 = 3 - 5/6
        assert_eq!(
            table.rows()[0],
            vec!["1", "3.000000", "5.000000", "6.000000", "2.166667", "0.833333"]
        );
    }

    #[test]
    fn test_jacobi_table_headers_and_first_sweep() {
        let solver = JacobiSolver::new(SolverConfig::new(1e-6, 100));
        let solution = solver.solve(&circuit::system());

        let table = jacobi_table(&solution, "I", "A");

        assert_eq!(
            table.headers(),
            &["Iteration", "I1 (A)", "I2 (A)", "I3 (A)", "Max error"]
        );
        assert_eq!(
            table.rows()[0],
            vec!["1", "1.200000", "0.000000", "0.000000", "1.200000"]
        );
        assert_eq!(table.rows().len(), 25);
    }

    #[test]
    fn test_taylor_table_rows() {
        let approximation = TaylorCosine::new(3).approximate(1.0_f64);

        let table = taylor_table(&approximation);

        assert_eq!(table.rows()[0], vec!["0", "1.00000000", "1.00000000"]);
        assert_eq!(table.rows()[1], vec!["1", "-0.50000000", "0.50000000"]);
        assert_eq!(table.rows()[2][2], "0.54166667");
    }
}
