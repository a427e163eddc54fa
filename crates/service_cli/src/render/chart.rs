//! Sequences suitable for plotting convergence.

use numerics_core::format::{round_to, TRACE_PLACES};
use numerics_core::math::series::TaylorApproximation;
use numerics_core::math::solvers::NewtonSolution;
use serde::Serialize;

/// A labelled x axis and one or more value series over it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    /// One label per point.
    pub labels: Vec<String>,
    /// Plotted series, each as long as `labels`.
    pub series: Vec<ChartSeries>,
}

/// A named sequence of values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    /// Legend entry.
    pub name: String,
    /// Values in label order.
    pub values: Vec<f64>,
}

/// Newton iterates `x_next`, rounded as they appear in the trace.
pub fn newton(solution: &NewtonSolution<f64>) -> Chart {
    Chart {
        labels: (1..=solution.iterations.len())
            .map(|i| format!("Iter {i}"))
            .collect(),
        series: vec![ChartSeries {
            name: "Root approximation".to_string(),
            values: solution
                .iterates()
                .into_iter()
                .map(|x| round_to(x, TRACE_PLACES))
                .collect(),
        }],
    }
}

/// Partial sums against the exact cosine, one point per term.
pub fn taylor(approximation: &TaylorApproximation<f64>) -> Chart {
    Chart {
        labels: (1..=approximation.terms.len())
            .map(|i| format!("Term {i}"))
            .collect(),
        series: vec![
            ChartSeries {
                name: "Taylor approximation".to_string(),
                values: approximation.partial_sums(),
            },
            ChartSeries {
                name: "Exact cos(x)".to_string(),
                values: approximation.exact_series(),
            },
        ],
    }
}
