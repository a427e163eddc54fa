//! CLI error types.

use thiserror::Error;

use crate::config::ConfigError;
use numerics_core::types::SolverError;

/// Errors surfaced by the `numerics` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Solver parameters were rejected
    #[error("Invalid solver parameters: {0}")]
    Solver(#[from] SolverError),

    /// Command-line argument outside the supported set
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// CSV serialisation failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
