//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! command-line flags.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use numerics_core::math::series::TaylorCosine;
use numerics_core::math::solvers::SolverConfig;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown output format name
    #[error("Invalid output format: {0}. Must be one of: table, json, csv")]
    InvalidFormat(String),

    /// Numeric setting outside its valid range
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        /// Setting name
        key: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// Config file could not be read or parsed
    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Every iteration of every solver
    Trace,
    /// Per-iteration solver events
    Debug,
    /// Command start and finish
    #[default]
    Info,
    /// Non-convergence and ill-conditioning
    Warn,
    /// Failures only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Summary followed by an aligned trace table
    #[default]
    Table,
    /// Full report including trace and chart series
    Json,
    /// Trace rows only
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Newton-Raphson parameters for the break-even problem
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct NewtonSettings {
    /// Starting production level
    pub initial_guess: f64,
    /// Step-size tolerance
    pub tolerance: f64,
    /// Iteration budget
    pub max_iterations: usize,
}

impl Default for NewtonSettings {
    fn default() -> Self {
        Self {
            initial_guess: 1.0,
            tolerance: 1e-6,
            max_iterations: 50,
        }
    }
}

impl NewtonSettings {
    /// Solver configuration for these settings
    pub fn solver_config(&self) -> SolverConfig<f64> {
        SolverConfig {
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }
}

/// Jacobi parameters for the circuit problem
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct JacobiSettings {
    /// Sweep error tolerance
    pub tolerance: f64,
    /// Sweep budget
    pub max_iterations: usize,
}

impl Default for JacobiSettings {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 100,
        }
    }
}

impl JacobiSettings {
    /// Solver configuration for these settings
    pub fn solver_config(&self) -> SolverConfig<f64> {
        SolverConfig {
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }
}

/// Taylor series parameters
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TaylorSettings {
    /// Evaluation point
    pub x: f64,
    /// Number of series terms
    pub terms: usize,
}

impl Default for TaylorSettings {
    fn default() -> Self {
        Self { x: 1.0, terms: 10 }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
    /// Newton-Raphson defaults
    pub newton: NewtonSettings,
    /// Jacobi defaults
    pub jacobi: JacobiSettings,
    /// Taylor series defaults
    pub taylor: TaylorSettings,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            format: OutputFormat::default(),
            newton: NewtonSettings::default(),
            jacobi: JacobiSettings::default(),
            taylor: TaylorSettings::default(),
        }
    }
}

fn parse_env<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        reason: format!("cannot parse '{}'", value),
    })
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Override settings from `NUMERICS_*` variables found by `lookup`
    ///
    /// Recognised keys: `NUMERICS_LOG_LEVEL`, `NUMERICS_FORMAT`,
    /// `NUMERICS_NEWTON_GUESS`, `NUMERICS_NEWTON_TOLERANCE`,
    /// `NUMERICS_NEWTON_MAX_ITERATIONS`, `NUMERICS_JACOBI_TOLERANCE`,
    /// `NUMERICS_JACOBI_MAX_ITERATIONS`, `NUMERICS_TAYLOR_X`,
    /// `NUMERICS_TAYLOR_TERMS`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("NUMERICS_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&v)?;
        }
        if let Some(v) = lookup("NUMERICS_FORMAT") {
            self.format = OutputFormat::from_str(&v)?;
        }
        if let Some(v) = lookup("NUMERICS_NEWTON_GUESS") {
            self.newton.initial_guess = parse_env("NUMERICS_NEWTON_GUESS", &v)?;
        }
        if let Some(v) = lookup("NUMERICS_NEWTON_TOLERANCE") {
            self.newton.tolerance = parse_env("NUMERICS_NEWTON_TOLERANCE", &v)?;
        }
        if let Some(v) = lookup("NUMERICS_NEWTON_MAX_ITERATIONS") {
            self.newton.max_iterations = parse_env("NUMERICS_NEWTON_MAX_ITERATIONS", &v)?;
        }
        if let Some(v) = lookup("NUMERICS_JACOBI_TOLERANCE") {
            self.jacobi.tolerance = parse_env("NUMERICS_JACOBI_TOLERANCE", &v)?;
        }
        if let Some(v) = lookup("NUMERICS_JACOBI_MAX_ITERATIONS") {
            self.jacobi.max_iterations = parse_env("NUMERICS_JACOBI_MAX_ITERATIONS", &v)?;
        }
        if let Some(v) = lookup("NUMERICS_TAYLOR_X") {
            self.taylor.x = parse_env("NUMERICS_TAYLOR_X", &v)?;
        }
        if let Some(v) = lookup("NUMERICS_TAYLOR_TERMS") {
            self.taylor.terms = parse_env("NUMERICS_TAYLOR_TERMS", &v)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.newton
            .solver_config()
            .validate()
            .map_err(|e| ConfigError::InvalidValue {
                key: "newton",
                reason: e.to_string(),
            })?;
        if !self.newton.initial_guess.is_finite() {
            return Err(ConfigError::InvalidValue {
                key: "newton.initial_guess",
                reason: "must be finite".to_string(),
            });
        }
        self.jacobi
            .solver_config()
            .validate()
            .map_err(|e| ConfigError::InvalidValue {
                key: "jacobi",
                reason: e.to_string(),
            })?;
        TaylorCosine::try_new(self.taylor.terms).map_err(|e| ConfigError::InvalidValue {
            key: "taylor.terms",
            reason: e.to_string(),
        })?;
        if !self.taylor.x.is_finite() {
            return Err(ConfigError::InvalidValue {
                key: "taylor.x",
                reason: "must be finite".to_string(),
            });
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }
        Ok(())
    }
}

/// Global CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Output format override
    pub format: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
///
/// Per-command flags (`--tolerance` and friends) are applied afterwards by
/// the command itself.
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = if let Some(config_path) = &cli.config_file {
        CliConfig::from_file(config_path)?
    } else {
        CliConfig::default()
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.newton.initial_guess, 1.0);
        assert_eq!(config.newton.tolerance, 1e-6);
        assert_eq!(config.newton.max_iterations, 50);
        assert_eq!(config.jacobi.max_iterations, 100);
        assert_eq!(config.taylor.terms, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Warn").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("verbose").is_err());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert!(matches!(
            OutputFormat::from_str("xml"),
            Err(ConfigError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_toml_partial_sections() {
        let config = CliConfig::from_toml_str(
            r#"
            format = "json"

            [newton]
            initial_guess = 20.0

            [taylor]
            terms = 20
            "#,
        )
        .unwrap();

        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.newton.initial_guess, 20.0);
        assert_eq!(config.newton.tolerance, 1e-6);
        assert_eq!(config.taylor.terms, 20);
        assert_eq!(config.taylor.x, 1.0);
        assert_eq!(config.jacobi, JacobiSettings::default());
    }

    #[test]
    fn test_toml_rejects_invalid_values() {
        let err = CliConfig::from_toml_str("[jacobi]\ntolerance = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "jacobi", .. }));

        let err = CliConfig::from_toml_str("[taylor]\nterms = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "taylor.terms", .. }));

        assert!(CliConfig::from_toml_str("log_level = \"loud\"\n").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();
        config
            .apply_env(env(&[
                ("NUMERICS_FORMAT", "csv"),
                ("NUMERICS_NEWTON_GUESS", "5"),
                ("NUMERICS_JACOBI_MAX_ITERATIONS", "7"),
                ("NUMERICS_TAYLOR_X", "3.14159"),
            ]))
            .unwrap();

        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.newton.initial_guess, 5.0);
        assert_eq!(config.jacobi.max_iterations, 7);
        assert_eq!(config.taylor.x, 3.14159);
    }

    #[test]
    fn test_env_parse_failure() {
        let mut config = CliConfig::default();
        let err = config
            .apply_env(env(&[("NUMERICS_TAYLOR_TERMS", "many")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "NUMERICS_TAYLOR_TERMS",
                ..
            }
        ));
    }

    #[test]
    fn test_cli_takes_precedence_over_env() {
        let cli = CliArgs {
            config_file: None,
            log_level: Some("debug".to_string()),
            format: Some("table".to_string()),
        };
        let config = build_config_with_env(
            &cli,
            env(&[("NUMERICS_FORMAT", "json"), ("NUMERICS_LOG_LEVEL", "warn")]),
        )
        .unwrap();

        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_missing_config_file() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/numerics.toml")),
            ..Default::default()
        };
        let err = build_config_with_env(&cli, |_| None).unwrap_err();
        assert!(matches!(err, ConfigError::FileError(_)));
    }

    #[test]
    fn test_validate_rejects_non_finite_inputs() {
        let mut config = CliConfig::default();
        config.taylor.x = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = CliConfig::default();
        config.newton.initial_guess = f64::INFINITY;
        assert!(config.validate().is_err());
    }
}
