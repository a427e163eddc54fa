//! Numerics CLI - iterative numerical methods from the command line
//!
//! # Commands
//!
//! - `numerics newton` - Break-even point of the profit model (Newton-Raphson)
//! - `numerics jacobi` - Mesh currents of the three-loop circuit (Jacobi)
//! - `numerics taylor` - Truncated Taylor series for cosine
//! - `numerics all` - Every example with the configured settings
//!
//! Settings come from `--config <FILE>` (TOML), then `NUMERICS_*`
//! environment variables, then command-line flags.

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use numerics_cli::commands;
use numerics_cli::config::{build_config, CliArgs, LogLevel};
use numerics_cli::Result;

/// Iterative numerical methods: root finding, linear systems, series
#[derive(Parser)]
#[command(name = "numerics")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (table, json, csv)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the break-even production level with Newton-Raphson
    Newton {
        /// Initial guess
        #[arg(short, long, allow_negative_numbers = true)]
        guess: Option<f64>,

        /// Step-size tolerance
        #[arg(short, long)]
        tolerance: Option<f64>,

        /// Maximum number of iterations
        #[arg(short, long)]
        max_iterations: Option<usize>,

        /// Take the derivative from dual numbers
        #[arg(long)]
        autodiff: bool,
    },

    /// Solve the circuit loop equations with Jacobi iteration
    Jacobi {
        /// Sweep error tolerance
        #[arg(short, long)]
        tolerance: Option<f64>,

        /// Maximum number of sweeps
        #[arg(short, long)]
        max_iterations: Option<usize>,
    },

    /// Approximate cos(x) with a truncated Taylor series
    Taylor {
        /// Evaluation point
        #[arg(short, long, allow_negative_numbers = true)]
        x: Option<f64>,

        /// Number of terms
        #[arg(short = 'n', long)]
        terms: Option<usize>,
    },

    /// Run every example
    All,
}

fn init_tracing(level: LogLevel) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config_file: cli.config.clone(),
        log_level: cli.log_level.clone(),
        format: cli.format.clone(),
    };
    let mut config = build_config(&args)?;
    if cli.verbose {
        config.log_level = LogLevel::Debug;
    }

    init_tracing(config.log_level);
    debug!(?config, "Configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Newton {
            guess,
            tolerance,
            max_iterations,
            autodiff,
        } => {
            let mut settings = config.newton;
            if let Some(guess) = guess {
                settings.initial_guess = guess;
            }
            if let Some(tolerance) = tolerance {
                settings.tolerance = tolerance;
            }
            if let Some(max_iterations) = max_iterations {
                settings.max_iterations = max_iterations;
            }
            commands::newton::run(&settings, autodiff, config.format, &mut out)
        }
        Commands::Jacobi {
            tolerance,
            max_iterations,
        } => {
            let mut settings = config.jacobi;
            if let Some(tolerance) = tolerance {
                settings.tolerance = tolerance;
            }
            if let Some(max_iterations) = max_iterations {
                settings.max_iterations = max_iterations;
            }
            commands::jacobi::run(&settings, config.format, &mut out)
        }
        Commands::Taylor { x, terms } => {
            let mut settings = config.taylor;
            if let Some(x) = x {
                settings.x = x;
            }
            if let Some(terms) = terms {
                settings.terms = terms;
            }
            commands::taylor::run(&settings, config.format, &mut out)
        }
        Commands::All => commands::all::run(&config, &mut out),
    }
}
