//! Command-line front end for the numerics iterative methods.
//!
//! The binary (`numerics`) lives in `main.rs`; this library holds the
//! configuration layer, the commands and the renderers so they can be
//! tested without spawning a process.

pub mod commands;
pub mod config;
pub mod error;
pub mod render;

pub use error::{CliError, Result};
