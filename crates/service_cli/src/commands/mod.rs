//! Subcommand implementations
//!
//! Each command builds a serialisable report from its settings, then
//! renders it through [`crate::render::emit`].

pub mod all;
pub mod jacobi;
pub mod newton;
pub mod taylor;
