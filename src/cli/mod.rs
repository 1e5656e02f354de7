//! Command-line handling for Passcard.
//!
//! This module turns parsed arguments into card generation and maps failures
//! to exit codes for scripting.

pub mod common;
pub mod generate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use generate::{GenerateArgs, PrintFormat};
