//! CLI module for the Vega front end
//!
//! ## Usage
//!
//! - `vega <file>` - Lex, parse and scope-check a source file
//! - `vega --lex <file>` - Print the token stream with source lines and tag codes
//! - `vega --symbols <file>` - Check a file and list its global symbols
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use thiserror::Error;

use crate::version::VEGA_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Front end for the Vega programming language
#[derive(Parser, Debug)]
#[command(name = "vega")]
#[command(version = VEGA_VERSION)]
#[command(about = "Lexer, parser and scope checker for the Vega programming language", long_about = None)]
pub struct Cli {
    /// File to check (default action)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Tokenize only and print the token stream
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,

    /// Check the file and list its global symbols
    #[arg(long = "symbols", value_name = "FILE", conflicts_with_all = ["file", "lex_file"])]
    pub symbols_file: Option<PathBuf>,

    /// Largest accepted source file, in bytes
    #[arg(long = "max-size", value_name = "BYTES", default_value_t = commands::MAX_SOURCE_SIZE)]
    pub max_size: u64,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file, cli.max_size);
    }
    if let Some(file) = cli.symbols_file {
        return commands::symbols_file(&file, cli.max_size);
    }
    match cli.file {
        Some(file) => commands::check_file(&file, cli.max_size),
        None => Err(CliError::failure(
            "Error: no input file (try `vega --help`)",
        )),
    }
}

// ============================================================================
// Tests
// ============================================================================
