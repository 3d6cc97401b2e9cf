//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use crate::frontend::diagnostics::{self, CompileError};
use crate::frontend::listing::{render_symbols, render_tokens};
use crate::frontend::symbols::SymbolTable;
use crate::frontend::{lexer, parser};

use super::{CliError, CliResult, ExitCode};

/// Default cap on source file size (10 MB).
pub const MAX_SOURCE_SIZE: u64 = 10 * 1024 * 1024;

/// Read a source file, refusing files larger than `max_size` bytes.
///
/// ## Errors
/// - The file cannot be accessed or read
/// - The file exceeds `max_size`
pub fn read_source(file_path: &Path, max_size: u64) -> CliResult<String> {
    let shown = file_path.display();
    let metadata = fs::metadata(file_path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{shown}': {e}")))?;

    if metadata.len() > max_size {
        return Err(CliError::failure(format!(
            "Source file '{shown}' is too large ({} bytes, max {max_size} bytes)",
            metadata.len(),
        )));
    }

    fs::read_to_string(file_path)
        .map_err(|e| CliError::failure(format!("Error reading file '{shown}': {e}")))
}

/// Render a front-end error against its source for the terminal.
fn report_failure(file_path: &Path, source: &str, err: CompileError) -> CliError {
    let name = file_path.display().to_string();
    let report: miette::Report = diagnostics::report(&name, source, err);
    CliError::failure(format!("{report:?}"))
}

/// Tokenize and print the token stream.
pub fn lex_file(file_path: &Path, max_size: u64) -> CliResult<ExitCode> {
    let source = read_source(file_path, max_size)?;
    let tokens = lexer::lex(&source).map_err(|err| report_failure(file_path, &source, err))?;
    tracing::debug!(file = %file_path.display(), tokens = tokens.len(), "lexed");
    print!("{}", render_tokens(&tokens));
    Ok(ExitCode::SUCCESS)
}

/// Lex, parse and scope-check a file.
pub fn check_file(file_path: &Path, max_size: u64) -> CliResult<ExitCode> {
    let source = read_source(file_path, max_size)?;
    check_source(file_path, &source)?;
    println!("✓ {} checks out", file_path.display());
    Ok(ExitCode::SUCCESS)
}

/// Check a file and list the global symbols that survive parsing.
pub fn symbols_file(file_path: &Path, max_size: u64) -> CliResult<ExitCode> {
    let source = read_source(file_path, max_size)?;
    let globals = check_source(file_path, &source)?;
    print!("{}", render_symbols(&globals));
    Ok(ExitCode::SUCCESS)
}

fn check_source(file_path: &Path, source: &str) -> CliResult<SymbolTable> {
    let tokens = lexer::lex(source).map_err(|err| report_failure(file_path, source, err))?;
    parser::parse(tokens).map_err(|err| report_failure(file_path, source, err))
}
