//! Diagnostics for the Vega front end.
//!
//! Every failure surfaces as one [`CompileError`]: a kind, a message, the offending source line and
//! optional hints. Errors from the internal collections ([`UnderflowError`], [`ScopeError`]) are
//! converted at the point where the parser knows the current line.
//!
//! [`CompileError`] implements [`miette::Diagnostic`]; [`report`] and [`format_error`] attach the source
//! text so the offending line is quoted.

use std::fmt;
use std::io;

use miette::{
    Diagnostic, GraphicalReportHandler, GraphicalTheme, LabeledSpan, NamedSource, SourceCode,
    SourceSpan,
};
use thiserror::Error;
use vega_core::collections::UnderflowError;

use crate::symbols::ScopeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Token tag does not match what the production requires.
    Syntax,
    AlreadyDeclared,
    Undeclared,
    NotCallable,
    NotAssignable,
    /// Leaving the global scope.
    ScopeUnderflow,
    /// Removing from an empty stack or queue, including running out of tokens.
    QueueUnderflow,
    UnterminatedLiteral,
    /// Integer literal that does not fit in an `i64`.
    InvalidNumber,
    /// The character source failed to read.
    Io,
}

impl ErrorKind {
    /// Stable diagnostic code suffix.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Syntax => "syntax",
            ErrorKind::AlreadyDeclared => "already_declared",
            ErrorKind::Undeclared => "undeclared",
            ErrorKind::NotCallable => "not_callable",
            ErrorKind::NotAssignable => "not_assignable",
            ErrorKind::ScopeUnderflow => "scope_underflow",
            ErrorKind::QueueUnderflow => "queue_underflow",
            ErrorKind::UnterminatedLiteral => "unterminated_literal",
            ErrorKind::InvalidNumber => "invalid_number",
            ErrorKind::Io => "io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ErrorKind::Syntax => "syntax error",
            ErrorKind::AlreadyDeclared => "already declared",
            ErrorKind::Undeclared => "undeclared identifier",
            ErrorKind::NotCallable => "not callable",
            ErrorKind::NotAssignable => "not assignable",
            ErrorKind::ScopeUnderflow => "scope underflow",
            ErrorKind::QueueUnderflow => "queue underflow",
            ErrorKind::UnterminatedLiteral => "unterminated literal",
            ErrorKind::InvalidNumber => "invalid number",
            ErrorKind::Io => "read error",
        };
        f.write_str(text)
    }
}

/// A front-end error with the 1-based line it was detected on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at line {line}: {message}")]
pub struct CompileError {
    pub kind: ErrorKind,
    pub message: String,
    pub line: usize,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            hints: Vec::new(),
        }
    }

    pub fn syntax(message: impl Into<String>, line: usize) -> Self {
        Self::new(ErrorKind::Syntax, message, line)
    }

    /// `found` did not match the `expected` tag.
    pub fn unexpected(expected: impl fmt::Display, found: impl fmt::Display, line: usize) -> Self {
        Self::syntax(format!("expected {expected}, found '{found}'"), line)
    }

    /// The token stream ran dry while a production still needed `expected`.
    pub fn unexpected_eof(expected: impl fmt::Display, line: usize) -> Self {
        Self::new(
            ErrorKind::QueueUnderflow,
            format!("unexpected end of input, expected {expected}"),
            line,
        )
    }

    pub fn already_declared(name: &str, line: usize) -> Self {
        Self::new(
            ErrorKind::AlreadyDeclared,
            format!("'{name}' is already declared in this scope"),
            line,
        )
        .with_hint("pick another name or remove the earlier declaration")
    }

    pub fn undeclared(name: &str, line: usize) -> Self {
        Self::new(
            ErrorKind::Undeclared,
            format!("'{name}' is not declared"),
            line,
        )
        .with_hint("declare it before use, e.g. `name: int = 0;`")
    }

    pub fn not_callable(name: &str, line: usize) -> Self {
        Self::new(
            ErrorKind::NotCallable,
            format!("'{name}' is not a function"),
            line,
        )
    }

    pub fn not_assignable(name: &str, reason: &str, line: usize) -> Self {
        Self::new(
            ErrorKind::NotAssignable,
            format!("cannot assign to '{name}': {reason}"),
            line,
        )
    }

    pub fn unterminated_literal(quote: char, line: usize) -> Self {
        Self::new(
            ErrorKind::UnterminatedLiteral,
            format!("literal opened with {quote} is never closed"),
            line,
        )
        .with_hint(format!("add a closing {quote}"))
    }

    pub fn invalid_number(digits: &str, line: usize) -> Self {
        Self::new(
            ErrorKind::InvalidNumber,
            format!("integer literal {digits} is too large"),
            line,
        )
    }

    pub fn io(err: &io::Error, line: usize) -> Self {
        Self::new(ErrorKind::Io, err.to_string(), line)
    }

    pub fn underflow(err: UnderflowError, line: usize) -> Self {
        Self::new(ErrorKind::QueueUnderflow, err.to_string(), line)
    }

    pub fn scope(err: ScopeError, line: usize) -> Self {
        let kind = match err {
            ScopeError::GlobalScope => ErrorKind::ScopeUnderflow,
            ScopeError::NoScope => ErrorKind::QueueUnderflow,
        };
        Self::new(kind, err.to_string(), line)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

impl Diagnostic for CompileError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!("vega::{}", self.kind.code())))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.hints.is_empty() {
            None
        } else {
            Some(Box::new(self.hints.join("\n")))
        }
    }
}

/// A [`CompileError`] bundled with the source it points into.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct SourceReport {
    error: CompileError,
    src: NamedSource<String>,
    span: SourceSpan,
}

impl SourceReport {
    pub fn new(file_name: &str, source: &str, error: CompileError) -> Self {
        let span = line_span(source, error.line);
        Self {
            error,
            src: NamedSource::new(file_name, source.to_string()),
            span,
        }
    }

    pub fn error(&self) -> &CompileError {
        &self.error
    }
}

impl Diagnostic for SourceReport {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.error.code()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.error.help()
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.src)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some(self.error.kind.to_string()), self.span);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Wrap `error` into a [`miette::Report`] that quotes the offending line of `source`.
pub fn report(file_name: &str, source: &str, error: CompileError) -> miette::Report {
    miette::Report::new(SourceReport::new(file_name, source, error))
}

/// Render `error` as plain text (no colors) with the offending source line quoted.
pub fn format_error(file_name: &str, source: &str, error: &CompileError) -> String {
    let report = SourceReport::new(file_name, source, error.clone());
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    let mut out = String::new();
    match handler.render_report(&mut out, &report) {
        Ok(()) => out,
        Err(_) => error.to_string(),
    }
}

/// Byte span of 1-based `line` in `source`, without its line terminator.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`, as in the lexer.
fn line_span(source: &str, line: usize) -> SourceSpan {
    let bytes = source.as_bytes();
    let mut current = 1;
    let mut start = 0;
    let mut index = 0;
    while index < bytes.len() {
        let terminator = match bytes[index] {
            b'\r' if bytes.get(index + 1) == Some(&b'\n') => 2,
            b'\r' | b'\n' => 1,
            _ => {
                index += 1;
                continue;
            }
        };
        if current == line {
            return (start, index - start).into();
        }
        current += 1;
        index += terminator;
        start = index;
    }
    if current == line {
        (start, bytes.len() - start).into()
    } else {
        (source.len(), 0).into()
    }
}
