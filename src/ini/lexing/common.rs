//! Common lexer module
//!
//! Error and location types shared by the lexer and everything that reports its failures.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A location in the source text.
///
/// `offset` is a byte index; `line` and `column` are 1-based, with columns counted in
/// characters so they line up with what an editor shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Resolve a byte offset into a line/column position.
    ///
    /// Offsets past the end of `input` are clamped to the end.
    pub fn locate(input: &str, offset: usize) -> Self {
        let offset = offset.min(input.len());
        let before = &input[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[line_start..].chars().count() + 1;
        Position {
            offset,
            line,
            column,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// The lexical rule a source broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LexErrorKind {
    /// `[` was never closed before a newline or the end of input.
    UnclosedSection,
    /// A section header contains a non-letter, or is empty.
    InvalidSectionName,
    /// A key reached a newline or the end of input without `=`.
    UnassignedKey,
    /// A key contains a non-letter before `=`.
    InvalidKey,
    /// A value was not terminated by a newline.
    UnexpectedEndOfInput,
    /// A top-level character that starts neither a key nor a section header.
    UnexpectedCharacter,
}

impl LexErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LexErrorKind::UnclosedSection => "unclosed section",
            LexErrorKind::InvalidSectionName => "invalid section name",
            LexErrorKind::UnassignedKey => "unassigned key",
            LexErrorKind::InvalidKey => "invalid key",
            LexErrorKind::UnexpectedEndOfInput => "unexpected end of input",
            LexErrorKind::UnexpectedCharacter => "unexpected character",
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single error a lexer reports before it stops for good.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at {position}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub message: String,
    pub position: Position,
}

impl LexError {
    pub fn new(kind: LexErrorKind, message: impl Into<String>, position: Position) -> Self {
        LexError {
            kind,
            message: message.into(),
            position,
        }
    }
}
