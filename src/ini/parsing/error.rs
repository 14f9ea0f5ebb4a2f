//! Error types for document building.

use crate::ini::lexing::{LexError, LexErrorKind};
use crate::ini::token::TokenKind;
use thiserror::Error;

/// Why a source could not be turned into a [`Document`](crate::ini::ast::Document).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The lexer rejected the source.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A value arrived with no key waiting for it.
    #[error("value at byte {offset} has no preceding key")]
    OrphanValue { offset: usize },

    /// A key was superseded or cut off before receiving a value.
    #[error("key `{key}` has no value")]
    DanglingKey { key: String },

    /// Token not valid in the builder's current phase.
    #[error("unexpected {token} token at byte {offset}")]
    UnexpectedToken { token: TokenKind, offset: usize },

    /// The builder was finished before it saw the end of input.
    #[error("token stream stopped before the end of input")]
    IncompleteInput,
}

impl ParseError {
    /// The lexical rule that failed, when the error comes from the lexer.
    pub fn lex_kind(&self) -> Option<LexErrorKind> {
        match self {
            ParseError::Lex(err) => Some(err.kind),
            _ => None,
        }
    }
}
