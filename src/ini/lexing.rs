//! Lexer
//!
//! This module turns raw ini text into a stream of typed tokens.
//!
//! Structure:
//!     The tokenizer is a hand written state machine (see [lexer]) rather than a generated
//! lexer, because what a character means depends on where it appears: `=` ends a key but is
//! plain text inside a value, and a space is skipped at the top level, rejected in a key and
//! kept in a value.
//!
//! Grammar (informal):
//!
//!     document     := preambleLine* sectionBlock*
//!     preambleLine := key "=" value newline
//!     sectionBlock := "[" sectionName "]" newline preambleLine*
//!     key          := letter+
//!     sectionName  := letter+
//!     value        := any-character-except-newline*
//!
//! Letters are Unicode letters. Whitespace and blank lines between lines are ignored.
//!
//! Errors
//!
//!     The lexer never resynchronizes. The first rule violation is reported as a single
//! [`Token::Error`](crate::ini::token::Token::Error) and the stream ends there.

pub mod common;
pub mod lexer;

pub use common::{LexError, LexErrorKind, Position};
pub use lexer::{Lexer, StrayCharacters};

use crate::ini::token::Token;
use std::ops::Range;

/// Tokenize a whole source, including the terminal end-of-input or error token.
pub fn tokenize(source: &str) -> Vec<(Token, Range<usize>)> {
    Lexer::new(source).collect()
}
