//! Parser
//!
//! Builds a [`Document`] from the lexer's tokens.
//!
//! Structure:
//!     [`parse`] and [`parse_with`] drive a [`Lexer`] and a [`DocumentBuilder`] in lock-step
//! on the calling thread: the builder asks for one token, the lexer runs just enough of its
//! state machine to produce it, and the builder folds it in. There is no buffering between
//! the two beyond the token being handed over.
//!
//! Rules:
//!     - A section header closes the current section. The closed section is recorded only if
//!       it collected pairs (see [`ParseOptions::keep_empty_sections`]).
//!     - A key waits for its value. A key left without one is handled per
//!       [`ParseOptions::dangling_keys`].
//!     - End of input records the current section unconditionally, so a document always has
//!       at least one section.
//!     - A lexer error ends the parse with [`ParseError::Lex`]; a partial document is never
//!       returned.

pub mod builder;
pub mod error;
pub mod options;

pub use builder::{DocumentBuilder, Phase};
pub use error::ParseError;
pub use options::{DanglingKeys, ParseOptions, StrayCharacters};

use crate::ini::ast::Document;
use crate::ini::lexing::Lexer;

/// Parse `input` with the default options.
///
/// `name` is stored on the document as is; it is not read from the text.
pub fn parse(name: &str, input: &str) -> Result<Document, ParseError> {
    parse_with(name, input, &ParseOptions::default())
}

pub fn parse_with(name: &str, input: &str, options: &ParseOptions) -> Result<Document, ParseError> {
    let lexer = Lexer::new(input).stray_characters(options.stray_characters);
    let mut builder = DocumentBuilder::with_options(name, *options);
    for (token, span) in lexer {
        builder.push(token, span)?;
    }
    let document = builder.finish()?;
    log::debug!(
        "parsed `{}`: {} sections, {} pairs",
        document.name,
        document.section_count(),
        document.pair_count()
    );
    Ok(document)
}
