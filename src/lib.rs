//! # inidoc
//!
//! A tokenizer and document builder for INI-style configuration text.
//!
//! File Layout
//!
//! The pipeline is split in two strictly layered stages, each in its own module:
//!
//! src/ini
//!   ├── token      The token vocabulary shared by both stages
//!   ├── lexing     Character level state machine producing tokens
//!   ├── parsing    Token level document builder
//!   ├── ast        The Document / Section / KeyValuePair model
//!   ├── formats    Serializers for finished documents (json, yaml, treeviz)
//!   └── loader     Reading sources from files or strings
//!
//! The contract is a single entry point: a document name plus raw text in, a
//! [`Document`](ini::ast::Document) or a [`ParseError`](ini::parsing::ParseError) out.
//!
//!     let doc = inidoc::parse("settings", "[user]\nname=Adam\n")?;
//!     assert_eq!(doc.get("user", "name"), Some("Adam"));
//!
//! For test helpers, see the [testing module](ini::testing).

pub mod ini;

pub use ini::ast::{Document, KeyValuePair, Section};
pub use ini::lexing::{tokenize, LexError, LexErrorKind, Lexer, Position};
pub use ini::parsing::{
    parse, parse_with, DanglingKeys, DocumentBuilder, ParseError, ParseOptions, StrayCharacters,
};
pub use ini::token::{Token, TokenKind};
