//! Token vocabulary for ini sources.
//!
//! The lexer produces these tokens paired with the byte range they cover in the
//! input. Structural marks ([`Token::SectionOpen`], [`Token::SectionClose`],
//! [`Token::Separator`]) carry no payload; names and values carry the raw text.

use crate::ini::lexing::LexError;
use std::fmt;

/// Opens a section header.
pub const SECTION_OPEN: char = '[';
/// Closes a section header.
pub const SECTION_CLOSE: char = ']';
/// Separates a key from its value.
pub const KEY_VALUE_SEPARATOR: char = '=';
/// Terminates a value.
pub const NEWLINE: char = '\n';

/// A classified fragment of ini source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `[`
    SectionOpen,
    /// `]`
    SectionClose,
    /// The letters between `[` and `]`.
    SectionName(String),
    /// The letters before `=`.
    Key(String),
    /// `=`
    Separator,
    /// Everything after `=` up to, not including, the newline.
    Value(String),
    /// The input has been fully consumed.
    EndOfInput,
    /// Scanning stopped; no tokens follow.
    Error(LexError),
}

/// Payload-free discriminant of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    SectionOpen,
    SectionClose,
    SectionName,
    Key,
    Separator,
    Value,
    EndOfInput,
    Error,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::SectionOpen => TokenKind::SectionOpen,
            Token::SectionClose => TokenKind::SectionClose,
            Token::SectionName(_) => TokenKind::SectionName,
            Token::Key(_) => TokenKind::Key,
            Token::Separator => TokenKind::Separator,
            Token::Value(_) => TokenKind::Value,
            Token::EndOfInput => TokenKind::EndOfInput,
            Token::Error(_) => TokenKind::Error,
        }
    }

    /// Text carried by name, key and value tokens.
    pub fn text(&self) -> Option<&str> {
        match self {
            Token::SectionName(text) | Token::Key(text) | Token::Value(text) => Some(text),
            _ => None,
        }
    }

    /// True for the two tokens after which the lexer yields nothing more.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Token::EndOfInput | Token::Error(_))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::SectionOpen => "section-open",
            TokenKind::SectionClose => "section-close",
            TokenKind::SectionName => "section-name",
            TokenKind::Key => "key",
            TokenKind::Separator => "separator",
            TokenKind::Value => "value",
            TokenKind::EndOfInput => "end-of-input",
            TokenKind::Error => "error",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::SectionOpen => write!(f, "{SECTION_OPEN}"),
            Token::SectionClose => write!(f, "{SECTION_CLOSE}"),
            Token::Separator => write!(f, "{KEY_VALUE_SEPARATOR}"),
            Token::EndOfInput => f.write_str("EOF"),
            Token::Error(err) => write!(f, "{err}"),
            Token::SectionName(text) | Token::Key(text) | Token::Value(text) => {
                // Long payloads are clipped so token dumps stay one line each
                if text.chars().count() > 10 {
                    let clipped: String = text.chars().take(10).collect();
                    write!(f, "{clipped:?}...")
                } else {
                    write!(f, "{text:?}")
                }
            }
        }
    }
}
