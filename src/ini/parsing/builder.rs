//! Token driven document builder.
//!
//! The builder consumes tokens one by one and assembles the document. It holds a current
//! section (initially the unnamed preamble) and at most one pending key waiting for its
//! value.

use super::error::ParseError;
use super::options::{DanglingKeys, ParseOptions};
use crate::ini::ast::{Document, KeyValuePair, Section};
use crate::ini::token::Token;
use std::mem;
use std::ops::Range;

/// Builder lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting tokens.
    Building,
    /// End of input seen; the document is ready.
    Complete,
    /// A token was refused; no more tokens accepted.
    Failed,
}

#[derive(Debug)]
pub struct DocumentBuilder {
    document: Document,
    current: Section,
    pending_key: Option<String>,
    options: ParseOptions,
    phase: Phase,
}

impl DocumentBuilder {
    /// Create a builder with default options.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_options(name, ParseOptions::default())
    }

    pub fn with_options(name: impl Into<String>, options: ParseOptions) -> Self {
        DocumentBuilder {
            document: Document::new(name),
            current: Section::preamble(),
            pending_key: None,
            options,
            phase: Phase::Building,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// The key waiting for a value, if any.
    pub fn pending_key(&self) -> Option<&str> {
        self.pending_key.as_deref()
    }

    /// Feed a single token, with the byte range it covers in the source.
    ///
    /// Once a token is refused the builder stays failed.
    pub fn push(&mut self, token: Token, span: Range<usize>) -> Result<(), ParseError> {
        if self.phase != Phase::Building {
            return Err(ParseError::UnexpectedToken {
                token: token.kind(),
                offset: span.start,
            });
        }
        let result = self.apply(token, span);
        if result.is_err() {
            self.phase = Phase::Failed;
        }
        result
    }

    /// Finalize and return the document.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::IncompleteInput`] unless an end-of-input token was accepted.
    pub fn finish(self) -> Result<Document, ParseError> {
        match self.phase {
            Phase::Complete => Ok(self.document),
            Phase::Building | Phase::Failed => Err(ParseError::IncompleteInput),
        }
    }

    fn apply(&mut self, token: Token, span: Range<usize>) -> Result<(), ParseError> {
        match token {
            Token::SectionName(name) => {
                self.resolve_pending_key()?;
                log::debug!("section `{name}` starts at byte {}", span.start);
                let finished = mem::replace(&mut self.current, Section::new(name));
                self.close_section(finished);
            }
            Token::Key(key) => {
                self.resolve_pending_key()?;
                self.pending_key = Some(key);
            }
            Token::Value(value) => match self.pending_key.take() {
                Some(key) => self.current.push(KeyValuePair { key, value }),
                None => return Err(ParseError::OrphanValue { offset: span.start }),
            },
            Token::SectionOpen | Token::SectionClose | Token::Separator => {}
            Token::EndOfInput => {
                self.resolve_pending_key()?;
                // The last section is kept even when it is empty
                let last = mem::take(&mut self.current);
                self.document.sections.push(last);
                self.phase = Phase::Complete;
            }
            Token::Error(err) => return Err(ParseError::Lex(err)),
        }
        Ok(())
    }

    /// Record a section that was just superseded by a new header.
    fn close_section(&mut self, section: Section) {
        if !section.is_empty() {
            self.document.sections.push(section);
        } else if section.is_preamble() {
            log::trace!("empty preamble dropped");
        } else if self.options.keep_empty_sections {
            self.document.sections.push(section);
        } else {
            log::warn!(
                "section `{}` has no pairs before the next header and is dropped",
                section.name
            );
        }
    }

    fn resolve_pending_key(&mut self) -> Result<(), ParseError> {
        let Some(key) = self.pending_key.take() else {
            return Ok(());
        };
        match self.options.dangling_keys {
            DanglingKeys::Discard => {
                log::warn!("key `{key}` has no value and is discarded");
                Ok(())
            }
            DanglingKeys::Reject => Err(ParseError::DanglingKey { key }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ini::lexing::{LexError, LexErrorKind, Position};
    use crate::ini::token::TokenKind;

    fn name(text: &str) -> Token {
        Token::SectionName(text.to_string())
    }

    fn key(text: &str) -> Token {
        Token::Key(text.to_string())
    }

    fn value(text: &str) -> Token {
        Token::Value(text.to_string())
    }

    fn feed(builder: &mut DocumentBuilder, tokens: Vec<Token>) {
        for token in tokens {
            builder.push(token, 0..0).unwrap();
        }
    }

    #[test]
    fn test_simple_build() {
        let mut builder = DocumentBuilder::new("t");
        feed(
            &mut builder,
            vec![
                key("key"),
                Token::Separator,
                value("abcdefg"),
                Token::SectionOpen,
                name("user"),
                Token::SectionClose,
                key("name"),
                Token::Separator,
                value("Adam"),
                Token::EndOfInput,
            ],
        );
        assert_eq!(builder.phase(), Phase::Complete);
        let doc = builder.finish().unwrap();
        assert_eq!(doc.name, "t");
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.sections[0].name, "");
        assert_eq!(doc.sections[1].pairs, vec![KeyValuePair::new("name", "Adam")]);
    }

    #[test]
    fn test_end_of_input_alone_yields_one_empty_section() {
        let mut builder = DocumentBuilder::new("t");
        feed(&mut builder, vec![Token::EndOfInput]);
        let doc = builder.finish().unwrap();
        assert_eq!(doc.sections, vec![Section::preamble()]);
    }

    #[test]
    fn test_empty_header_dropped_by_default() {
        let mut builder = DocumentBuilder::new("t");
        feed(&mut builder, vec![name("a"), name("b"), Token::EndOfInput]);
        let doc = builder.finish().unwrap();
        assert_eq!(doc.sections, vec![Section::new("b")]);
    }

    #[test]
    fn test_empty_header_kept_when_asked() {
        let options = ParseOptions::default().keep_empty_sections(true);
        let mut builder = DocumentBuilder::with_options("t", options);
        feed(&mut builder, vec![name("a"), name("b"), Token::EndOfInput]);
        let doc = builder.finish().unwrap();
        assert_eq!(doc.sections, vec![Section::new("a"), Section::new("b")]);
    }

    #[test]
    fn test_dangling_key_discarded_by_default() {
        let mut builder = DocumentBuilder::new("t");
        feed(
            &mut builder,
            vec![key("lost"), key("kept"), value("1"), Token::EndOfInput],
        );
        let doc = builder.finish().unwrap();
        assert_eq!(doc.sections[0].pairs, vec![KeyValuePair::new("kept", "1")]);
    }

    #[test]
    fn test_dangling_key_rejected() {
        let options = ParseOptions::default().dangling_keys(DanglingKeys::Reject);
        let mut builder = DocumentBuilder::with_options("t", options);
        builder.push(key("lost"), 0..4).unwrap();
        assert_eq!(builder.pending_key(), Some("lost"));
        assert_eq!(
            builder.push(name("user"), 5..9),
            Err(ParseError::DanglingKey {
                key: "lost".to_string()
            })
        );
        assert_eq!(builder.phase(), Phase::Failed);
    }

    #[test]
    fn test_orphan_value() {
        let mut builder = DocumentBuilder::new("t");
        assert_eq!(
            builder.push(value("x"), 3..4),
            Err(ParseError::OrphanValue { offset: 3 })
        );
    }

    #[test]
    fn test_error_token_is_surfaced() {
        let err = LexError::new(LexErrorKind::InvalidKey, "bad", Position::default());
        let mut builder = DocumentBuilder::new("t");
        assert_eq!(
            builder.push(Token::Error(err.clone()), 0..1),
            Err(ParseError::Lex(err))
        );
        assert_eq!(builder.finish(), Err(ParseError::IncompleteInput));
    }

    #[test]
    fn test_tokens_after_completion_are_refused() {
        let mut builder = DocumentBuilder::new("t");
        feed(&mut builder, vec![Token::EndOfInput]);
        assert_eq!(
            builder.push(key("late"), 7..11),
            Err(ParseError::UnexpectedToken {
                token: TokenKind::Key,
                offset: 7
            })
        );
    }

    #[test]
    fn test_finish_without_end_of_input() {
        let mut builder = DocumentBuilder::new("t");
        feed(&mut builder, vec![key("a"), Token::Separator, value("b")]);
        assert_eq!(builder.finish(), Err(ParseError::IncompleteInput));
    }
}
