//! The tokenizer state machine.
//!
//! One state is active at a time. Every call to [`Iterator::next`] runs transitions until
//! exactly one token has been produced, then suspends. Nothing is scanned ahead of the
//! consumer; the only look-ahead is a single character peek.
//!
//! ```text
//!            ┌──────────── whitespace ───────────┐
//!            ▼                                   │
//!   ┌──▶ Start ──[──▶ SectionOpen ──▶ SectionName ──]──▶ SectionClose ──┐
//!   │      │                                                            │
//!   │      └─letter──▶ Key ──=──▶ KeyValueSeparator ──▶ Value ──\n──┐   │
//!   └───────────────────────────────────────────────────────────────┴───┘
//! ```
//!
//! End of input in `Start` yields [`Token::EndOfInput`] and moves to `Done`. Any rule
//! violation yields one [`Token::Error`] and moves to `Failed`.

use super::common::{LexError, LexErrorKind, Position};
use crate::ini::token::{Token, KEY_VALUE_SEPARATOR, NEWLINE, SECTION_CLOSE, SECTION_OPEN};
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;
use std::ops::Range;

/// What to do with a top-level character that can start neither a key nor a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrayCharacters {
    /// Stop with [`LexErrorKind::UnexpectedCharacter`].
    #[default]
    Reject,
    /// Consume the character and start the next token after it.
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    SectionOpen,
    SectionName,
    SectionClose,
    Key,
    KeyValueSeparator,
    Value,
    Done,
    Failed,
}

/// Single-use pull tokenizer over one input string.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    /// Start of the token being accumulated.
    start: usize,
    /// Next unread byte.
    pos: usize,
    state: State,
    stray: StrayCharacters,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            start: 0,
            pos: 0,
            state: State::Start,
            stray: StrayCharacters::default(),
        }
    }

    /// Choose how top-level characters outside the grammar are handled.
    pub fn stray_characters(mut self, policy: StrayCharacters) -> Self {
        self.stray = policy;
        self
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    /// True once the terminal token (end of input or error) has been handed out.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, State::Done | State::Failed)
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Drop everything scanned since the last token.
    fn ignore(&mut self) {
        self.start = self.pos;
    }

    fn pending(&self) -> &'a str {
        &self.input[self.start..self.pos]
    }

    fn emit(&mut self, token: Token) -> (Token, Range<usize>) {
        let span = self.start..self.pos;
        self.start = self.pos;
        (token, span)
    }

    fn fail(&mut self, kind: LexErrorKind, message: String) -> (Token, Range<usize>) {
        let end = self.pos + self.peek().map_or(0, char::len_utf8);
        let span = self.pos..end;
        let error = LexError::new(kind, message, Position::locate(self.input, self.pos));
        log::debug!("lexer failed: {error}");
        self.state = State::Failed;
        self.start = self.pos;
        (Token::Error(error), span)
    }

    fn lex_start(&mut self) -> Option<(Token, Range<usize>)> {
        loop {
            match self.peek() {
                None => {
                    self.state = State::Done;
                    return Some(self.emit(Token::EndOfInput));
                }
                Some(SECTION_OPEN) => {
                    self.state = State::SectionOpen;
                    return None;
                }
                Some(c) if c.is_whitespace() => {
                    self.bump();
                    self.ignore();
                }
                Some(c) if c.is_alphabetic() => {
                    self.state = State::Key;
                    return None;
                }
                Some(c) => match self.stray {
                    StrayCharacters::Reject => {
                        return Some(self.fail(
                            LexErrorKind::UnexpectedCharacter,
                            format!("unexpected character {c:?}, expected a key or `{SECTION_OPEN}`"),
                        ));
                    }
                    StrayCharacters::Skip => {
                        log::debug!("skipping stray character {c:?} at byte {}", self.pos);
                        self.bump();
                        self.ignore();
                    }
                },
            }
        }
    }

    fn lex_section_open(&mut self) -> Option<(Token, Range<usize>)> {
        self.bump();
        self.state = State::SectionName;
        Some(self.emit(Token::SectionOpen))
    }

    fn lex_section_name(&mut self) -> Option<(Token, Range<usize>)> {
        loop {
            match self.peek() {
                Some(SECTION_CLOSE) if self.start == self.pos => {
                    return Some(self.fail(
                        LexErrorKind::InvalidSectionName,
                        "empty section name".to_string(),
                    ));
                }
                Some(SECTION_CLOSE) => {
                    let name = self.pending().to_string();
                    self.state = State::SectionClose;
                    return Some(self.emit(Token::SectionName(name)));
                }
                None => {
                    let message = format!(
                        "unclosed section `{}`, reached end of input before `{SECTION_CLOSE}`",
                        self.pending()
                    );
                    return Some(self.fail(LexErrorKind::UnclosedSection, message));
                }
                Some(NEWLINE) => {
                    let message = format!(
                        "unclosed section `{}`, reached end of line before `{SECTION_CLOSE}`",
                        self.pending()
                    );
                    return Some(self.fail(LexErrorKind::UnclosedSection, message));
                }
                Some(c) if c.is_alphabetic() => {
                    self.bump();
                }
                Some(c) => {
                    let message = format!("invalid character {c:?} in section name");
                    return Some(self.fail(LexErrorKind::InvalidSectionName, message));
                }
            }
        }
    }

    fn lex_section_close(&mut self) -> Option<(Token, Range<usize>)> {
        self.bump();
        self.state = State::Start;
        Some(self.emit(Token::SectionClose))
    }

    fn lex_key(&mut self) -> Option<(Token, Range<usize>)> {
        loop {
            match self.peek() {
                Some(KEY_VALUE_SEPARATOR) => {
                    let key = self.pending().to_string();
                    self.state = State::KeyValueSeparator;
                    return Some(self.emit(Token::Key(key)));
                }
                None => {
                    let message = format!(
                        "key `{}` is never assigned, reached end of input before `{KEY_VALUE_SEPARATOR}`",
                        self.pending()
                    );
                    return Some(self.fail(LexErrorKind::UnassignedKey, message));
                }
                Some(NEWLINE) => {
                    let message = format!(
                        "key `{}` is never assigned, reached end of line before `{KEY_VALUE_SEPARATOR}`",
                        self.pending()
                    );
                    return Some(self.fail(LexErrorKind::UnassignedKey, message));
                }
                Some(c) if c.is_alphabetic() => {
                    self.bump();
                }
                Some(c) => {
                    let message = format!("invalid character {c:?} in key `{}`", self.pending());
                    return Some(self.fail(LexErrorKind::InvalidKey, message));
                }
            }
        }
    }

    fn lex_separator(&mut self) -> Option<(Token, Range<usize>)> {
        self.bump();
        self.state = State::Value;
        Some(self.emit(Token::Separator))
    }

    fn lex_value(&mut self) -> Option<(Token, Range<usize>)> {
        loop {
            match self.peek() {
                Some(NEWLINE) => {
                    let value = self.pending().to_string();
                    self.state = State::Start;
                    return Some(self.emit(Token::Value(value)));
                }
                None => {
                    return Some(self.fail(
                        LexErrorKind::UnexpectedEndOfInput,
                        "unexpected end of input, value is not terminated by a newline"
                            .to_string(),
                    ));
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = (Token, Range<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let produced = match self.state {
                State::Done | State::Failed => return None,
                State::Start => self.lex_start(),
                State::SectionOpen => self.lex_section_open(),
                State::SectionName => self.lex_section_name(),
                State::SectionClose => self.lex_section_close(),
                State::Key => self.lex_key(),
                State::KeyValueSeparator => self.lex_separator(),
                State::Value => self.lex_value(),
            };
            if let Some((token, span)) = produced {
                log::trace!("token {} {:?}", token.kind(), span);
                return Some((token, span));
            }
        }
    }
}

impl FusedIterator for Lexer<'_> {}
