//! Knobs for the places where the grammar leaves behavior open.
//!
//! The defaults reproduce the established behavior of the format, quirks included, except
//! for stray top-level characters, which are rejected.

use serde::{Deserialize, Serialize};

pub use crate::ini::lexing::StrayCharacters;

/// What to do with a key that never receives a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DanglingKeys {
    /// Drop the key silently.
    #[default]
    Discard,
    /// Fail with [`ParseError::DanglingKey`](super::ParseError::DanglingKey).
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Keep a header even when the next header follows before any pair.
    ///
    /// Off by default, which drops such a header entirely. The unnamed preamble section
    /// is dropped when empty either way.
    pub keep_empty_sections: bool,
    pub stray_characters: StrayCharacters,
    pub dangling_keys: DanglingKeys,
}

impl ParseOptions {
    /// Every open question answered in favor of reporting or keeping data.
    pub fn strict() -> Self {
        ParseOptions {
            keep_empty_sections: true,
            stray_characters: StrayCharacters::Reject,
            dangling_keys: DanglingKeys::Reject,
        }
    }

    pub fn keep_empty_sections(mut self, keep: bool) -> Self {
        self.keep_empty_sections = keep;
        self
    }

    pub fn stray_characters(mut self, policy: StrayCharacters) -> Self {
        self.stray_characters = policy;
        self
    }

    pub fn dangling_keys(mut self, policy: DanglingKeys) -> Self {
        self.dangling_keys = policy;
        self
    }
}
