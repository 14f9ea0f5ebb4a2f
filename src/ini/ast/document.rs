//! Document
//!
//!     The root of a parsed source. It carries the name the caller gave the source (not
//!     something read from the text) and the sections in the order they were encountered.
//!
//!     A document returned by the parser always holds at least one section: the section
//!     open when input ends is kept even if it has no pairs.

use super::section::Section;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub sections: Vec<Section>,
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Document {
            name: name.into(),
            sections: Vec::new(),
        }
    }

    /// First section called `name`. The preamble is named `""`.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.name == name)
    }

    /// Every section called `name`; a header may appear more than once.
    pub fn sections_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Section> + 'a {
        self.sections
            .iter()
            .filter(move |section| section.name == name)
    }

    /// Value of `key` in the first section called `section`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.get(key)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of pairs across all sections.
    pub fn pair_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }
}
