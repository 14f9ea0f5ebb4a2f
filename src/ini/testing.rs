//! Testing utilities for document assertions
//!
//!     Tests that walk `doc.sections[i].pairs[j]` by hand get long quickly and tend to stop at
//!     counting things. The fluent API below checks names, order and raw values in one
//!     expression, and every failure message says where in the document it happened.
//!
//!     ```rust,ignore
//!     use inidoc::ini::testing::assert_document;
//!
//!     let doc = inidoc::parse("t", "key=abcdefg\n\n[user]\nname=Adam Eury\nage=35\n")?;
//!
//!     assert_document(&doc)
//!         .section_names(&["", "user"])
//!         .section(0, |s| s.preamble().pairs(&[("key", "abcdefg")]))
//!         .section(1, |s| s.name("user").pair_count(2).value("age", "35"));
//!     ```

use crate::ini::ast::{Document, Section};

/// Create an assertion builder for a document
pub fn assert_document(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.doc.name, expected, "document: name mismatch");
        self
    }

    pub fn section_count(self, expected: usize) -> Self {
        assert_eq!(
            self.doc.sections.len(),
            expected,
            "document `{}`: expected {} sections, found {:?}",
            self.doc.name,
            expected,
            self.names()
        );
        self
    }

    /// Check every section name, in order.
    pub fn section_names(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.names(),
            expected,
            "document `{}`: section names mismatch",
            self.doc.name
        );
        self
    }

    pub fn section<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(SectionAssertion<'a>) -> SectionAssertion<'a>,
    {
        let section = self.doc.sections.get(index).unwrap_or_else(|| {
            panic!(
                "document `{}`: no section at index {}, only {} sections",
                self.doc.name,
                index,
                self.doc.sections.len()
            )
        });
        check(SectionAssertion {
            section,
            context: format!("document `{}` section #{}", self.doc.name, index),
        });
        self
    }

    fn names(&self) -> Vec<&str> {
        self.doc.sections.iter().map(|s| s.name.as_str()).collect()
    }
}

pub struct SectionAssertion<'a> {
    section: &'a Section,
    context: String,
}

impl SectionAssertion<'_> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.section.name, expected,
            "{}: section name mismatch",
            self.context
        );
        self
    }

    /// The section is the unnamed one holding pairs before the first header.
    pub fn preamble(self) -> Self {
        assert!(
            self.section.is_preamble(),
            "{}: expected the preamble, found section `{}`",
            self.context,
            self.section.name
        );
        self
    }

    pub fn pair_count(self, expected: usize) -> Self {
        assert_eq!(
            self.section.pairs.len(),
            expected,
            "{}: pair count mismatch",
            self.context
        );
        self
    }

    /// The pair at `index` is exactly `key=value`.
    pub fn pair(self, index: usize, key: &str, value: &str) -> Self {
        let pair = self.section.pairs.get(index).unwrap_or_else(|| {
            panic!(
                "{}: no pair at index {}, only {} pairs",
                self.context,
                index,
                self.section.pairs.len()
            )
        });
        assert_eq!(
            (pair.key.as_str(), pair.value.as_str()),
            (key, value),
            "{}: pair #{} mismatch",
            self.context,
            index
        );
        self
    }

    /// Every pair, in order.
    pub fn pairs(self, expected: &[(&str, &str)]) -> Self {
        let actual: Vec<(&str, &str)> = self
            .section
            .pairs
            .iter()
            .map(|p| (p.key.as_str(), p.value.as_str()))
            .collect();
        assert_eq!(actual, expected, "{}: pairs mismatch", self.context);
        self
    }

    /// Lookup of `key` (last occurrence wins) gives `expected`.
    pub fn value(self, key: &str, expected: &str) -> Self {
        assert_eq!(
            self.section.get(key),
            Some(expected),
            "{}: value of `{}` mismatch",
            self.context,
            key
        );
        self
    }
}
