//! Name to formatter lookup.
//!
//! The CLI resolves `--format` here, so a new output only needs a [`Formatter`] impl and a
//! `register` call.

use crate::ini::ast::Document;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("format '{0}' not found")]
    FormatNotFound(String),
    /// The underlying serializer refused the document.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Turns a finished [`Document`] into text.
pub trait Formatter: Send + Sync {
    /// Lookup key, as passed to `--format`.
    fn name(&self) -> &str;

    fn serialize(&self, doc: &Document) -> Result<String, FormatError>;

    /// One line shown by `list-formats`.
    fn description(&self) -> &str {
        ""
    }
}

/// Formatters keyed by [`Formatter::name`].
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Add `formatter`, replacing any formatter already under its name.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(doc)
    }

    /// Registered names, alphabetical.
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// `json`, `json-compact`, `yaml` and `treeviz`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::JsonFormatter::pretty());
        registry.register(super::JsonFormatter::compact());
        registry.register(super::YamlFormatter);
        registry.register(super::TreevizFormatter);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
