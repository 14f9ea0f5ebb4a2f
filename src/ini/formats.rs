//! Output formats for parsed documents
//!
//! Serializers live behind the [`Formatter`] trait and are looked up by name through a
//! [`FormatRegistry`]. The built-in set is `json`, `json-compact`, `yaml` and `treeviz`.

pub mod json;
pub mod registry;
pub mod treeviz;
pub mod yaml;

pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
pub use yaml::YamlFormatter;

use crate::ini::ast::Document;
use once_cell::sync::Lazy;

static DEFAULT_REGISTRY: Lazy<FormatRegistry> = Lazy::new(FormatRegistry::with_defaults);

/// The built-in formats, shared.
pub fn default_registry() -> &'static FormatRegistry {
    &DEFAULT_REGISTRY
}

/// Serialize with one of the built-in formats.
pub fn serialize(doc: &Document, format: &str) -> Result<String, FormatError> {
    DEFAULT_REGISTRY.serialize(doc, format)
}
