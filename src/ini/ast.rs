//! Document model
//!
//! A [`Document`] is an ordered list of [`Section`]s, each an ordered list of raw
//! [`KeyValuePair`]s. Nothing is trimmed, unescaped or de-duplicated: the model reflects
//! the source text exactly, and lookups decide how to treat repeated keys.

pub mod document;
pub mod section;

pub use document::Document;
pub use section::{KeyValuePair, Section};
