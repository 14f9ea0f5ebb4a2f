//! Sections and their key/value pairs.

use serde::{Deserialize, Serialize};

/// A single `key=value` line, both sides exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyValuePair {
    pub key: String,
    pub value: String,
}

impl KeyValuePair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        KeyValuePair {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A named group of pairs.
///
/// The section holding pairs written before the first header has an empty name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    #[serde(rename = "keyValuePairs")]
    pub pairs: Vec<KeyValuePair>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Section {
            name: name.into(),
            pairs: Vec::new(),
        }
    }

    /// The unnamed section collecting lines before the first header.
    pub fn preamble() -> Self {
        Section::default()
    }

    pub fn is_preamble(&self) -> bool {
        self.name.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn push(&mut self, pair: KeyValuePair) {
        self.pairs.push(pair);
    }

    /// Value of `key`. When the key repeats, the last occurrence wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|pair| pair.key == key)
            .map(|pair| pair.value.as_str())
    }

    /// Every value of `key`, in source order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |pair| pair.key == key)
            .map(|pair| pair.value.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|pair| pair.key.as_str())
    }
}
