//! Document loading utilities
//!
//! This module provides `DocumentLoader` - a utility for loading source text from files
//! or strings and running the pipeline on it. It is used by the CLI and by tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use inidoc::ini::loader::DocumentLoader;
//!
//! // From file; the document is named after the file stem
//! let doc = DocumentLoader::from_path("settings.ini")?.parse()?;
//!
//! // From string
//! let doc = DocumentLoader::from_string("inline", "key=value\n").parse()?;
//! ```

use crate::ini::ast::Document;
use crate::ini::lexing::Lexer;
use crate::ini::parsing::{parse_with, ParseError, ParseOptions};
use crate::ini::token::Token;
use std::fs;
use std::io;
use std::ops::Range;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error that can occur when loading documents
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Source text plus the name its document will carry.
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    name: String,
    source: String,
}

impl DocumentLoader {
    /// Load from a file path. The document name is the file stem.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        log::debug!("loaded {} bytes from {}", source.len(), path.display());
        Ok(DocumentLoader { name, source })
    }

    pub fn from_string<N: Into<String>, S: Into<String>>(name: N, source: S) -> Self {
        DocumentLoader {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Replace the document name.
    pub fn named<N: Into<String>>(mut self, name: N) -> Self {
        self.name = name.into();
        self
    }

    pub fn parse(&self) -> Result<Document, LoaderError> {
        self.parse_with(&ParseOptions::default())
    }

    pub fn parse_with(&self, options: &ParseOptions) -> Result<Document, LoaderError> {
        Ok(parse_with(&self.name, &self.source, options)?)
    }

    /// The full token stream, ending with the end-of-input or error token.
    pub fn tokenize(&self, options: &ParseOptions) -> Vec<(Token, Range<usize>)> {
        Lexer::new(&self.source)
            .stray_characters(options.stray_characters)
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}
