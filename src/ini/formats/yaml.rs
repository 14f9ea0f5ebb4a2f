//! YAML output.

use super::registry::{FormatError, Formatter};
use crate::ini::ast::Document;

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_yaml::to_string(doc).map_err(|e| FormatError::Serialization(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML mapping of sections and pairs"
    }
}
