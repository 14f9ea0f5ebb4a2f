//! JSON output, pretty or on a single line.

use super::registry::{FormatError, Formatter};
use crate::ini::ast::Document;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Pretty output is indented with one tab per level.
const INDENT: &[u8] = b"\t";

pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Indented output, registered as `json`.
    pub fn pretty() -> Self {
        JsonFormatter { pretty: true }
    }

    /// Single line output, registered as `json-compact`.
    pub fn compact() -> Self {
        JsonFormatter { pretty: false }
    }
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        if self.pretty {
            "json"
        } else {
            "json-compact"
        }
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        if !self.pretty {
            return serde_json::to_string(doc)
                .map_err(|e| FormatError::Serialization(e.to_string()));
        }
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        doc.serialize(&mut ser)
            .map_err(|e| FormatError::Serialization(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| FormatError::Serialization(e.to_string()))
    }

    fn description(&self) -> &str {
        if self.pretty {
            "Tab indented JSON"
        } else {
            "JSON on a single line"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ini::ast::{KeyValuePair, Section};

    #[test]
    fn test_compact() {
        let mut section = Section::new("user");
        section.push(KeyValuePair::new("name", "Adam"));
        let doc = Document {
            name: "t".to_string(),
            sections: vec![section],
        };
        assert_eq!(
            JsonFormatter::compact().serialize(&doc).unwrap(),
            r#"{"name":"t","sections":[{"name":"user","keyValuePairs":[{"key":"name","value":"Adam"}]}]}"#
        );
    }

    #[test]
    fn test_pretty_uses_tabs_and_key_value_pairs() {
        let mut section = Section::preamble();
        section.push(KeyValuePair::new("key", "abcdefg"));
        let doc = Document {
            name: "test".to_string(),
            sections: vec![section],
        };
        let expected = "{\n\t\"name\": \"test\",\n\t\"sections\": [\n\t\t{\n\t\t\t\"name\": \"\",\n\t\t\t\"keyValuePairs\": [\n\t\t\t\t{\n\t\t\t\t\t\"key\": \"key\",\n\t\t\t\t\t\"value\": \"abcdefg\"\n\t\t\t\t}\n\t\t\t]\n\t\t}\n\t]\n}";
        assert_eq!(JsonFormatter::pretty().serialize(&doc).unwrap(), expected);
    }
}
