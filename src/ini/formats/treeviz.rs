//! Treeviz formatter for documents
//!
//! Treeviz is a one line per node view of the document tree, handy for eyeballing what the
//! parser made of a source. Nesting is drawn with box characters, two columns per level.
//!
//! So the format is :
//! <prefix><connector> <icon><space><label> (label truncated to 30 characters)
//!
//! Example:
//!
//!   ⧉ test
//!   ├─ § (preamble)
//!   │ └─ ≔ key = abcdefg
//!   └─ § user
//!     ├─ ≔ name = Adam Eury
//!     └─ ≔ age = 35
//!
//! Icons
//!     Document: ⧉
//!     Section: §
//!     KeyValuePair: ≔

use super::registry::{FormatError, Formatter};
use crate::ini::ast::{Document, KeyValuePair, Section};

const LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// A node flattened to what treeviz prints.
struct Node {
    icon: &'static str,
    label: String,
    children: Vec<Node>,
}

fn pair_node(pair: &KeyValuePair) -> Node {
    Node {
        icon: "≔",
        label: format!("{} = {}", pair.key, pair.value),
        children: Vec::new(),
    }
}

fn section_node(section: &Section) -> Node {
    let label = if section.is_preamble() {
        "(preamble)".to_string()
    } else {
        section.name.clone()
    };
    Node {
        icon: "§",
        label,
        children: section.pairs.iter().map(pair_node).collect(),
    }
}

fn format_node(node: &Node, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        node.icon,
        truncate(&node.label, LABEL_WIDTH)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        format_node(child, &child_prefix, i == child_count - 1, output);
    }
}

/// Render a document as a treeviz string.
pub fn to_treeviz_str(doc: &Document) -> String {
    let mut output = format!("⧉ {}\n", truncate(&doc.name, LABEL_WIDTH));
    let count = doc.sections.len();
    for (i, section) in doc.sections.iter().enumerate() {
        format_node(&section_node(section), "", i == count - 1, &mut output);
    }
    output
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }

    fn description(&self) -> &str {
        "One line per node tree view"
    }
}
