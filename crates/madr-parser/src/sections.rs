//! Section splitting and normalization.
//!
//! A MADR section is everything between one level-2 heading and the next.
//! Splitting produces raw node buckets keyed by heading text; normalization
//! turns each bucket into a [`SectionValue`]:
//!
//! - if the bucket holds at least one list, the section is the list items
//!   (prose in the same section is dropped);
//! - otherwise it is the newline-joined text of the bucket.
//!
//! # Example
//!
//! ```rust
//! use madr_content::parse_ast;
//! use madr_core::LabelTable;
//! use madr_parser::{extract_sections, SectionValue};
//!
//! let nodes = parse_ast(
//!     "# T\n\n## Considered Options\n\nWe looked at:\n\n* Hamcrest\n* AssertJ\n\n## Context\n\nWhy?\n",
//! );
//! let sections = extract_sections(&nodes, &LabelTable::default());
//!
//! assert_eq!(
//!     sections["Considered Options"],
//!     SectionValue::List(vec!["Hamcrest".into(), "AssertJ".into()])
//! );
//! assert_eq!(sections["Context"], SectionValue::Text("Why?".into()));
//! ```

use std::collections::HashMap;

use madr_content::Node;
use madr_core::LabelTable;
use serde::Serialize;

/// Normalized content of one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SectionValue {
    /// Free text, newline-joined and trimmed.
    Text(String),
    /// One string per list item, in document order.
    List(Vec<String>),
}

impl SectionValue {
    /// The value as a single string; list items are joined with newlines.
    pub fn to_text(&self) -> String {
        match self {
            SectionValue::Text(text) => text.clone(),
            SectionValue::List(items) => items.join("\n"),
        }
    }

    /// The list items, or `None` for a free-text section.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            SectionValue::List(items) => Some(items),
            SectionValue::Text(_) => None,
        }
    }

    /// Whether the section was classified as a list.
    pub fn is_list(&self) -> bool {
        matches!(self, SectionValue::List(_))
    }
}

/// Section name to raw nodes, before normalization.
pub type RawSections<'a> = HashMap<String, Vec<&'a Node>>;

/// Section name to normalized value.
pub type SectionsMap = HashMap<String, SectionValue>;

/// Split and normalize in one step.
pub fn extract_sections(nodes: &[Node], labels: &LabelTable) -> SectionsMap {
    normalize_sections(&split_sections(nodes, labels))
}

/// Partition top-level `nodes` into buckets keyed by level-2 heading text.
///
/// Deeper headings stay inside the enclosing section as ordinary content.
/// Anything before the first level-2 heading is dropped. A later section
/// with the same name replaces an earlier one.
///
/// A level-3+ heading whose text is a label for a nestable role (for
/// example `### Consequences` under `## Decision Outcome`) also opens a
/// bucket of its own, which collects the following nodes up to the next
/// heading of the same or a shallower level. The enclosing section still
/// receives those nodes as well.
pub fn split_sections<'a>(nodes: &'a [Node], labels: &LabelTable) -> RawSections<'a> {
    let mut splitter = SectionSplitter::new(labels);
    for node in nodes {
        splitter.push(node);
    }
    splitter.finish()
}

/// Normalize every raw bucket.
pub fn normalize_sections(raw: &RawSections<'_>) -> SectionsMap {
    raw.iter()
        .map(|(name, nodes)| (name.clone(), normalize_section(nodes)))
        .collect()
}

/// Normalize one bucket: list items if any list is present, otherwise text.
pub fn normalize_section(nodes: &[&Node]) -> SectionValue {
    let mut lists = nodes.iter().filter(|node| node.is_list()).peekable();

    if lists.peek().is_some() {
        let items = lists
            .flat_map(|list| list.children())
            .map(Node::item_text)
            .collect();
        return SectionValue::List(items);
    }

    let text = nodes
        .iter()
        .map(|node| node.flatten_text())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    SectionValue::Text(text.trim().to_string())
}

struct OpenSection<'a> {
    name: String,
    nodes: Vec<&'a Node>,
}

struct NestedSection<'a> {
    level: u8,
    section: OpenSection<'a>,
}

struct SectionSplitter<'a, 'l> {
    labels: &'l LabelTable,
    sections: RawSections<'a>,
    current: Option<OpenSection<'a>>,
    nested: Option<NestedSection<'a>>,
}

impl<'a, 'l> SectionSplitter<'a, 'l> {
    fn new(labels: &'l LabelTable) -> Self {
        Self {
            labels,
            sections: HashMap::new(),
            current: None,
            nested: None,
        }
    }

    fn push(&mut self, node: &'a Node) {
        match node.heading_level() {
            Some(2) => {
                self.close_nested();
                self.close_current();
                let name = node.flatten_text();
                log::debug!("Entering section '{name}'");
                self.current = Some(OpenSection {
                    name,
                    nodes: Vec::new(),
                });
            }
            Some(level) => {
                if self.nested.as_ref().is_some_and(|n| level <= n.level) {
                    self.close_nested();
                }
                self.append(node);
                if level >= 3 && self.current.is_some() {
                    self.maybe_open_nested(level, node);
                }
            }
            None => self.append(node),
        }
    }

    fn append(&mut self, node: &'a Node) {
        match &mut self.current {
            Some(section) => section.nodes.push(node),
            None => log::trace!("Dropping node outside any section"),
        }
        if let Some(nested) = &mut self.nested {
            nested.section.nodes.push(node);
        }
    }

    fn maybe_open_nested(&mut self, level: u8, heading: &Node) {
        let name = heading.flatten_text();
        let nestable = self
            .labels
            .role_of(&name)
            .is_some_and(|role| role.is_nestable());
        if nestable && self.nested.is_none() {
            log::debug!("Entering nested section '{name}' at level {level}");
            self.nested = Some(NestedSection {
                level,
                section: OpenSection {
                    name,
                    nodes: Vec::new(),
                },
            });
        }
    }

    fn close_nested(&mut self) {
        if let Some(nested) = self.nested.take() {
            self.store(nested.section);
        }
    }

    fn close_current(&mut self) {
        if let Some(section) = self.current.take() {
            self.store(section);
        }
    }

    fn store(&mut self, section: OpenSection<'a>) {
        if self.sections.contains_key(&section.name) {
            log::debug!("Section '{}' appears again; keeping the later one", section.name);
        }
        self.sections.insert(section.name, section.nodes);
    }

    fn finish(mut self) -> RawSections<'a> {
        self.close_nested();
        self.close_current();
        self.sections
    }
}

// ============================================================================
// Tests
// ============================================================================
