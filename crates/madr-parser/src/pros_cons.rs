//! Pros and cons grouped by option.
//!
//! Inside the "Pros and Cons of the Options" section every level-3 heading
//! names an option, and the bullets that follow it are that option's pros
//! and cons:
//!
//! ```markdown
//! ## Pros and Cons of the Options
//!
//! ### Hamcrest
//!
//! * Good, because offers advanced matchers
//! * Bad, because not full fluent API
//! ```
//!
//! This is a separate pass over the top-level nodes rather than a reuse of
//! the section buckets: bullets must attach to the nearest preceding
//! level-3 heading, not to the section as a whole.

use madr_content::Node;
use madr_core::{LabelTable, SectionRole};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Option name to its bullet texts, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsProsCons {
    entries: Vec<(String, Vec<String>)>,
}

impl OptionsProsCons {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no options.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bullets for `option`, if the option was seen.
    pub fn get(&self, option: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == option)
            .map(|(_, items)| items.as_slice())
    }

    /// Whether `option` was seen.
    pub fn contains_key(&self, option: &str) -> bool {
        self.get(option).is_some()
    }

    /// Option names in document order.
    pub fn options(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// `(option, bullets)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    /// Register `option` with no bullets unless it is already present.
    pub fn ensure(&mut self, option: &str) {
        if !self.contains_key(option) {
            self.entries.push((option.to_string(), Vec::new()));
        }
    }

    /// Append a bullet to `option`, registering the option if needed.
    pub fn push(&mut self, option: &str, item: String) {
        match self.entries.iter_mut().find(|(name, _)| name == option) {
            Some((_, items)) => items.push(item),
            None => self.entries.push((option.to_string(), vec![item])),
        }
    }
}

impl Serialize for OptionsProsCons {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, items) in &self.entries {
            map.serialize_entry(name, items)?;
        }
        map.end()
    }
}

/// Where the scan is relative to the pros/cons section.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ScanState {
    /// Before the section.
    Outside,
    /// Inside the section, optionally under an option heading.
    InSection { option: Option<String> },
    /// Left the section; nothing further is collected.
    Done,
}

/// Collect bullets per option from the pros/cons section of `nodes`.
///
/// The section is assumed to be contiguous: the first level-2 heading that
/// is not a pros/cons label after entering the section ends the scan, even
/// if another pros/cons section follows later. Returns `None` when no
/// option was found, so callers can tell "no section" from "empty section"
/// only by the absence of the field.
pub fn extract_options_pros_and_cons(
    nodes: &[Node],
    labels: &LabelTable,
) -> Option<OptionsProsCons> {
    let mut result = OptionsProsCons::new();
    let mut state = ScanState::Outside;

    for node in nodes {
        state = step(state, node, labels, &mut result);
        if state == ScanState::Done {
            break;
        }
    }

    if result.is_empty() {
        None
    } else {
        Some(result)
    }
}

fn step(
    state: ScanState,
    node: &Node,
    labels: &LabelTable,
    result: &mut OptionsProsCons,
) -> ScanState {
    match (state, node) {
        (ScanState::Done, _) => ScanState::Done,

        (ScanState::Outside, Node::Heading { level: 2, .. }) => {
            if labels.is_label(SectionRole::ProsAndCons, &node.flatten_text()) {
                log::debug!("Entering pros and cons section");
                ScanState::InSection { option: None }
            } else {
                ScanState::Outside
            }
        }
        (ScanState::Outside, _) => ScanState::Outside,

        (ScanState::InSection { .. }, Node::Heading { level: 2, .. }) => {
            let text = node.flatten_text();
            if labels.is_label(SectionRole::ProsAndCons, &text) {
                ScanState::InSection { option: None }
            } else {
                log::debug!("Leaving pros and cons section at '{text}'");
                ScanState::Done
            }
        }
        (ScanState::InSection { .. }, Node::Heading { level: 3, .. }) => {
            let option = node.flatten_text();
            result.ensure(&option);
            if option.is_empty() {
                log::debug!("Empty option heading; its bullets are not collected");
                return ScanState::InSection { option: None };
            }
            ScanState::InSection {
                option: Some(option),
            }
        }
        (ScanState::InSection { option: Some(option) }, Node::List { items, .. }) => {
            for item in items {
                let text = item.item_text();
                if !text.is_empty() {
                    result.push(&option, text);
                }
            }
            ScanState::InSection {
                option: Some(option),
            }
        }
        (ScanState::InSection { option: None }, Node::List { .. }) => {
            log::trace!("Ignoring list before the first option heading");
            ScanState::InSection { option: None }
        }
        (state @ ScanState::InSection { .. }, _) => state,
    }
}

// ============================================================================
// Tests
// ============================================================================
