//! The extracted decision record and its assembly from sections.

use madr_core::{LabelTable, SectionRole};
use serde::Serialize;

use crate::metadata::AdrMetadata;
use crate::pros_cons::OptionsProsCons;
use crate::sections::{SectionValue, SectionsMap};

/// Structured fields of one MADR document.
///
/// Only `title` is guaranteed to come from the document; `context` and
/// `decision_outcome` fall back to an empty string, and every other field
/// is absent when its section is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRecord {
    /// Text of the level-1 heading.
    pub title: String,
    /// Context and problem statement.
    pub context: String,
    /// The chosen option and its justification.
    pub decision_outcome: String,

    /// Decision drivers, when written as a list.
    pub decision_drivers: Option<Vec<String>>,
    /// Considered options, when written as a list.
    pub considered_options: Option<Vec<String>>,
    /// Consequences, with list items joined by newlines.
    pub decision_consequences: Option<String>,
    /// Confirmation steps, when written as a list.
    pub decision_confirmation: Option<Vec<String>>,

    /// Option name to its pros and cons.
    pub options_pros_and_cons: Option<OptionsProsCons>,
    /// More information, with list items joined by newlines.
    pub more_info: Option<String>,

    /// Front matter, when the document has MADR-shaped front matter.
    pub metadata: Option<AdrMetadata>,
}

impl ParsedRecord {
    /// Consequences split back into one entry per line.
    pub fn consequence_items(&self) -> Vec<&str> {
        self.decision_consequences
            .as_deref()
            .map(|text| text.lines().filter(|line| !line.is_empty()).collect())
            .unwrap_or_default()
    }
}

/// Role-based, type-safe access to normalized sections.
pub(crate) struct SectionLookup<'a> {
    sections: &'a SectionsMap,
    labels: &'a LabelTable,
}

impl<'a> SectionLookup<'a> {
    pub(crate) fn new(sections: &'a SectionsMap, labels: &'a LabelTable) -> Self {
        Self { sections, labels }
    }

    /// The section for `role` under the first of its labels that is present.
    fn find(&self, role: SectionRole) -> Option<&'a SectionValue> {
        self.labels
            .labels(role)
            .iter()
            .find_map(|label| self.sections.get(label))
    }

    /// Text of the section; a list section is coerced by joining its items.
    pub(crate) fn text(&self, role: SectionRole) -> Option<String> {
        self.find(role).map(SectionValue::to_text)
    }

    /// Items of the section, or `None` if it is absent or free text.
    pub(crate) fn list(&self, role: SectionRole) -> Option<Vec<String>> {
        self.find(role)
            .and_then(SectionValue::as_list)
            .map(<[String]>::to_vec)
    }
}

/// Build the record from already-extracted parts.
pub(crate) fn assemble(
    title: String,
    lookup: &SectionLookup<'_>,
    options_pros_and_cons: Option<OptionsProsCons>,
    metadata: Option<AdrMetadata>,
) -> ParsedRecord {
    ParsedRecord {
        title,
        context: lookup.text(SectionRole::Context).unwrap_or_default(),
        decision_outcome: lookup.text(SectionRole::DecisionOutcome).unwrap_or_default(),
        decision_drivers: lookup.list(SectionRole::DecisionDrivers),
        considered_options: lookup.list(SectionRole::ConsideredOptions),
        decision_consequences: lookup.text(SectionRole::Consequences),
        decision_confirmation: lookup.list(SectionRole::Confirmation),
        options_pros_and_cons,
        more_info: lookup.text(SectionRole::MoreInformation),
        metadata,
    }
}
