//! Semantic section roles and the heading labels that name them.
//!
//! A MADR document identifies its parts by heading text ("Decision Drivers",
//! "Considered Options", ...). Extraction never matches those strings inline;
//! it asks a [`LabelTable`] which heading texts stand for which
//! [`SectionRole`]. Alternate spellings or translations are added to the
//! table instead of the extraction code.
//!
//! # Example
//!
//! ```rust
//! use madr_core::labels::{LabelTable, SectionRole};
//!
//! let mut labels = LabelTable::default();
//! assert_eq!(labels.role_of("Decision Drivers"), Some(SectionRole::DecisionDrivers));
//!
//! labels.add_label(SectionRole::Context, "Context");
//! assert!(labels.is_label(SectionRole::Context, "Context"));
//! assert!(labels.is_label(SectionRole::Context, "Context and Problem Statement"));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The semantic role a MADR section plays in the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionRole {
    /// Context and problem statement.
    Context,
    /// Forces and concerns that drive the decision.
    DecisionDrivers,
    /// The options that were considered.
    ConsideredOptions,
    /// The chosen option and justification.
    DecisionOutcome,
    /// Per-option pros and cons.
    ProsAndCons,
    /// Consequences of the decision.
    Consequences,
    /// How compliance with the decision is confirmed.
    Confirmation,
    /// Links and further information.
    MoreInformation,
}

impl SectionRole {
    /// Every role, in template order.
    pub const ALL: [SectionRole; 8] = [
        SectionRole::Context,
        SectionRole::DecisionDrivers,
        SectionRole::ConsideredOptions,
        SectionRole::DecisionOutcome,
        SectionRole::ProsAndCons,
        SectionRole::Consequences,
        SectionRole::Confirmation,
        SectionRole::MoreInformation,
    ];

    /// Snake-case name, matching the configuration key.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionRole::Context => "context",
            SectionRole::DecisionDrivers => "decision_drivers",
            SectionRole::ConsideredOptions => "considered_options",
            SectionRole::DecisionOutcome => "decision_outcome",
            SectionRole::ProsAndCons => "pros_and_cons",
            SectionRole::Consequences => "consequences",
            SectionRole::Confirmation => "confirmation",
            SectionRole::MoreInformation => "more_information",
        }
    }

    /// Whether the role may appear as a sub-heading (level 3 or deeper)
    /// inside another section, as "Consequences" and "Confirmation" do under
    /// "Decision Outcome" in recent MADR templates.
    pub fn is_nestable(self) -> bool {
        matches!(
            self,
            SectionRole::Consequences | SectionRole::Confirmation | SectionRole::MoreInformation
        )
    }

    /// Heading texts used by the stock MADR template.
    pub fn default_labels(self) -> &'static [&'static str] {
        match self {
            SectionRole::Context => &["Context and Problem Statement"],
            SectionRole::DecisionDrivers => &["Decision Drivers"],
            SectionRole::ConsideredOptions => &["Considered Options"],
            SectionRole::DecisionOutcome => &["Decision Outcome"],
            SectionRole::ProsAndCons => &["Pros and Cons of the Options"],
            SectionRole::Consequences => &["Consequences"],
            SectionRole::Confirmation => &["Confirmation"],
            SectionRole::MoreInformation => &["More Information"],
        }
    }
}

impl fmt::Display for SectionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookup table from [`SectionRole`] to the heading texts that name it.
///
/// Matching is exact and case-sensitive. When a role has several labels, the
/// first one found in a document wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTable {
    labels: BTreeMap<SectionRole, Vec<String>>,
}

impl Default for LabelTable {
    fn default() -> Self {
        let labels = SectionRole::ALL
            .iter()
            .map(|role| {
                let texts = role
                    .default_labels()
                    .iter()
                    .map(|s| (*s).to_string())
                    .collect();
                (*role, texts)
            })
            .collect();
        Self { labels }
    }
}

impl LabelTable {
    /// Labels accepted for `role`, in priority order.
    pub fn labels(&self, role: SectionRole) -> &[String] {
        self.labels.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The first (canonical) label for `role`.
    pub fn primary(&self, role: SectionRole) -> Option<&str> {
        self.labels(role).first().map(String::as_str)
    }

    /// Whether `text` is one of the labels for `role`.
    pub fn is_label(&self, role: SectionRole, text: &str) -> bool {
        self.labels(role).iter().any(|label| label == text)
    }

    /// The role named by heading `text`, if any.
    pub fn role_of(&self, text: &str) -> Option<SectionRole> {
        self.labels
            .iter()
            .find(|(_, labels)| labels.iter().any(|label| label == text))
            .map(|(role, _)| *role)
    }

    /// Replace the labels for `role`.
    pub fn with_labels<I, S>(mut self, role: SectionRole, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels
            .insert(role, labels.into_iter().map(Into::into).collect());
        self
    }

    /// Append an alternate label for `role`. Duplicates are ignored.
    pub fn add_label(&mut self, role: SectionRole, label: impl Into<String>) {
        let label = label.into();
        let entry = self.labels.entry(role).or_default();
        if !entry.contains(&label) {
            entry.push(label);
        }
    }

    /// Iterate over `(role, labels)` pairs in template order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionRole, &[String])> {
        self.labels
            .iter()
            .map(|(role, labels)| (*role, labels.as_slice()))
    }

    /// Check that every role has at least one non-blank label and that no
    /// label is claimed by two roles.
    pub fn validate(&self) -> Result<()> {
        let mut owners: BTreeMap<&str, SectionRole> = BTreeMap::new();

        for role in SectionRole::ALL {
            let labels = self.labels(role);
            if labels.is_empty() {
                return Err(Error::config(format!("No labels configured for role '{role}'")));
            }
            for label in labels {
                if label.trim().is_empty() {
                    return Err(Error::config(format!("Blank label configured for role '{role}'")));
                }
                if let Some(other) = owners.insert(label.as_str(), role)
                    && other != role
                {
                    return Err(Error::config(format!(
                        "Label '{label}' is used by both '{other}' and '{role}'"
                    )));
                }
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
