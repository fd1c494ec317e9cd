//! TOML-backed parser configuration.
//!
//! The configuration file only needs to name the roles whose labels differ
//! from the MADR defaults:
//!
//! ```toml
//! [labels]
//! context = ["Context and Problem Statement", "Context"]
//! more_information = ["More Information", "Links"]
//! ```
//!
//! # Example
//!
//! ```rust
//! use madr_core::{ParserConfig, SectionRole};
//!
//! let config = ParserConfig::from_toml_str("[labels]\ncontext = [\"Kontext\"]\n").unwrap();
//! let labels = config.label_table().unwrap();
//! assert_eq!(labels.labels(SectionRole::Context), ["Kontext"]);
//! assert_eq!(labels.primary(SectionRole::DecisionOutcome), Some("Decision Outcome"));
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::labels::{LabelTable, SectionRole};
use crate::{Error, Result};

/// Top-level parser configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    /// Heading label overrides, keyed by role.
    pub labels: LabelsConfig,
}

/// Per-role heading label overrides. `None` keeps the MADR default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[allow(missing_docs)]
pub struct LabelsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_drivers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub considered_options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_outcome: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pros_and_cons: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consequences: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_information: Option<Vec<String>>,
}

impl LabelsConfig {
    /// The override for `role`, if configured.
    pub fn get(&self, role: SectionRole) -> Option<&[String]> {
        let labels = match role {
            SectionRole::Context => &self.context,
            SectionRole::DecisionDrivers => &self.decision_drivers,
            SectionRole::ConsideredOptions => &self.considered_options,
            SectionRole::DecisionOutcome => &self.decision_outcome,
            SectionRole::ProsAndCons => &self.pros_and_cons,
            SectionRole::Consequences => &self.consequences,
            SectionRole::Confirmation => &self.confirmation,
            SectionRole::MoreInformation => &self.more_information,
        };
        labels.as_deref()
    }

    /// Set the override for `role`.
    pub fn set(&mut self, role: SectionRole, labels: Vec<String>) {
        let slot = match role {
            SectionRole::Context => &mut self.context,
            SectionRole::DecisionDrivers => &mut self.decision_drivers,
            SectionRole::ConsideredOptions => &mut self.considered_options,
            SectionRole::DecisionOutcome => &mut self.decision_outcome,
            SectionRole::ProsAndCons => &mut self.pros_and_cons,
            SectionRole::Consequences => &mut self.consequences,
            SectionRole::Confirmation => &mut self.confirmation,
            SectionRole::MoreInformation => &mut self.more_information,
        };
        *slot = Some(labels);
    }
}

impl ParserConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Invalid configuration: {e}")))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        log::debug!("Loaded parser configuration from {}", path.display());
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// A configuration that spells out every default label explicitly.
    pub fn from_label_table(table: &LabelTable) -> Self {
        let mut labels = LabelsConfig::default();
        for (role, texts) in table.iter() {
            labels.set(role, texts.to_vec());
        }
        Self { labels }
    }

    /// Serialize to a pretty TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Build and validate the label table: MADR defaults with this
    /// configuration's overrides applied.
    pub fn label_table(&self) -> Result<LabelTable> {
        let mut table = LabelTable::default();
        for role in SectionRole::ALL {
            if let Some(labels) = self.labels.get(role) {
                log::debug!("Overriding labels for '{role}': {labels:?}");
                table = table.with_labels(role, labels.iter().cloned());
            }
        }
        table.validate()?;
        Ok(table)
    }
}

// ============================================================================
// Tests
// ============================================================================
