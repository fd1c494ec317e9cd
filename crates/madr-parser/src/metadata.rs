//! MADR front matter.
//!
//! MADR 3+ records carry their status and the people involved in a YAML
//! block. The people fields are written either as a YAML list or as a
//! comma-separated string in the wild, so both are accepted.

use std::collections::BTreeMap;

use madr_content::FrontmatterResult;
use serde::{Deserialize, Deserializer, Serialize};

/// Metadata from a record's front matter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AdrMetadata {
    /// e.g. "proposed", "accepted", "superseded by ADR-0005".
    #[serde(default)]
    pub status: Option<String>,

    /// When the decision was last updated, as written.
    #[serde(default, deserialize_with = "deserialize_scalar")]
    pub date: Option<String>,

    /// Everyone involved in the decision.
    #[serde(default, deserialize_with = "deserialize_people", alias = "deciders")]
    pub decision_makers: Vec<String>,

    /// Subject-matter experts whose opinions are sought.
    #[serde(default, deserialize_with = "deserialize_people")]
    pub consulted: Vec<String>,

    /// Those kept up to date on progress.
    #[serde(default, deserialize_with = "deserialize_people")]
    pub informed: Vec<String>,

    /// Any other keys, kept as raw YAML.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl AdrMetadata {
    /// Read metadata from split front matter.
    ///
    /// Returns `None` when there is no front matter or it does not fit the
    /// MADR shape; the latter is logged and otherwise ignored.
    pub fn from_frontmatter(frontmatter: &FrontmatterResult<'_>) -> Option<Self> {
        match frontmatter.deserialize::<AdrMetadata>() {
            Ok(metadata) => metadata,
            Err(e) => {
                log::warn!("Ignoring front matter that is not MADR metadata: {e}");
                None
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum People {
    Many(Vec<String>),
    One(String),
}

fn deserialize_people<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let people = Option::<People>::deserialize(deserializer)?;
    Ok(match people {
        Some(People::Many(list)) => list
            .into_iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect(),
        Some(People::One(joined)) => joined
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect(),
        None => Vec::new(),
    })
}

/// Accept any YAML scalar (a bare `2024-03-01`, a quoted string, a number)
/// as text.
fn deserialize_scalar<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Option::<serde_yaml::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_yaml::Value::String(s)) => Some(s),
        Some(serde_yaml::Value::Number(n)) => Some(n.to_string()),
        Some(serde_yaml::Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}
