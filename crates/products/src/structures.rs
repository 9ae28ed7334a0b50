//! Structure-label grouping.
//!
//! Contouring products list the structures they support as free text, often
//! prefixed by the model that produces them (`"Head & Neck: Brainstem"`). This
//! module folds such a list into per-model groups for display. Nothing here can
//! fail: labels that do not follow the `Model: Structure` convention land in
//! `ungrouped`.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// A structure as written in catalog data: a bare label, an object with a name,
/// or some other JSON value that is shown by its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StructureEntry {
    Label(String),
    Named(NamedStructure),
    Other(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedStructure {
    pub name: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl StructureEntry {
    /// Display string for the entry.
    pub fn display_name(&self) -> String {
        match self {
            StructureEntry::Label(label) => label.clone(),
            StructureEntry::Named(named) => named.name.clone(),
            StructureEntry::Other(serde_json::Value::Null) => String::new(),
            StructureEntry::Other(serde_json::Value::String(s)) => s.clone(),
            StructureEntry::Other(value) => value.to_string(),
        }
    }
}

impl From<&str> for StructureEntry {
    fn from(value: &str) -> Self {
        StructureEntry::Label(value.to_string())
    }
}

/// Structures produced by one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureGroup {
    pub model_name: String,
    pub structures: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureGrouping {
    pub groups: Vec<StructureGroup>,
    pub ungrouped: Vec<String>,
}

impl StructureGrouping {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.ungrouped.is_empty()
    }

    /// Total number of distinct grouped structures plus ungrouped labels.
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.structures.len()).sum::<usize>() + self.ungrouped.len()
    }
}

/// Split `"Model: Structure"` into its trimmed parts.
///
/// The colon must be neither the first nor the last character, both parts must
/// be non-blank, and the structure must not restate the model name.
fn split_model_prefix(label: &str) -> Option<(&str, &str)> {
    let colon = label.find(':')?;
    if colon == 0 || colon == label.len() - 1 {
        return None;
    }

    let prefix = label[..colon].trim();
    let rest = label[colon + 1..].trim();
    if prefix.is_empty() || rest.is_empty() || rest.starts_with(prefix) {
        return None;
    }
    Some((prefix, rest))
}

/// Group structure entries by their model prefix.
///
/// Groups are ordered by model name and each group's structures are sorted and
/// de-duplicated. Ungrouped labels are sorted but kept as listed otherwise.
pub fn group_structures(entries: &[StructureEntry]) -> StructureGrouping {
    let mut by_model: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut ungrouped = Vec::new();

    for entry in entries {
        let name = entry.display_name();
        let label = name.trim();
        if label.is_empty() {
            continue;
        }

        match split_model_prefix(label) {
            Some((model, structure)) => {
                by_model
                    .entry(model.to_string())
                    .or_default()
                    .insert(structure.to_string());
            }
            None => ungrouped.push(label.to_string()),
        }
    }

    ungrouped.sort();

    StructureGrouping {
        groups: by_model
            .into_iter()
            .map(|(model_name, structures)| StructureGroup {
                model_name,
                structures: structures.into_iter().collect(),
            })
            .collect(),
        ungrouped,
    }
}
