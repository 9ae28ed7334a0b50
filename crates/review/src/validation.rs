//! Vocabulary format validation.
//!
//! A known-field format check, not a schema validation: an empty result means
//! none of the checked fields carry out-of-vocabulary values.

use serde::{Deserialize, Serialize};

use rtcatalog_products::ProductRecord;
use rtcatalog_vocabulary::Vocabulary;

/// Field a validation issue is reported against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidatedField {
    Modality,
    AnatomicalLocation,
    Certification,
}

impl ValidatedField {
    pub fn as_str(self) -> &'static str {
        match self {
            ValidatedField::Modality => "modality",
            ValidatedField::AnatomicalLocation => "anatomicalLocation",
            ValidatedField::Certification => "certification",
        }
    }

    /// The controlled vocabulary this field's values must come from.
    pub fn vocabulary(self) -> Vocabulary {
        match self {
            ValidatedField::Modality => Vocabulary::Modality,
            ValidatedField::AnatomicalLocation => Vocabulary::Anatomy,
            ValidatedField::Certification => Vocabulary::Certification,
        }
    }
}

impl core::fmt::Display for ValidatedField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field's worth of invalid values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    pub field: ValidatedField,
    pub message: String,
    pub invalid_values: Vec<String>,
}

/// Non-blank values outside the field's vocabulary. Blank entries are left to
/// the completeness check, which reports them as missing.
fn invalid_entries(values: &[String], field: ValidatedField) -> Vec<String> {
    let vocabulary = field.vocabulary();
    values
        .iter()
        .filter(|v| !v.trim().is_empty() && !vocabulary.contains(v))
        .cloned()
        .collect()
}

/// Check a record's vocabulary fields.
///
/// Issues are batched per field (one modality issue listing every bad modality)
/// and always come out in the order modality, anatomical location, certification.
/// Certification must match a combined label exactly; no case folding.
pub fn validate_product(product: &ProductRecord) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let invalid_modalities = invalid_entries(product.modalities(), ValidatedField::Modality);
    if !invalid_modalities.is_empty() {
        issues.push(ValidationIssue {
            field: ValidatedField::Modality,
            message: format!("Invalid modality values: {}", invalid_modalities.join(", ")),
            invalid_values: invalid_modalities,
        });
    }

    let invalid_locations = invalid_entries(product.anatomical_locations(), ValidatedField::AnatomicalLocation);
    if !invalid_locations.is_empty() {
        issues.push(ValidationIssue {
            field: ValidatedField::AnatomicalLocation,
            message: format!(
                "Invalid anatomical location values: {}",
                invalid_locations.join(", ")
            ),
            invalid_values: invalid_locations,
        });
    }

    if let Some(certification) = product.certification.as_deref() {
        if !certification.trim().is_empty()
            && !ValidatedField::Certification.vocabulary().contains(certification)
        {
            issues.push(ValidationIssue {
                field: ValidatedField::Certification,
                message: format!("Invalid certification value: {certification}"),
                invalid_values: vec![certification.to_string()],
            });
        }
    }

    if !issues.is_empty() {
        tracing::debug!(product_id = %product.id, issues = issues.len(), "validation issues found");
    }
    issues
}
