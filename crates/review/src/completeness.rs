//! Completeness check used by the review dashboard.
//!
//! Broader than [`crate::validation`]: besides out-of-vocabulary values (graded
//! `Fail`) it reports missing or blank business fields (graded `Warning`). The
//! field-to-severity mapping is fixed, so the same gap always produces the same
//! severity.

use serde::{Deserialize, Serialize};

use rtcatalog_products::ProductRecord;
use rtcatalog_vocabulary::is_known_task;

use crate::validation::validate_product;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCheck {
    pub field: &'static str,
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompletenessReport {
    pub checks: Vec<FieldCheck>,
}

impl CompletenessReport {
    pub fn fail_count(&self) -> usize {
        self.count(Severity::Fail)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn issue_count(&self) -> usize {
        self.checks.len()
    }

    fn count(&self, severity: Severity) -> usize {
        self.checks.iter().filter(|c| c.severity == severity).count()
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn blank_opt(value: Option<&str>) -> bool {
    value.is_none_or(blank)
}

fn empty_list(values: &[String]) -> bool {
    values.iter().all(|v| blank(v))
}

/// Required business fields and how to tell they are missing.
const REQUIRED_FIELDS: &[(&str, fn(&ProductRecord) -> bool)] = &[
    ("name", |p: &ProductRecord| blank(&p.name)),
    ("company", |p: &ProductRecord| blank(&p.company)),
    ("category", |p: &ProductRecord| blank(&p.category)),
    ("description", |p: &ProductRecord| blank(&p.description)),
    ("modality", |p: &ProductRecord| empty_list(p.modalities())),
    ("anatomicalLocation", |p: &ProductRecord| empty_list(p.anatomical_locations())),
    ("certification", |p: &ProductRecord| blank_opt(p.certification.as_deref())),
    ("releaseDate", |p: &ProductRecord| blank_opt(p.release_date.as_deref())),
    ("features", |p: &ProductRecord| empty_list(p.effective_features())),
    ("technicalSpecifications", |p: &ProductRecord| p.technical_specifications.is_none()),
    ("evidence", |p: &ProductRecord| p.evidence.is_empty()),
];

/// Grade a record's completeness.
///
/// Checks come out as: vocabulary failures (validator order), then missing
/// fields in the fixed table order, then an unreadable release date, then an
/// unrecognized category.
pub fn check_product(product: &ProductRecord) -> CompletenessReport {
    let mut checks: Vec<FieldCheck> = validate_product(product)
        .into_iter()
        .map(|issue| FieldCheck {
            field: issue.field.as_str(),
            severity: Severity::Fail,
            message: issue.message,
        })
        .collect();

    for &(field, is_missing) in REQUIRED_FIELDS {
        if is_missing(product) {
            checks.push(FieldCheck {
                field,
                severity: Severity::Warning,
                message: format!("Missing {field}"),
            });
        }
    }

    if let Some(raw) = product.release_date.as_deref() {
        if !blank(raw) && product.release_date_at().is_none() {
            checks.push(FieldCheck {
                field: "releaseDate",
                severity: Severity::Warning,
                message: format!("Unparseable releaseDate: {raw}"),
            });
        }
    }

    if !blank(&product.category) && !is_known_task(&product.category) {
        checks.push(FieldCheck {
            field: "category",
            severity: Severity::Warning,
            message: format!("Unrecognized category: {}", product.category),
        });
    }

    CompletenessReport { checks }
}
