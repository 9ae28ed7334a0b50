//! Controlled vocabularies for catalog records.
//!
//! Static, immutable value sets used to check modality, anatomical location and
//! certification fields. Membership checks are exact and case-sensitive: `"ce"`
//! is not `"CE"`. Unknown values are simply "not a member"; nothing here fails.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Imaging and RT data modalities a product may consume.
pub const MODALITIES: &[&str] = &[
    "CT",
    "MRI",
    "CBCT",
    "PET",
    "PET/CT",
    "SPECT",
    "Ultrasound",
    "X-ray",
    "Mammography",
    "RTStruct",
    "RTDose",
    "RTPlan",
    "RT Image",
];

/// Anatomical sites a product may cover.
pub const ANATOMICAL_LOCATIONS: &[&str] = &[
    "Brain",
    "Head & Neck",
    "Thorax",
    "Lung",
    "Heart",
    "Breast",
    "Abdomen",
    "Liver",
    "Pancreas",
    "Kidney",
    "Pelvis",
    "Prostate",
    "Bladder",
    "Rectum",
    "Gynecological",
    "Spine",
    "Extremities",
    "Skin",
    "Whole Body",
];

/// Combined certification labels, paired with the atomic certifications each one
/// stands for.
const CERTIFICATION_LABELS: [(&str, &[&str]); 7] = [
    ("CE", &["CE"]),
    ("FDA", &["FDA"]),
    ("CE & FDA", &["CE", "FDA"]),
    ("MDR exempt", &["MDR exempt"]),
    ("NMPA", &["NMPA"]),
    ("CE & NMPA", &["CE", "NMPA"]),
    ("CE & FDA & NMPA", &["CE", "FDA", "NMPA"]),
];

const CERTIFICATION_KEYS: [&str; CERTIFICATION_LABELS.len()] = {
    let mut keys = [""; CERTIFICATION_LABELS.len()];
    let mut i = 0;
    while i < keys.len() {
        keys[i] = CERTIFICATION_LABELS[i].0;
        i += 1;
    }
    keys
};

/// Combined certification labels accepted on a record.
pub const CERTIFICATIONS: &[&str] = &CERTIFICATION_KEYS;

/// Primary tasks (categories) the catalog is organized by.
///
/// The category field is only informally constrained to this set; the review
/// completeness check reports strays as warnings.
pub const KNOWN_TASKS: &[&str] = &[
    "Auto-Contouring",
    "Image Synthesis",
    "Image Registration",
    "Image Enhancement",
    "Reconstruction",
    "Treatment Planning",
    "Dose Prediction",
    "Quality Assurance",
    "Clinical Prediction",
    "Tracking",
    "Performance Monitor",
    "Platform",
];

pub fn is_valid_modality(value: &str) -> bool {
    MODALITIES.contains(&value)
}

pub fn is_valid_anatomy(value: &str) -> bool {
    ANATOMICAL_LOCATIONS.contains(&value)
}

pub fn is_valid_certification(value: &str) -> bool {
    CERTIFICATION_LABELS.iter().any(|(label, _)| *label == value)
}

pub fn is_known_task(value: &str) -> bool {
    KNOWN_TASKS.contains(&value)
}

/// Atomic certifications behind a combined label (`"CE & FDA"` → `{"CE", "FDA"}`).
///
/// Returns an empty set for labels outside [`CERTIFICATIONS`].
pub fn expand_certification(label: &str) -> BTreeSet<&'static str> {
    CERTIFICATION_LABELS
        .iter()
        .find(|(combined, _)| *combined == label)
        .map(|(_, atoms)| atoms.iter().copied().collect())
        .unwrap_or_default()
}

/// One of the controlled vocabularies, for callers that iterate them generically
/// (field validation, option lists).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vocabulary {
    Modality,
    Anatomy,
    Certification,
    Task,
}

impl Vocabulary {
    pub const ALL: [Vocabulary; 4] = [
        Vocabulary::Modality,
        Vocabulary::Anatomy,
        Vocabulary::Certification,
        Vocabulary::Task,
    ];

    pub fn values(self) -> &'static [&'static str] {
        match self {
            Vocabulary::Modality => MODALITIES,
            Vocabulary::Anatomy => ANATOMICAL_LOCATIONS,
            Vocabulary::Certification => CERTIFICATIONS,
            Vocabulary::Task => KNOWN_TASKS,
        }
    }

    pub fn contains(self, value: &str) -> bool {
        self.values().contains(&value)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Vocabulary::Modality => "modality",
            Vocabulary::Anatomy => "anatomy",
            Vocabulary::Certification => "certification",
            Vocabulary::Task => "task",
        }
    }
}
