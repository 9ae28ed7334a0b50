use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use rtcatalog_core::ProductId;

use crate::structures::StructureEntry;

/// A field that the catalog data writes either as a single value or a list
/// (`"modality": "CT"` vs `"modality": ["CT", "MRI"]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// View as a list; a scalar becomes a single-element slice.
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(value) => std::slice::from_ref(value),
            OneOrMany::Many(values) => values,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        OneOrMany::Many(values)
    }
}

/// An evidence item: a bare citation string, or a structured reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EvidenceEntry {
    Citation(String),
    Reference(EvidenceReference),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceReference {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSpecifications {
    #[serde(default)]
    pub population: Option<String>,
    #[serde(default)]
    pub input: Option<OneOrMany<String>>,
    #[serde(default)]
    pub input_format: Option<OneOrMany<String>>,
    #[serde(default)]
    pub output: Option<OneOrMany<String>>,
    #[serde(default)]
    pub output_format: Option<OneOrMany<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyInfo {
    #[serde(default)]
    pub integration: Option<OneOrMany<String>>,
    #[serde(default)]
    pub deployment: Option<OneOrMany<String>>,
    #[serde(default)]
    pub trigger_for_analysis: Option<String>,
    #[serde(default)]
    pub processing_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInfo {
    #[serde(default)]
    pub on_market_since: Option<String>,
    #[serde(default)]
    pub distribution_channels: Option<OneOrMany<String>>,
    #[serde(default)]
    pub countries_present: Option<u32>,
    #[serde(default)]
    pub paying_customers: Option<String>,
    #[serde(default)]
    pub research_users: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingInfo {
    #[serde(default)]
    pub model: Option<OneOrMany<String>>,
    #[serde(default)]
    pub based_on: Option<String>,
}

/// One catalog entry describing an AI product for radiotherapy.
///
/// Records are authored outside this crate and loaded wholesale; nothing in the
/// workspace mutates one after loading. Apart from `id`, every field is optional
/// on the wire so partially filled records still load and can be reviewed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub company: String,

    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub secondary_categories: Vec<String>,

    #[serde(default)]
    pub modality: Option<OneOrMany<String>>,
    #[serde(default)]
    pub anatomical_location: Option<OneOrMany<String>>,
    /// Legacy spelling of `anatomical_location`, still present in older entries.
    #[serde(default)]
    pub anatomy: Option<OneOrMany<String>>,

    #[serde(default)]
    pub certification: Option<String>,

    // Raw ISO-8601 strings; see `parse_record_date`.
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub last_revised: Option<String>,
    #[serde(default)]
    pub last_verified: Option<String>,

    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub key_features: Option<Vec<String>>,
    #[serde(default)]
    pub limitations: Vec<String>,
    #[serde(default)]
    pub evidence: Vec<EvidenceEntry>,
    #[serde(default)]
    pub structures: Vec<StructureEntry>,
    #[serde(default)]
    pub supported_structures: Vec<StructureEntry>,

    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub product_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,

    #[serde(default)]
    pub technical_specifications: Option<TechnicalSpecifications>,
    #[serde(default)]
    pub technology: Option<TechnologyInfo>,
    #[serde(default)]
    pub market: Option<MarketInfo>,
    #[serde(default)]
    pub pricing: Option<PricingInfo>,
}

impl ProductRecord {
    /// A record carrying only its identity; every other field empty.
    pub fn new(id: ProductId, name: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            company: company.into(),
            category: String::new(),
            secondary_categories: Vec::new(),
            modality: None,
            anatomical_location: None,
            anatomy: None,
            certification: None,
            release_date: None,
            last_updated: None,
            last_revised: None,
            last_verified: None,
            description: String::new(),
            features: None,
            key_features: None,
            limitations: Vec::new(),
            evidence: Vec::new(),
            structures: Vec::new(),
            supported_structures: Vec::new(),
            website: None,
            product_url: None,
            github_url: None,
            logo_url: None,
            technical_specifications: None,
            technology: None,
            market: None,
            pricing: None,
        }
    }

    /// Modalities as a list (scalar wrapped); empty when absent.
    pub fn modalities(&self) -> &[String] {
        self.modality.as_ref().map(OneOrMany::as_slice).unwrap_or_default()
    }

    /// Anatomical locations, preferring `anatomicalLocation` over legacy `anatomy`.
    pub fn anatomical_locations(&self) -> &[String] {
        match (&self.anatomical_location, &self.anatomy) {
            (Some(primary), _) if !primary.is_empty() => primary.as_slice(),
            (_, Some(legacy)) => legacy.as_slice(),
            (Some(primary), None) => primary.as_slice(),
            (None, None) => &[],
        }
    }

    /// `keyFeatures` when present, otherwise `features`.
    pub fn effective_features(&self) -> &[String] {
        self.key_features
            .as_deref()
            .or(self.features.as_deref())
            .unwrap_or_default()
    }

    /// `supportedStructures` when non-empty, otherwise `structures`.
    pub fn structure_entries(&self) -> &[StructureEntry] {
        if self.supported_structures.is_empty() {
            &self.structures
        } else {
            &self.supported_structures
        }
    }

    pub fn last_revised_at(&self) -> Option<DateTime<Utc>> {
        self.last_revised.as_deref().and_then(parse_record_date)
    }

    pub fn release_date_at(&self) -> Option<DateTime<Utc>> {
        self.release_date.as_deref().and_then(parse_record_date)
    }
}

/// Parse a catalog date: RFC 3339 timestamp, or a plain `YYYY-MM-DD` date taken
/// as midnight UTC. Anything else is `None`.
pub fn parse_record_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(chrono::NaiveTime::MIN).and_utc())
}
