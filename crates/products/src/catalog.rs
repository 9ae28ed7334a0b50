//! In-memory product collection.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use rtcatalog_core::{CatalogError, CatalogResult, ProductId};

use crate::product::ProductRecord;

/// An ordered, id-unique collection of product records.
///
/// Order is the order records were supplied in; filtering and review results
/// preserve it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<ProductRecord>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting the first duplicate id.
    pub fn from_records(records: Vec<ProductRecord>) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.id.clone(), position).is_some() {
                tracing::warn!(product_id = %record.id, "duplicate product id in catalog");
                return Err(CatalogError::conflict(format!(
                    "duplicate product id '{}'",
                    record.id
                )));
            }
        }

        tracing::debug!(products = records.len(), "catalog loaded");
        Ok(Self { records, index })
    }

    /// Load a JSON array of product records, keeping every record that decodes.
    ///
    /// Only a document that is not a JSON array fails. A record that does not
    /// decode, or repeats an id already loaded, is skipped and reported; the
    /// first occurrence of an id wins.
    pub fn load_json(json: &str) -> CatalogResult<CatalogLoad> {
        let entries: Vec<Value> = serde_json::from_str(json)?;
        let mut records = Vec::with_capacity(entries.len());
        let mut index = HashMap::with_capacity(entries.len());
        let mut skipped = Vec::new();

        for (position, entry) in entries.into_iter().enumerate() {
            let raw_id = entry.get("id").and_then(Value::as_str).map(str::to_owned);
            let record = match serde_json::from_value::<ProductRecord>(entry) {
                Ok(record) => record,
                Err(error) => {
                    tracing::warn!(index = position, product_id = ?raw_id, %error, "skipping undecodable product record");
                    skipped.push(SkippedRecord {
                        index: position,
                        id: raw_id,
                        reason: error.to_string(),
                    });
                    continue;
                }
            };

            if index.contains_key(&record.id) {
                tracing::warn!(index = position, product_id = %record.id, "skipping duplicate product id");
                skipped.push(SkippedRecord {
                    index: position,
                    id: raw_id,
                    reason: format!("duplicate product id '{}'", record.id),
                });
                continue;
            }

            index.insert(record.id.clone(), records.len());
            records.push(record);
        }

        tracing::debug!(products = records.len(), skipped = skipped.len(), "catalog loaded");
        Ok(CatalogLoad {
            catalog: Self { records, index },
            skipped,
        })
    }

    /// [`Catalog::load_json`] without the skipped-record report.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        Ok(Self::load_json(json)?.catalog)
    }

    pub fn get(&self, id: &ProductId) -> Option<&ProductRecord> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProductRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A record left out of a catalog loaded from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRecord {
    /// Position in the source array.
    pub index: usize,
    pub id: Option<String>,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    pub skipped: Vec<SkippedRecord>,
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ProductRecord;
    type IntoIter = std::slice::Iter<'a, ProductRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> ProductRecord {
        ProductRecord::new(ProductId::new(id).unwrap(), id.to_uppercase(), "Co")
    }

    #[test]
    fn lookup_by_id_and_order_preserved() {
        let catalog = Catalog::from_records(vec![record("b"), record("a")]).unwrap();
        assert_eq!(catalog.len(), 2);
        let ids: Vec<&str> = catalog.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(catalog.get(&ProductId::new("a").unwrap()).unwrap().name, "A");
        assert!(catalog.get(&ProductId::new("zzz").unwrap()).is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::from_records(vec![record("a"), record("b"), record("a")]).unwrap_err();
        match err {
            CatalogError::Conflict(msg) => assert!(msg.contains("'a'")),
            other => panic!("expected Conflict, got {other:?}"),
        }
    }

    #[test]
    fn only_a_malformed_document_fails() {
        assert!(matches!(Catalog::from_json_str("{not json"), Err(CatalogError::Parse(_))));
        assert!(matches!(Catalog::from_json_str(r#"{"id": "x"}"#), Err(CatalogError::Parse(_))));

        let catalog = Catalog::from_json_str(r#"[{"id": "x"}, {"id": "y", "name": "Y"}]"#).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn bad_records_are_skipped_not_fatal() {
        let json = r#"[
            {"id": "good-1"},
            {"id": "odd", "market": {"countriesPresent": "12+"}},
            {"id": " "},
            {"id": "good-2", "evidence": [42]},
            {"id": "good-3"},
            {"id": "good-1", "name": "Second copy"}
        ]"#;

        let load = Catalog::load_json(json).unwrap();
        let ids: Vec<&str> = load.catalog.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["good-1", "good-3"]);
        assert_eq!(load.catalog.get(&ProductId::new("good-1").unwrap()).unwrap().name, "");

        let skipped: Vec<(usize, Option<&str>)> = load
            .skipped
            .iter()
            .map(|s| (s.index, s.id.as_deref()))
            .collect();
        assert_eq!(
            skipped,
            vec![
                (1, Some("odd")),
                (2, Some(" ")),
                (3, Some("good-2")),
                (5, Some("good-1")),
            ]
        );
        assert!(load.skipped[0].reason.contains("12+"));
        assert!(load.skipped[3].reason.contains("duplicate"));

        assert_eq!(Catalog::from_json_str(json).unwrap().len(), 2);
    }
}
