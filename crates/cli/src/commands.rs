//! Subcommand handlers.
//!
//! Catalog handlers work on an already-loaded [`Catalog`] and return a
//! serializable report; [`run`] does the file IO and JSON encoding.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, bail};
use serde::Serialize;

use rtcatalog_core::{Clock, ProductId};
use rtcatalog_filtering::{FacetCounts, FilterEngine, FilterState, facet_counts};
use rtcatalog_products::{
    Catalog, CatalogLoad, ProductRecord, SkippedRecord, StructureGrouping, group_structures,
};
use rtcatalog_review::{
    ReviewOverview, ReviewSummary, ValidationIssue, sort_by_staleness, summarize_all,
    validate_product,
};
use rtcatalog_vocabulary::Vocabulary;

use crate::cli::Command;
use crate::config::CatalogConfig;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductValidation {
    pub id: ProductId,
    pub issues: Vec<ValidationIssue>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub checked: usize,
    pub invalid: usize,
    /// Only products with at least one issue.
    pub products: Vec<ProductValidation>,
    /// Records that could not be loaded at all.
    pub skipped: Vec<SkippedRecord>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewReport {
    pub overview: ReviewOverview,
    pub products: Vec<ReviewSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListing {
    pub id: ProductId,
    pub name: String,
    pub company: String,
    pub category: String,
}

impl From<&ProductRecord> for ProductListing {
    fn from(product: &ProductRecord) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            company: product.company.clone(),
            category: product.category.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterReport {
    pub total: usize,
    pub matched: usize,
    pub products: Vec<ProductListing>,
}

pub fn validate(load: &CatalogLoad) -> ValidationReport {
    let catalog = &load.catalog;
    let products: Vec<ProductValidation> = catalog
        .iter()
        .filter_map(|product| {
            let issues = validate_product(product);
            (!issues.is_empty()).then(|| ProductValidation {
                id: product.id.clone(),
                issues,
            })
        })
        .collect();

    ValidationReport {
        checked: catalog.len(),
        invalid: products.len(),
        products,
        skipped: load.skipped.clone(),
    }
}

pub fn review(catalog: &Catalog, clock: &dyn Clock, sort_stale: bool) -> ReviewReport {
    let mut products = summarize_all(catalog, clock);
    if sort_stale {
        sort_by_staleness(&mut products);
    }
    ReviewReport {
        overview: ReviewOverview::from_summaries(&products),
        products,
    }
}

pub fn filter(
    catalog: &Catalog,
    engine: &FilterEngine,
    state: &FilterState,
    search: Option<&str>,
) -> FilterReport {
    let products: Vec<ProductListing> = engine
        .apply(catalog, state, search)
        .into_iter()
        .map(ProductListing::from)
        .collect();

    FilterReport {
        total: catalog.len(),
        matched: products.len(),
        products,
    }
}

pub fn structures(catalog: &Catalog, product_id: &str) -> anyhow::Result<StructureGrouping> {
    let id = ProductId::new(product_id)?;
    let Some(product) = catalog.get(&id) else {
        bail!("product '{id}' not found in catalog");
    };
    Ok(group_structures(product.structure_entries()))
}

pub fn facets(catalog: &Catalog) -> FacetCounts {
    facet_counts(catalog)
}

/// Accepted values per vocabulary, keyed by vocabulary name.
pub fn vocabulary(kind: Option<&str>) -> anyhow::Result<BTreeMap<&'static str, &'static [&'static str]>> {
    let selected: Vec<Vocabulary> = match kind {
        None => Vocabulary::ALL.to_vec(),
        Some(kind) => match Vocabulary::ALL.into_iter().find(|v| v.as_str() == kind.trim()) {
            Some(vocabulary) => vec![vocabulary],
            None => bail!(
                "unknown vocabulary '{kind}' (expected one of: {})",
                Vocabulary::ALL.map(Vocabulary::as_str).join(", ")
            ),
        },
    };
    Ok(selected.into_iter().map(|v| (v.as_str(), v.values())).collect())
}

pub fn load_catalog(path: &Path) -> anyhow::Result<CatalogLoad> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let load = Catalog::load_json(&raw)
        .with_context(|| format!("failed to load catalog {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        products = load.catalog.len(),
        skipped = load.skipped.len(),
        "catalog loaded"
    );
    Ok(load)
}

/// Execute one subcommand and return its report as pretty JSON.
pub fn run(command: Command, config: &CatalogConfig) -> anyhow::Result<String> {
    let output = match command {
        Command::Validate { catalog } => {
            let load = load_catalog(&catalog)?;
            serde_json::to_string_pretty(&validate(&load))?
        }
        Command::Review {
            catalog,
            sort_stale,
        } => {
            let catalog = load_catalog(&catalog)?.catalog;
            let clock = config.review.clock();
            serde_json::to_string_pretty(&review(&catalog, clock.as_ref(), sort_stale))?
        }
        Command::Filter {
            catalog,
            facets,
            search,
        } => {
            let catalog = load_catalog(&catalog)?.catalog;
            let engine = FilterEngine::new(config.filter.facet_matching);
            let state = FilterState::from(facets);
            serde_json::to_string_pretty(&filter(&catalog, &engine, &state, search.as_deref()))?
        }
        Command::Structures {
            catalog,
            product_id,
        } => {
            let catalog = load_catalog(&catalog)?.catalog;
            serde_json::to_string_pretty(&structures(&catalog, &product_id)?)?
        }
        Command::Facets { catalog } => {
            let catalog = load_catalog(&catalog)?.catalog;
            serde_json::to_string_pretty(&facets(&catalog))?
        }
        Command::Vocabulary { kind } => serde_json::to_string_pretty(&vocabulary(kind.as_deref())?)?,
    };
    Ok(output)
}
