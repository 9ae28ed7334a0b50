//! Multi-facet product filtering.
//!
//! A product survives a query when it passes every active facet (AND across
//! facets) and, inside a facet, matches any selected value (OR within a facet).
//! Absent fields simply fail the facet; nothing here returns an error.

pub mod engine;
pub mod facets;
pub mod predicates;
pub mod state;

pub use engine::FilterEngine;
pub use facets::{FacetCounts, facet_counts};
pub use state::{FacetMatching, FilterState};
