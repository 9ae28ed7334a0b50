//! Product catalog records.
//!
//! This crate holds the canonical shape of a catalog entry, the in-memory
//! collection it is loaded into, and the structure-label grouping used when a
//! product's supported structures are displayed. Everything here is
//! deterministic and free of IO; loading bytes from disk or the network is the
//! caller's job.

pub mod catalog;
pub mod product;
pub mod structures;

pub use catalog::{Catalog, CatalogLoad, SkippedRecord};
pub use product::{
    EvidenceEntry, EvidenceReference, MarketInfo, OneOrMany, PricingInfo, ProductRecord,
    TechnicalSpecifications, TechnologyInfo, parse_record_date,
};
pub use structures::{
    NamedStructure, StructureEntry, StructureGroup, StructureGrouping, group_structures,
};
