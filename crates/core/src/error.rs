//! Catalog error model.

use thiserror::Error;

/// Result type used across the catalog crates.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// The review and filtering engines never return this: their findings are data.
/// It covers the few places that can genuinely refuse input (loading a
/// collection, editing review comments, parsing identifiers).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A value failed validation (e.g. a blank comment body).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. empty product id).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record was not found.
    #[error("not found")]
    NotFound,

    /// A uniqueness rule was broken (e.g. duplicate product id in a collection).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Input could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// A backing store could not be used (e.g. a poisoned lock).
    #[error("storage unavailable: {0}")]
    Storage(String),
}

impl CatalogError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value.to_string())
    }
}
