//! `rtcatalog-core` — shared building blocks for the catalog engine.
//!
//! This crate contains **pure** primitives (no IO, no rendering, no storage).

pub mod clock;
pub mod error;
pub mod id;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CatalogError, CatalogResult};
pub use id::{CommentId, ProductId};
