//! `rtcatalog` command-line surface.
//!
//! Loads a JSON product catalog, runs the review and filtering engines over it
//! and prints the results as JSON. Rendering them is someone else's job.

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::{Cli, Command};
pub use config::{CatalogConfig, ConfigError};
