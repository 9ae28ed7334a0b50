//! Layered configuration loading.
//!
//! Sources (in priority order, highest wins):
//! 1. Environment variables (`RTCATALOG_*` prefix, `__` as separator)
//! 2. Explicit `--config <file>`
//! 3. Project-level `./rtcatalog.toml`
//! 4. User-level `~/.config/rtcatalog/config.toml`
//! 5. Built-in defaults
//!
//! `RTCATALOG_FILTER__FACET_MATCHING=first_value_only` maps to
//! `filter.facet_matching`, and so on.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use rtcatalog_core::{Clock, FixedClock, SystemClock};
use rtcatalog_filtering::FacetMatching;
use rtcatalog_observability::LogSettings;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Configuration file not found: {0}")]
    MissingFile(PathBuf),
}

impl From<figment::Error> for ConfigError {
    fn from(value: figment::Error) -> Self {
        Self::Figment(Box::new(value))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub facet_matching: FacetMatching,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewConfig {
    /// Fixed "today" for reproducible review reports; wall clock when unset.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

impl ReviewConfig {
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.reference_date {
            Some(date) => Box::new(FixedClock::at_date(date)),
            None => Box::new(SystemClock),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub log: LogSettings,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub review: ReviewConfig,
}

impl CatalogConfig {
    /// Load configuration from all sources.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
        }
        Ok(Self::figment(explicit).extract()?)
    }

    /// Build the figment provider chain.
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from("rtcatalog.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed("RTCATALOG_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rtcatalog").join("config.toml"))
    }
}
