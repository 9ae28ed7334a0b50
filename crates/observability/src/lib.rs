//! Tracing/logging setup shared by binaries.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::{LogFormat, LogSettings};

/// Initialize process-wide tracing with defaults (`info`, JSON).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&LogSettings::default());
}

/// Initialize process-wide tracing from explicit settings.
pub fn init_with(settings: &LogSettings) {
    tracing::init(settings);
}
