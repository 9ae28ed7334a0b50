//! `rtcatalog-auth` — credential checks that must not leak timing.
//!
//! Identity, roles and approval gating live in the hosted identity service;
//! this crate only keeps the backup-code comparison that has to run locally.

pub mod backup_codes;

pub use backup_codes::{constant_time_eq, hash_backup_code, normalize_code, verify_backup_code};
