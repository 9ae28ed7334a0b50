//! Product review engine.
//!
//! Turns catalog records into reviewable findings:
//! - [`validation`]: vocabulary format checks (modality, anatomy, certification)
//! - [`completeness`]: severity-graded checks for missing business fields
//! - [`revision`]: staleness of a record's last revision
//! - [`summary`]: the per-product review summary combining the above
//! - [`comments`]: reviewer comments behind an injectable repository
//!
//! All checks are pure and report problems as data; a bad record never stops a
//! batch.

pub mod comments;
pub mod completeness;
pub mod revision;
pub mod summary;
pub mod validation;

pub use comments::{InMemoryCommentRepository, NewComment, ReviewComment, ReviewCommentRepository};
pub use completeness::{CompletenessReport, FieldCheck, Severity, check_product};
pub use revision::{
    REVISION_SENTINEL, RevisionLabel, RevisionStatus, Urgency, days_between, days_since_review,
    revision_sentinel, revision_status,
};
pub use summary::{ReviewOverview, ReviewStatus, ReviewSummary, sort_by_staleness, summarize, summarize_all};
pub use validation::{ValidatedField, ValidationIssue, validate_product};
