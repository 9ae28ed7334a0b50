//! Revision staleness.
//!
//! Two distinct classifications are derived from the same day count and must
//! not be merged: the 3-band [`Urgency`] drives review priority, the 4-band
//! [`RevisionLabel`] is what the dashboard shows next to a product.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use rtcatalog_core::Clock;
use rtcatalog_products::ProductRecord;

/// Unix timestamp of the stand-in for a missing or unreadable `lastRevised`:
/// 2000-01-01T00:00:00Z.
///
/// Undated products come out as maximally stale instead of failing.
pub const REVISION_SENTINEL: i64 = 946_684_800;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    /// `> 365` high, `> 180` medium, otherwise low.
    pub fn from_days(days: i64) -> Self {
        if days > 365 {
            Urgency::High
        } else if days > 180 {
            Urgency::Medium
        } else {
            Urgency::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevisionLabel {
    Recent,
    DueSoon,
    Overdue,
    Critical,
}

impl RevisionLabel {
    /// `0–90` recent, `91–180` due soon, `181–365` overdue, beyond that critical.
    pub fn from_days(days: i64) -> Self {
        match days {
            ..=90 => RevisionLabel::Recent,
            91..=180 => RevisionLabel::DueSoon,
            181..=365 => RevisionLabel::Overdue,
            _ => RevisionLabel::Critical,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RevisionLabel::Recent => "recent",
            RevisionLabel::DueSoon => "due soon",
            RevisionLabel::Overdue => "overdue",
            RevisionLabel::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionStatus {
    pub days_since_review: i64,
    pub urgency: Urgency,
    pub label: RevisionLabel,
}

/// Whole days between `revised` and `now`, rounded up; direction is ignored.
///
/// Any remainder counts, down to the nanosecond.
pub fn days_between(revised: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let delta = (now - revised).abs();
    let whole = delta.num_days();
    if delta > TimeDelta::days(whole) {
        whole + 1
    } else {
        whole
    }
}

/// Days since the product's last revision, using [`REVISION_SENTINEL`] when the
/// date is absent or cannot be parsed.
pub fn days_since_review(product: &ProductRecord, now: DateTime<Utc>) -> i64 {
    let revised = match product.last_revised_at() {
        Some(revised) => revised,
        None => {
            if product.last_revised.is_some() {
                tracing::warn!(
                    product_id = %product.id,
                    last_revised = ?product.last_revised,
                    "unparseable lastRevised; treating product as unreviewed"
                );
            }
            revision_sentinel()
        }
    };
    days_between(revised, now)
}

pub fn revision_status(product: &ProductRecord, clock: &dyn Clock) -> RevisionStatus {
    let days = days_since_review(product, clock.now());
    RevisionStatus {
        days_since_review: days,
        urgency: Urgency::from_days(days),
        label: RevisionLabel::from_days(days),
    }
}

/// [`REVISION_SENTINEL`] as a timestamp.
pub fn revision_sentinel() -> DateTime<Utc> {
    DateTime::from_timestamp(REVISION_SENTINEL, 0).unwrap_or_default()
}
