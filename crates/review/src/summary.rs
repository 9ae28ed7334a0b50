//! Per-product review summary.

use serde::{Deserialize, Serialize};

use rtcatalog_core::{Clock, ProductId};
use rtcatalog_products::ProductRecord;

use crate::completeness::check_product;
use crate::revision::{RevisionLabel, Urgency, revision_status};

/// Review outcome from completeness findings. Any fail makes a product critical,
/// whatever its warning count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Ok,
    Warning,
    Critical,
}

impl ReviewStatus {
    pub fn from_counts(fails: usize, warnings: usize) -> Self {
        if fails > 0 {
            ReviewStatus::Critical
        } else if warnings > 0 {
            ReviewStatus::Warning
        } else {
            ReviewStatus::Ok
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub id: ProductId,
    pub status: ReviewStatus,
    pub urgency: Urgency,
    pub revision_label: RevisionLabel,
    pub days_since_review: i64,
    pub issue_count: usize,
}

/// Summarize one product. Deterministic for a given clock reading.
pub fn summarize(product: &ProductRecord, clock: &dyn Clock) -> ReviewSummary {
    let report = check_product(product);
    let revision = revision_status(product, clock);

    ReviewSummary {
        id: product.id.clone(),
        status: ReviewStatus::from_counts(report.fail_count(), report.warning_count()),
        urgency: revision.urgency,
        revision_label: revision.label,
        days_since_review: revision.days_since_review,
        issue_count: report.fail_count() + report.warning_count(),
    }
}

/// Summarize every product, in input order. The clock is read once so the whole
/// batch shares one "today".
pub fn summarize_all<'a>(
    products: impl IntoIterator<Item = &'a ProductRecord>,
    clock: &dyn Clock,
) -> Vec<ReviewSummary> {
    let frozen = rtcatalog_core::FixedClock::new(clock.now());
    let summaries: Vec<ReviewSummary> = products
        .into_iter()
        .map(|product| summarize(product, &frozen))
        .collect();

    tracing::debug!(products = summaries.len(), "review summaries computed");
    summaries
}

/// Review queue order: stalest first, ties broken by id.
pub fn sort_by_staleness(summaries: &mut [ReviewSummary]) {
    summaries.sort_by(|a, b| {
        b.days_since_review
            .cmp(&a.days_since_review)
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Dashboard header counts over a set of summaries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewOverview {
    pub total: usize,
    pub ok: usize,
    pub warning: usize,
    pub critical: usize,
    pub high_urgency: usize,
    pub medium_urgency: usize,
    pub low_urgency: usize,
    pub total_issues: usize,
    pub average_days_since_review: Option<f64>,
}

impl ReviewOverview {
    pub fn from_summaries(summaries: &[ReviewSummary]) -> Self {
        let mut overview = ReviewOverview {
            total: summaries.len(),
            ..ReviewOverview::default()
        };

        let mut days_total: i64 = 0;
        for summary in summaries {
            match summary.status {
                ReviewStatus::Ok => overview.ok += 1,
                ReviewStatus::Warning => overview.warning += 1,
                ReviewStatus::Critical => overview.critical += 1,
            }
            match summary.urgency {
                Urgency::High => overview.high_urgency += 1,
                Urgency::Medium => overview.medium_urgency += 1,
                Urgency::Low => overview.low_urgency += 1,
            }
            overview.total_issues += summary.issue_count;
            days_total = days_total.saturating_add(summary.days_since_review);
        }

        if !summaries.is_empty() {
            overview.average_days_since_review = Some(days_total as f64 / summaries.len() as f64);
        }
        overview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rtcatalog_core::FixedClock;
    use rtcatalog_products::{EvidenceEntry, OneOrMany, TechnicalSpecifications};

    fn clock() -> FixedClock {
        FixedClock::at_date(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap())
    }

    fn complete(id: &str, last_revised: &str) -> ProductRecord {
        let mut p = ProductRecord::new(ProductId::new(id).unwrap(), "Name", "Co");
        p.category = "Auto-Contouring".into();
        p.description = "desc".into();
        p.modality = Some(OneOrMany::One("CT".into()));
        p.anatomical_location = Some(OneOrMany::One("Brain".into()));
        p.certification = Some("CE".into());
        p.release_date = Some("2020-01-01".into());
        p.features = Some(vec!["f".into()]);
        p.technical_specifications = Some(TechnicalSpecifications::default());
        p.evidence = vec![EvidenceEntry::Citation("c".into())];
        p.last_revised = Some(last_revised.into());
        p
    }

    #[test]
    fn clean_recent_product_is_ok_and_low() {
        let summary = summarize(&complete("a", "2025-06-01"), &clock());
        assert_eq!(summary.status, ReviewStatus::Ok);
        assert_eq!(summary.urgency, Urgency::Low);
        assert_eq!(summary.revision_label, RevisionLabel::Recent);
        assert_eq!(summary.days_since_review, 29);
        assert_eq!(summary.issue_count, 0);
    }

    #[test]
    fn fail_takes_precedence_over_warnings() {
        let mut p = complete("a", "2025-06-01");
        p.certification = Some("ce".into()); // 1 fail
        p.description.clear(); // 5 warnings
        p.release_date = None;
        p.features = None;
        p.technical_specifications = None;
        p.evidence.clear();

        let summary = summarize(&p, &clock());
        assert_eq!(summary.status, ReviewStatus::Critical);
        assert_eq!(summary.issue_count, 6);
    }

    #[test]
    fn warnings_only_yield_warning_status() {
        let mut p = complete("a", "2025-06-01");
        p.evidence.clear();
        assert_eq!(summarize(&p, &clock()).status, ReviewStatus::Warning);
    }

    #[test]
    fn status_from_counts_table() {
        assert_eq!(ReviewStatus::from_counts(0, 0), ReviewStatus::Ok);
        assert_eq!(ReviewStatus::from_counts(0, 3), ReviewStatus::Warning);
        assert_eq!(ReviewStatus::from_counts(1, 0), ReviewStatus::Critical);
        assert_eq!(ReviewStatus::from_counts(1, 5), ReviewStatus::Critical);
    }

    #[test]
    fn summarizing_twice_is_identical() {
        let p = complete("a", "2024-01-01");
        assert_eq!(summarize(&p, &clock()), summarize(&p, &clock()));
    }

    #[test]
    fn staleness_order_and_overview() {
        let products = vec![
            complete("b", "2025-06-01"),
            complete("a", "2025-06-01"),
            complete("c", "2023-01-01"),
        ];
        let mut summaries = summarize_all(&products, &clock());
        assert_eq!(summaries[0].id.as_str(), "b");

        sort_by_staleness(&mut summaries);
        let ids: Vec<&str> = summaries.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);

        let overview = ReviewOverview::from_summaries(&summaries);
        assert_eq!(overview.total, 3);
        assert_eq!(overview.ok, 3);
        assert_eq!(overview.high_urgency, 1);
        assert_eq!(overview.low_urgency, 2);
        assert!(overview.average_days_since_review.unwrap() > 29.0);
    }

    #[test]
    fn empty_overview_has_no_average() {
        let overview = ReviewOverview::from_summaries(&[]);
        assert_eq!(overview.total, 0);
        assert!(overview.average_days_since_review.is_none());
    }

    #[test]
    fn summary_serializes_camel_case() {
        let json = serde_json::to_value(summarize(&complete("a", "2025-06-01"), &clock())).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["urgency"], "low");
        assert_eq!(json["revisionLabel"], "recent");
        assert_eq!(json["daysSinceReview"], 29);
        assert_eq!(json["issueCount"], 0);
    }
}
