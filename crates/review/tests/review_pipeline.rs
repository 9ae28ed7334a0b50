use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};
use rtcatalog_core::{CatalogError, FixedClock, ProductId};
use rtcatalog_products::Catalog;
use rtcatalog_review::{
    InMemoryCommentRepository, NewComment, ReviewCommentRepository, ReviewOverview, ReviewStatus,
    RevisionLabel, Severity, Urgency, check_product, sort_by_staleness, summarize_all,
};

fn catalog() -> Catalog {
    let json = r#"[
        {
            "id": "fresh",
            "name": "Fresh Contour",
            "company": "Acme",
            "category": "Auto-Contouring",
            "description": "OAR contouring",
            "modality": "CT",
            "anatomicalLocation": ["Brain"],
            "certification": "CE",
            "releaseDate": "2020-01-01",
            "lastRevised": "2025-06-01",
            "keyFeatures": ["Fast"],
            "technicalSpecifications": {},
            "evidence": [{"type": "Peer-reviewed", "description": "Validation study"}]
        },
        {
            "id": "due",
            "name": "Due Planner",
            "company": "Beta",
            "category": "Treatment Planning",
            "description": "Plan generation",
            "modality": ["CT"],
            "anatomy": ["Prostate"],
            "certification": "FDA",
            "lastRevised": "2025-02-01"
        },
        {
            "id": "overdue",
            "name": "Overdue QA",
            "company": "Gamma",
            "category": "Quality Assurance",
            "modality": ["CT", "Hologram"],
            "anatomicalLocation": ["Lung"],
            "certification": "CE & FDA",
            "lastRevised": "2024-09-01T12:00:00Z"
        },
        {
            "id": "never",
            "name": "Never Reviewed",
            "company": "Delta",
            "lastRevised": "sometime last spring"
        }
    ]"#;
    Catalog::from_json_str(json).expect("catalog loads")
}

fn today() -> FixedClock {
    FixedClock::at_date(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap())
}

#[test]
fn review_queue_end_to_end() {
    let catalog = catalog();
    let mut summaries = summarize_all(&catalog, &today());

    let ids: Vec<&str> = summaries.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["fresh", "due", "overdue", "never"]);

    sort_by_staleness(&mut summaries);
    let ids: Vec<&str> = summaries.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["never", "overdue", "due", "fresh"]);

    let never = &summaries[0];
    assert_eq!(never.urgency, Urgency::High);
    assert_eq!(never.revision_label, RevisionLabel::Critical);
    assert!(never.days_since_review > 9000);

    let overdue = &summaries[1];
    assert_eq!(overdue.days_since_review, 302);
    assert_eq!(overdue.urgency, Urgency::Medium);
    assert_eq!(overdue.revision_label, RevisionLabel::Overdue);
    assert_eq!(overdue.status, ReviewStatus::Critical);

    let due = &summaries[2];
    assert_eq!(due.days_since_review, 149);
    assert_eq!(due.urgency, Urgency::Low);
    assert_eq!(due.revision_label, RevisionLabel::DueSoon);
    assert_eq!(due.status, ReviewStatus::Warning);

    let fresh = &summaries[3];
    assert_eq!(fresh.days_since_review, 29);
    assert_eq!(fresh.revision_label, RevisionLabel::Recent);
    assert_eq!(fresh.status, ReviewStatus::Ok);
    assert_eq!(fresh.issue_count, 0);

    let overview = ReviewOverview::from_summaries(&summaries);
    assert_eq!(overview.total, 4);
    assert_eq!((overview.ok, overview.warning, overview.critical), (1, 2, 1));
    assert_eq!(
        (overview.high_urgency, overview.medium_urgency, overview.low_urgency),
        (1, 1, 2)
    );
}

#[test]
fn legacy_anatomy_counts_for_completeness() {
    let catalog = catalog();
    let due = catalog.get(&ProductId::new("due").unwrap()).unwrap();
    let report = check_product(due);

    assert!(report.checks.iter().all(|c| c.field != "anatomicalLocation"));
    assert_eq!(report.fail_count(), 0);
    assert!(report.checks.iter().any(|c| c.field == "evidence" && c.severity == Severity::Warning));
}

#[test]
fn summary_serializes_camel_case() {
    let catalog = catalog();
    let summaries = summarize_all(&catalog, &today());
    let json = serde_json::to_value(&summaries[0]).unwrap();

    assert_eq!(json["id"], "fresh");
    assert_eq!(json["daysSinceReview"], 29);
    assert_eq!(json["revisionLabel"], "recent");
    assert_eq!(json["urgency"], "low");
    assert_eq!(json["status"], "ok");
}

#[test]
fn comments_shared_through_arc() {
    let at = Utc.with_ymd_and_hms(2025, 6, 30, 9, 0, 0).unwrap();
    let repo: Arc<dyn ReviewCommentRepository> =
        Arc::new(InMemoryCommentRepository::with_clock(FixedClock::new(at)));
    let product = ProductId::new("overdue").unwrap();

    let first = repo
        .add(NewComment {
            product_id: product.clone(),
            author: "reviewer".into(),
            body: "Hologram is not a modality".into(),
        })
        .unwrap();
    assert_eq!(first.created_at, at);

    let err = repo
        .add(NewComment {
            product_id: product.clone(),
            author: "reviewer".into(),
            body: "   ".into(),
        })
        .unwrap_err();
    assert!(matches!(err, CatalogError::Validation(_)));

    assert_eq!(repo.list_for_product(&product).len(), 1);
    repo.remove(first.id).unwrap();
    assert!(repo.list_for_product(&product).is_empty());
    assert!(matches!(repo.remove(first.id), Err(CatalogError::NotFound)));
}
