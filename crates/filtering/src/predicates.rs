//! Single-facet predicates.
//!
//! Each function answers "does this product pass this facet for these selected
//! values". Callers only invoke them for active (non-empty) facets.

use rtcatalog_products::ProductRecord;

/// Case-insensitive substring search over name, company, description,
/// category, features and key features. A blank query matches everything.
pub fn matches_search(product: &ProductRecord, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

    contains(product.name.as_str())
        || contains(product.company.as_str())
        || contains(product.description.as_str())
        || contains(product.category.as_str())
        || product.features.iter().flatten().any(|f| contains(f.as_str()))
        || product.key_features.iter().flatten().any(|f| contains(f.as_str()))
}

/// Primary category equals a task, or the task is a secondary category.
pub fn matches_task(product: &ProductRecord, tasks: &[String]) -> bool {
    tasks
        .iter()
        .any(|task| product.category == *task || product.secondary_categories.contains(task))
}

/// Case-insensitive containment in either direction, so "Head & Neck" and
/// "Head & Neck (H&N)" still match each other.
pub fn matches_location(product: &ProductRecord, locations: &[String]) -> bool {
    let product_locations: Vec<String> = product
        .anatomical_locations()
        .iter()
        .map(|l| l.to_lowercase())
        .collect();

    locations.iter().any(|selected| {
        let selected = selected.to_lowercase();
        product_locations
            .iter()
            .any(|location| location.contains(&selected) || selected.contains(location.as_str()))
    })
}

/// Exact modality membership.
pub fn matches_modality(product: &ProductRecord, modalities: &[String]) -> bool {
    let product_modalities = product.modalities();
    modalities.iter().any(|m| product_modalities.contains(m))
}

/// Case-insensitive substring of the product's certification label.
pub fn matches_certification(product: &ProductRecord, certifications: &[String]) -> bool {
    let Some(certification) = product.certification.as_deref() else {
        return false;
    };
    let certification = certification.to_lowercase();
    certifications
        .iter()
        .any(|selected| certification.contains(&selected.to_lowercase()))
}

/// Exact company name.
pub fn matches_company(product: &ProductRecord, companies: &[String]) -> bool {
    companies.iter().any(|c| product.company == *c)
}
