//! Facet option counts for filter sidebars.

use std::collections::BTreeMap;

use serde::Serialize;

use rtcatalog_products::ProductRecord;

/// How many products carry each facet value.
///
/// A product counts once per distinct value it carries; tasks include
/// secondary categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetCounts {
    pub tasks: BTreeMap<String, usize>,
    pub locations: BTreeMap<String, usize>,
    pub companies: BTreeMap<String, usize>,
    pub certifications: BTreeMap<String, usize>,
    pub modalities: BTreeMap<String, usize>,
}

fn bump<'a>(counts: &mut BTreeMap<String, usize>, values: impl IntoIterator<Item = &'a String>) {
    let mut seen: Vec<&str> = Vec::new();
    for value in values {
        let value = value.trim();
        if value.is_empty() || seen.contains(&value) {
            continue;
        }
        seen.push(value);
        *counts.entry(value.to_string()).or_default() += 1;
    }
}

pub fn facet_counts<'a>(products: impl IntoIterator<Item = &'a ProductRecord>) -> FacetCounts {
    let mut counts = FacetCounts::default();

    for product in products {
        bump(
            &mut counts.tasks,
            std::iter::once(&product.category).chain(&product.secondary_categories),
        );
        bump(&mut counts.locations, product.anatomical_locations());
        bump(&mut counts.companies, std::iter::once(&product.company));
        bump(&mut counts.certifications, product.certification.as_ref());
        bump(&mut counts.modalities, product.modalities());
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtcatalog_core::ProductId;
    use rtcatalog_products::OneOrMany;

    #[test]
    fn counts_each_value_once_per_product() {
        let mut a = ProductRecord::new(ProductId::new("a").unwrap(), "A", "Acme");
        a.category = "Auto-Contouring".into();
        a.secondary_categories = vec!["Auto-Contouring".into(), "Quality Assurance".into()];
        a.modality = Some(OneOrMany::Many(vec!["CT".into(), "CT".into()]));
        a.certification = Some("CE".into());

        let mut b = ProductRecord::new(ProductId::new("b").unwrap(), "B", "Acme");
        b.category = "Auto-Contouring".into();
        b.modality = Some(OneOrMany::One("MRI".into()));
        b.anatomy = Some(OneOrMany::One("Brain".into()));

        let counts = facet_counts([&a, &b]);
        assert_eq!(counts.tasks["Auto-Contouring"], 2);
        assert_eq!(counts.tasks["Quality Assurance"], 1);
        assert_eq!(counts.modalities["CT"], 1);
        assert_eq!(counts.modalities["MRI"], 1);
        assert_eq!(counts.companies["Acme"], 2);
        assert_eq!(counts.certifications.len(), 1);
        assert_eq!(counts.locations["Brain"], 1);
    }

    #[test]
    fn blank_values_are_not_counted() {
        let p = ProductRecord::new(ProductId::new("p").unwrap(), "P", " ");
        let counts = facet_counts([&p]);
        assert!(counts.tasks.is_empty());
        assert!(counts.companies.is_empty());
    }
}
