use rtcatalog_products::ProductRecord;

use crate::predicates::{
    matches_certification, matches_company, matches_location, matches_modality, matches_search,
    matches_task,
};
use crate::state::{FacetMatching, FilterState};

/// Applies a [`FilterState`] and search query to a product collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterEngine {
    matching: FacetMatching,
}

impl FilterEngine {
    pub fn new(matching: FacetMatching) -> Self {
        Self { matching }
    }

    pub fn matching(&self) -> FacetMatching {
        self.matching
    }

    /// Does one product pass every active facet and the search query?
    pub fn matches(&self, product: &ProductRecord, state: &FilterState, search: Option<&str>) -> bool {
        if let Some(query) = search {
            if !matches_search(product, query) {
                return false;
            }
        }

        let locations = self.matching.selected(&state.locations);
        let modalities = self.matching.selected(&state.modalities);

        (state.tasks.is_empty() || matches_task(product, &state.tasks))
            && (locations.is_empty() || matches_location(product, locations))
            && (state.companies.is_empty() || matches_company(product, &state.companies))
            && (state.certifications.is_empty()
                || matches_certification(product, &state.certifications))
            && (modalities.is_empty() || matches_modality(product, modalities))
    }

    /// Products passing the filter, in input order.
    pub fn apply<'a>(
        &self,
        products: impl IntoIterator<Item = &'a ProductRecord>,
        state: &FilterState,
        search: Option<&str>,
    ) -> Vec<&'a ProductRecord> {
        let mut considered = 0usize;
        let retained: Vec<&ProductRecord> = products
            .into_iter()
            .inspect(|_| considered += 1)
            .filter(|product| self.matches(product, state, search))
            .collect();

        tracing::debug!(
            considered,
            retained = retained.len(),
            active_facets = state.active_facet_count(),
            searched = search.is_some_and(|q| !q.trim().is_empty()),
            "products filtered"
        );
        retained
    }
}
