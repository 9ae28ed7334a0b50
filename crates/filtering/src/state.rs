use serde::{Deserialize, Serialize};

/// Selected facet values, as held by the UI.
///
/// An empty list means the facet is inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterState {
    pub tasks: Vec<String>,
    pub locations: Vec<String>,
    pub companies: Vec<String>,
    pub certifications: Vec<String>,
    pub modalities: Vec<String>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.active_facet_count() == 0
    }

    pub fn active_facet_count(&self) -> usize {
        [
            &self.tasks,
            &self.locations,
            &self.companies,
            &self.certifications,
            &self.modalities,
        ]
        .iter()
        .filter(|values| !values.is_empty())
        .count()
    }
}

/// How multi-value location and modality selections are matched.
///
/// Older catalog front-ends only tested the first selected location/modality;
/// `FirstValueOnly` reproduces that for parity checks. Every other facet always
/// matches any selected value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetMatching {
    #[default]
    AnyOf,
    FirstValueOnly,
}

impl FacetMatching {
    /// The selected values that take part in matching.
    pub fn selected<'a>(self, values: &'a [String]) -> &'a [String] {
        match self {
            FacetMatching::AnyOf => values,
            FacetMatching::FirstValueOnly => &values[..values.len().min(1)],
        }
    }
}
