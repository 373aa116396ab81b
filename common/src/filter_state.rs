//! Filter selections, free-text query and sort key for the course grid.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{sort_spec::SortKey, text_highlight::fold_case};


/// Facets without an entry in `facet_filters` are unconstrained. Empty sets are
/// never stored, so two states with the same effective selection compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterState {
    pub facet_filters: BTreeMap<String, BTreeSet<String>>,
    /// Literal text as typed; folded only when matching.
    pub query_string: String,
    pub sort: SortKey,
}

impl FilterState {
    /// Only carries a query. Used by the hero search box.
    pub fn from_query(query_string: impl Into<String>) -> Self {
        Self { query_string: query_string.into(), ..Default::default() }
    }

    pub fn selected(&self, facet_id: &str) -> Option<&BTreeSet<String>> {
        self.facet_filters.get(facet_id).filter(|values| !values.is_empty())
    }

    pub fn is_selected(&self, facet_id: &str, value: &str) -> bool {
        self.selected(facet_id).is_some_and(|values| values.contains(value))
    }

    /// Trimmed, case-folded query, or `None` when it imposes no constraint.
    pub fn normalized_query(&self) -> Option<String> {
        let trimmed = self.query_string.trim();
        if trimmed.is_empty() { None } else { Some(fold_case(trimmed)) }
    }

    pub fn has_active_filters(&self) -> bool {
        !self.facet_filters.is_empty() || self.normalized_query().is_some()
    }

    /// Number of selected facet values plus one for a non-empty query.
    pub fn active_filter_count(&self) -> usize {
        let facets: usize = self.facet_filters.values().map(|values| values.len()).sum();
        facets + usize::from(self.normalized_query().is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_imposes_no_constraint() {
        assert_eq!(FilterState::from_query("   ").normalized_query(), None);
        assert_eq!(FilterState::from_query("  CoMMerce ").normalized_query(), Some("commerce".to_string()));
    }

    #[test]
    fn literal_query_is_kept_for_redisplay() {
        let state = FilterState::from_query("  Physics  ");
        assert_eq!(state.query_string, "  Physics  ");
    }

    #[test]
    fn counts_values_and_query() {
        let mut state = FilterState::from_query("algebra");
        state.facet_filters.insert("subject".to_string(), BTreeSet::from(["Maths".to_string(), "Science".to_string()]));
        assert_eq!(state.active_filter_count(), 3);
        assert!(state.has_active_filters());
        assert!(!FilterState::from_query("  ").has_active_filters());
        assert!(state.is_selected("subject", "Maths"));
        assert!(!state.is_selected("board", "CBSE"));
    }
}
