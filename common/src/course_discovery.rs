//! A browsing session: catalog, filter store and a memoized result set.

use std::{cell::OnceCell, sync::Arc};

use crate::{
    course::Course,
    facet_registry::FacetRegistry,
    filter_evaluator::{all_facet_counts, evaluate},
    filter_state::FilterState,
    filter_store::FilterStore,
    result_set::{FacetCounts, ResultSet},
    sort_spec::SortKey,
};

/// Mutations go through the wrapped [`FilterStore`] and drop the cached
/// result; reads recompute it at most once per state.
#[derive(Debug, Clone)]
pub struct CourseDiscovery {
    catalog: Arc<[Course]>,
    store: FilterStore,
    results: OnceCell<ResultSet>,
}

impl CourseDiscovery {
    pub fn new(catalog: impl Into<Arc<[Course]>>, registry: Arc<FacetRegistry>) -> Self {
        Self { catalog: catalog.into(), store: FilterStore::new(registry), results: OnceCell::new() }
    }

    pub fn restore(catalog: impl Into<Arc<[Course]>>, registry: Arc<FacetRegistry>, state: &FilterState) -> Self {
        Self { catalog: catalog.into(), store: FilterStore::restore(registry, state), results: OnceCell::new() }
    }

    pub fn store(&self) -> &FilterStore {
        &self.store
    }

    pub fn state(&self) -> FilterState {
        self.store.state()
    }

    pub fn results(&self) -> &ResultSet {
        self.results.get_or_init(|| evaluate(&self.catalog, self.store.registry(), self.store.state_ref()))
    }

    pub fn facet_counts(&self) -> Vec<FacetCounts> {
        all_facet_counts(&self.catalog, self.store.registry(), self.store.state_ref())
    }

    pub fn select_facet_value(&mut self, facet_id: &str, value: &str) -> bool {
        let changed = self.store.select_facet_value(facet_id, value);
        self.invalidate(changed)
    }

    pub fn deselect_facet_value(&mut self, facet_id: &str, value: &str) -> bool {
        let changed = self.store.deselect_facet_value(facet_id, value);
        self.invalidate(changed)
    }

    pub fn clear_facet(&mut self, facet_id: &str) -> bool {
        let changed = self.store.clear_facet(facet_id);
        self.invalidate(changed)
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) -> bool {
        let changed = self.store.set_search_query(text);
        self.invalidate(changed)
    }

    pub fn set_sort(&mut self, sort: SortKey) -> bool {
        let changed = self.store.set_sort(sort);
        self.invalidate(changed)
    }

    pub fn set_sort_key(&mut self, sort_key: &str) -> bool {
        let changed = self.store.set_sort_key(sort_key);
        self.invalidate(changed)
    }

    pub fn reset_all(&mut self) -> bool {
        let changed = self.store.reset_all();
        self.invalidate(changed)
    }

    fn invalidate(&mut self, changed: bool) -> bool {
        if changed {
            self.results = OnceCell::new();
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::{catalog_const::*, course::{CourseId, DeliveryType}};

    fn catalog() -> Vec<Course> {
        ["Algebra", "Geometry"]
            .into_iter()
            .enumerate()
            .map(|(i, title)| Course {
                id: CourseId(format!("c-{i}")),
                title: title.to_string(),
                teacher: "S. Rao".to_string(),
                board: BOARD_CBSE.to_string(),
                level: "Class 9".to_string(),
                subjects: BTreeSet::from(["Maths".to_string()]),
                delivery: DeliveryType::Recorded,
                rating: 4.0,
                price: 499,
                original_price: 999,
                tags: BTreeSet::new(),
                launch_date: "2025-01-01".to_string(),
            })
            .collect()
    }

    #[test]
    fn results_are_recomputed_only_after_a_change() {
        let mut discovery = CourseDiscovery::new(catalog(), Arc::new(FacetRegistry::course_catalog()));
        assert_eq!(discovery.results().len(), 2);
        let first = discovery.results() as *const ResultSet;
        assert_eq!(first, discovery.results() as *const ResultSet);

        assert!(!discovery.set_sort_key("bogus"));
        assert!(discovery.results.get().is_some());

        assert!(discovery.set_search_query("algebra"));
        assert!(discovery.results.get().is_none());
        assert_eq!(discovery.results().course_ids(), vec![CourseId::from("c-0")]);
    }
}
