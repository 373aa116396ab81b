//! Shared context for every catalog surface (tabs, sidebar, drawer, chips,
//! grid). Surfaces only mutate the filters through these methods.

use common::{course_discovery::CourseDiscovery, result_set::{FacetCounts, ResultSet}};
use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct CatalogContext {
    pub discovery: Signal<CourseDiscovery>,
    pub results: Memo<ResultSet>,
    pub facet_counts: Memo<Vec<FacetCounts>>,
    pub drawer_open: Signal<bool>,
}

impl CatalogContext {
    pub fn facet(&self, facet_id: &str) -> Option<FacetCounts> {
        self.facet_counts.read().iter().find(|f| f.facet_id == facet_id).cloned()
    }

    pub fn select_facet_value(&self, facet_id: &str, value: &str) {
        let mut discovery = self.discovery;
        discovery.write().select_facet_value(facet_id, value);
    }

    pub fn deselect_facet_value(&self, facet_id: &str, value: &str) {
        let mut discovery = self.discovery;
        discovery.write().deselect_facet_value(facet_id, value);
    }

    pub fn clear_facet(&self, facet_id: &str) {
        let mut discovery = self.discovery;
        discovery.write().clear_facet(facet_id);
    }

    pub fn set_search_query(&self, text: String) {
        let mut discovery = self.discovery;
        discovery.write().set_search_query(text);
    }

    pub fn set_sort_key(&self, sort_key: &str) {
        let mut discovery = self.discovery;
        discovery.write().set_sort_key(sort_key);
    }

    pub fn reset_all(&self) {
        let mut discovery = self.discovery;
        discovery.write().reset_all();
    }

    pub fn set_drawer_open(&self, open: bool) {
        let mut drawer_open = self.drawer_open;
        drawer_open.set(open);
    }
}
