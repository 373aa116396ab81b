//! Owner of the current [`FilterState`]. All mutation goes through this API so
//! a dependent facet can never keep a value outside its parent's domain.

use std::{collections::BTreeSet, sync::Arc};

use tracing::debug;

use crate::{
    facet_registry::{FacetArity, FacetRegistry},
    filter_state::FilterState,
    sort_spec::SortKey,
};

/// Where a dependent facet stands relative to its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyState {
    Unconstrained,
    Constrained { parent_values: BTreeSet<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterStore {
    registry: Arc<FacetRegistry>,
    state: FilterState,
    revision: u64,
}

impl FilterStore {
    pub fn new(registry: Arc<FacetRegistry>) -> Self {
        Self { registry, state: FilterState::default(), revision: 0 }
    }

    /// Rebuilds a store from an untrusted state (e.g. decoded from a URL) by
    /// replaying it through the mutation API, parents before dependents.
    /// Anything the API would refuse is dropped.
    pub fn restore(registry: Arc<FacetRegistry>, state: &FilterState) -> Self {
        let mut store = Self::new(registry);
        let mut facet_ids: Vec<String> = store.registry.facets().iter().map(|f| f.id.clone()).collect();
        facet_ids.sort_by_key(|id| store.depth(id));
        for facet_id in facet_ids {
            let Some(values) = state.selected(&facet_id) else { continue };
            for value in values {
                let already = store.state.is_selected(&facet_id, value);
                if !already {
                    store.select_facet_value(&facet_id, value);
                }
            }
        }
        for unknown in state.facet_filters.keys().filter(|id| store.registry.get(id).is_none()) {
            debug!("dropping selection for unknown facet {unknown:?}");
        }
        store.set_search_query(state.query_string.clone());
        store.set_sort(state.sort);
        store
    }

    pub fn registry(&self) -> &FacetRegistry {
        &self.registry
    }

    /// Detached copy of the current state.
    pub fn state(&self) -> FilterState {
        self.state.clone()
    }

    pub(crate) fn state_ref(&self) -> &FilterState {
        &self.state
    }

    /// Bumped on every mutation that changed the state.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn domain_of(&self, facet_id: &str) -> Vec<String> {
        self.registry.domain_of(facet_id, &self.state)
    }

    pub fn is_selected(&self, facet_id: &str, value: &str) -> bool {
        self.state.is_selected(facet_id, value)
    }

    pub fn dependency_state(&self, facet_id: &str) -> Option<DependencyState> {
        let parent = self.registry.parent_of(facet_id)?;
        if self.state.selected(facet_id).is_none() {
            return Some(DependencyState::Unconstrained);
        }
        let parent_values = self.state.selected(parent).cloned().unwrap_or_default();
        Some(DependencyState::Constrained { parent_values })
    }

    /// Single facets get `{value}`; multi facets toggle `value`. Selecting on a
    /// parent facet clears all of its dependents in the same step. Values
    /// outside the facet's current domain are ignored. Returns whether the
    /// state changed.
    pub fn select_facet_value(&mut self, facet_id: &str, value: &str) -> bool {
        let Some(arity) = self.registry.get(facet_id).map(|f| f.arity) else {
            debug!("ignoring selection on unknown facet {facet_id:?}");
            return false;
        };
        if !self.registry.is_in_domain(facet_id, value, &self.state) {
            debug!("ignoring {value:?} for facet {facet_id:?}: not in current domain");
            return false;
        }

        let previous = self.state.selected(facet_id).cloned().unwrap_or_default();
        let next = match arity {
            FacetArity::Single => BTreeSet::from([value.to_string()]),
            FacetArity::Multi => {
                let mut next = previous.clone();
                if !next.remove(value) {
                    next.insert(value.to_string());
                }
                next
            }
        };
        if next == previous {
            return false;
        }

        self.write_selection(facet_id, next);
        self.clear_dependents(facet_id);
        self.bump();
        true
    }

    /// Removes one value from a facet's selection, clearing dependents if the
    /// facet is a parent.
    pub fn deselect_facet_value(&mut self, facet_id: &str, value: &str) -> bool {
        let Some(mut values) = self.state.selected(facet_id).cloned() else {
            return false;
        };
        if !values.remove(value) {
            return false;
        }
        self.write_selection(facet_id, values);
        self.clear_dependents(facet_id);
        self.bump();
        true
    }

    /// Drops every selected value of one facet (and of its dependents).
    pub fn clear_facet(&mut self, facet_id: &str) -> bool {
        if self.state.selected(facet_id).is_none() {
            return false;
        }
        self.write_selection(facet_id, BTreeSet::new());
        self.clear_dependents(facet_id);
        self.bump();
        true
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.state.query_string == text {
            return false;
        }
        self.state.query_string = text;
        self.bump();
        true
    }

    pub fn set_sort(&mut self, sort: SortKey) -> bool {
        if self.state.sort == sort {
            return false;
        }
        self.state.sort = sort;
        self.bump();
        true
    }

    /// String form used by select controls. Unknown keys keep the current sort.
    pub fn set_sort_key(&mut self, sort_key: &str) -> bool {
        match sort_key.parse::<SortKey>() {
            Ok(sort) => self.set_sort(sort),
            Err(e) => {
                debug!("{e}; keeping {}", self.state.sort);
                false
            }
        }
    }

    /// Back to the default state. Calling it again changes nothing.
    pub fn reset_all(&mut self) -> bool {
        if self.state == FilterState::default() {
            return false;
        }
        self.state = FilterState::default();
        self.bump();
        true
    }

    fn write_selection(&mut self, facet_id: &str, values: BTreeSet<String>) {
        if values.is_empty() {
            self.state.facet_filters.remove(facet_id);
        } else {
            self.state.facet_filters.insert(facet_id.to_string(), values);
        }
    }

    fn clear_dependents(&mut self, facet_id: &str) {
        let registry = self.registry.clone();
        for dependent in registry.dependents_of(facet_id) {
            if self.state.facet_filters.remove(dependent).is_some() {
                debug!("cleared {dependent:?} after {facet_id:?} changed");
            }
        }
    }

    fn depth(&self, facet_id: &str) -> usize {
        let mut depth = 0;
        let mut current = self.registry.parent_of(facet_id);
        while let Some(parent) = current {
            depth += 1;
            if depth > self.registry.facets().len() {
                break;
            }
            current = self.registry.parent_of(parent);
        }
        depth
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}
