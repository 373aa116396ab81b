//! Facet definitions and value domains, including dependent facets whose
//! domain is resolved from a parent facet's selection.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    catalog_const::*,
    course::{CourseField, DeliveryType},
    filter_state::FilterState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacetArity {
    Single,
    Multi,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacetDomain {
    Static(Vec<String>),
    /// Valid values per selected parent value, in display order.
    DependsOn { parent: String, values_by_parent: Vec<(String, Vec<String>)> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetDefinition {
    pub id: String,
    pub label: String,
    pub arity: FacetArity,
    pub field: CourseField,
    pub domain: FacetDomain,
}

impl FacetDefinition {
    pub fn new_static(id: &str, label: &str, arity: FacetArity, field: CourseField, values: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            arity,
            field,
            domain: FacetDomain::Static(values.iter().map(|v| v.to_string()).collect()),
        }
    }

    pub fn new_dependent(id: &str, label: &str, arity: FacetArity, field: CourseField, parent: &str, values_by_parent: &[(&str, &[&str])]) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            arity,
            field,
            domain: FacetDomain::DependsOn {
                parent: parent.to_string(),
                values_by_parent: values_by_parent
                    .iter()
                    .map(|(p, values)| (p.to_string(), values.iter().map(|v| v.to_string()).collect()))
                    .collect(),
            },
        }
    }

    pub fn parent(&self) -> Option<&str> {
        match &self.domain {
            FacetDomain::Static(_) => None,
            FacetDomain::DependsOn { parent, .. } => Some(parent.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("facet {0:?} is declared more than once")]
    DuplicateFacet(String),
    #[error("facet {facet:?} depends on unknown facet {parent:?}")]
    UnknownParent { facet: String, parent: String },
    #[error("facet {0:?} is part of a dependency cycle")]
    DependencyCycle(String),
}

/// Read-only after construction. Facets are kept in declaration order, which
/// is also their display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetRegistry {
    facets: Vec<FacetDefinition>,
}

impl FacetRegistry {
    pub fn new(facets: Vec<FacetDefinition>) -> Result<Self, RegistryError> {
        let mut seen = BTreeSet::new();
        for facet in &facets {
            if !seen.insert(facet.id.as_str()) {
                return Err(RegistryError::DuplicateFacet(facet.id.clone()));
            }
        }
        for facet in &facets {
            if let Some(parent) = facet.parent() {
                if !seen.contains(parent) {
                    return Err(RegistryError::UnknownParent { facet: facet.id.clone(), parent: parent.to_string() });
                }
            }
        }
        let registry = Self { facets };
        for facet in &registry.facets {
            // walking up more parents than there are facets means we are going round in circles
            let mut current = facet.parent();
            let mut steps = 0;
            while let Some(parent) = current {
                steps += 1;
                if parent == facet.id || steps > registry.facets.len() {
                    return Err(RegistryError::DependencyCycle(facet.id.clone()));
                }
                current = registry.get(parent).and_then(|p| p.parent());
            }
        }
        Ok(registry)
    }

    /// Board, class, subject, delivery, price band and tag facets.
    pub fn course_catalog() -> Self {
        Self { facets: course_catalog_facets() }
    }

    pub fn facets(&self) -> &[FacetDefinition] {
        &self.facets
    }

    pub fn get(&self, facet_id: &str) -> Option<&FacetDefinition> {
        self.facets.iter().find(|f| f.id == facet_id)
    }

    pub fn parent_of(&self, facet_id: &str) -> Option<&str> {
        self.get(facet_id).and_then(|f| f.parent())
    }

    /// Every facet whose domain depends on `facet_id`, directly or through
    /// another dependent, in registry order.
    pub fn dependents_of(&self, facet_id: &str) -> Vec<&str> {
        let mut dependents: Vec<&str> = Vec::new();
        let mut frontier = vec![facet_id];
        while let Some(current) = frontier.pop() {
            for facet in &self.facets {
                if facet.parent() == Some(current) && !dependents.contains(&facet.id.as_str()) {
                    dependents.push(facet.id.as_str());
                    frontier.push(facet.id.as_str());
                }
            }
        }
        dependents.sort_by_key(|id| self.facets.iter().position(|f| f.id == *id));
        dependents
    }

    /// Valid values for a facet under the given state. Static facets ignore the
    /// state; dependent facets only look at their parent's selection. Unknown
    /// facets and unselected or unknown parent values give an empty domain.
    pub fn domain_of(&self, facet_id: &str, state: &FilterState) -> Vec<String> {
        let Some(facet) = self.get(facet_id) else {
            return Vec::new();
        };
        match &facet.domain {
            FacetDomain::Static(values) => values.clone(),
            FacetDomain::DependsOn { parent, values_by_parent } => {
                let Some(parent_selection) = state.selected(parent) else {
                    return Vec::new();
                };
                let mut domain: Vec<String> = Vec::new();
                for (parent_value, values) in values_by_parent {
                    if !parent_selection.contains(parent_value) {
                        continue;
                    }
                    for value in values {
                        if !domain.contains(value) {
                            domain.push(value.clone());
                        }
                    }
                }
                domain
            }
        }
    }

    pub fn is_in_domain(&self, facet_id: &str, value: &str, state: &FilterState) -> bool {
        self.domain_of(facet_id, state).iter().any(|v| v == value)
    }
}

impl Default for FacetRegistry {
    fn default() -> Self {
        Self::course_catalog()
    }
}

fn course_catalog_facets() -> Vec<FacetDefinition> {
    let delivery_labels = DeliveryType::ALL.map(|d| d.label());
    vec![
        FacetDefinition::new_static(FACET_BOARD, "Board", FacetArity::Single, CourseField::Board, BOARDS),
        FacetDefinition::new_dependent(
            FACET_CLASS,
            "Class",
            FacetArity::Single,
            CourseField::Level,
            FACET_BOARD,
            &[
                (BOARD_CBSE, SCHOOL_CLASSES),
                (BOARD_ICSE, SCHOOL_CLASSES),
                (BOARD_STATE, SCHOOL_CLASSES),
                (BOARD_FOUNDATION, FOUNDATION_LEVELS),
                (BOARD_GRADUATION, GRADUATION_LEVELS),
            ],
        ),
        FacetDefinition::new_static(FACET_SUBJECT, "Subject", FacetArity::Multi, CourseField::Subjects, SUBJECTS),
        FacetDefinition::new_static(FACET_DELIVERY, "Delivery", FacetArity::Multi, CourseField::Delivery, &delivery_labels),
        FacetDefinition::new_static(
            FACET_PRICE_BAND,
            "Price",
            FacetArity::Multi,
            CourseField::PriceBand,
            &[PRICE_BAND_FREE, PRICE_BAND_UNDER_1000, PRICE_BAND_1000_TO_4999, PRICE_BAND_5000_PLUS],
        ),
        FacetDefinition::new_static(FACET_TAG, "Tags", FacetArity::Multi, CourseField::Tags, TAGS),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_board(board: &str) -> FilterState {
        let mut state = FilterState::default();
        state.facet_filters.insert(FACET_BOARD.to_string(), BTreeSet::from([board.to_string()]));
        state
    }

    #[test]
    fn course_catalog_registry_is_valid() {
        assert!(FacetRegistry::new(course_catalog_facets()).is_ok());
    }

    #[test]
    fn dependent_domain_follows_parent_selection() {
        let registry = FacetRegistry::course_catalog();
        assert_eq!(registry.domain_of(FACET_CLASS, &state_with_board(BOARD_FOUNDATION)), FOUNDATION_LEVELS.to_vec());
        assert_eq!(registry.domain_of(FACET_CLASS, &state_with_board(BOARD_CBSE)), SCHOOL_CLASSES.to_vec());
    }

    #[test]
    fn dependent_domain_is_empty_without_a_known_parent_value() {
        let registry = FacetRegistry::course_catalog();
        assert!(registry.domain_of(FACET_CLASS, &FilterState::default()).is_empty());
        assert!(registry.domain_of(FACET_CLASS, &state_with_board("IB")).is_empty());
        assert!(registry.domain_of("no_such_facet", &FilterState::default()).is_empty());
    }

    #[test]
    fn static_domain_ignores_state() {
        let registry = FacetRegistry::course_catalog();
        assert_eq!(registry.domain_of(FACET_SUBJECT, &state_with_board(BOARD_GRADUATION)), SUBJECTS.to_vec());
    }

    #[test]
    fn dependents_are_collected_transitively() {
        let registry = FacetRegistry::new(vec![
            FacetDefinition::new_static("a", "A", FacetArity::Single, CourseField::Board, &["x"]),
            FacetDefinition::new_dependent("b", "B", FacetArity::Single, CourseField::Level, "a", &[("x", &["y"])]),
            FacetDefinition::new_dependent("c", "C", FacetArity::Multi, CourseField::Tags, "b", &[("y", &["z"])]),
        ])
        .unwrap();
        assert_eq!(registry.dependents_of("a"), vec!["b", "c"]);
        assert_eq!(registry.dependents_of("b"), vec!["c"]);
        assert!(registry.dependents_of("c").is_empty());
    }

    #[test]
    fn rejects_broken_configurations() {
        let dup = FacetRegistry::new(vec![
            FacetDefinition::new_static("a", "A", FacetArity::Single, CourseField::Board, &[]),
            FacetDefinition::new_static("a", "A", FacetArity::Single, CourseField::Board, &[]),
        ]);
        assert_eq!(dup, Err(RegistryError::DuplicateFacet("a".to_string())));

        let orphan = FacetRegistry::new(vec![FacetDefinition::new_dependent("b", "B", FacetArity::Single, CourseField::Level, "a", &[])]);
        assert_eq!(orphan, Err(RegistryError::UnknownParent { facet: "b".to_string(), parent: "a".to_string() }));

        let cycle = FacetRegistry::new(vec![
            FacetDefinition::new_dependent("a", "A", FacetArity::Single, CourseField::Board, "b", &[]),
            FacetDefinition::new_dependent("b", "B", FacetArity::Single, CourseField::Level, "a", &[]),
        ]);
        assert!(matches!(cycle, Err(RegistryError::DependencyCycle(_))));
    }
}
