//! Pure evaluation of a [`FilterState`] against the catalog.

use crate::{
    course::Course,
    facet_registry::FacetRegistry,
    filter_state::FilterState,
    result_set::{FacetCounts, FacetValueCount, ResultSet},
    text_highlight::fold_case,
};

/// Courses passing every active facet (any selected value within a facet) and
/// the text query, ordered by the active sort key. Ties keep catalog order.
/// The catalog itself is left untouched.
pub fn evaluate(catalog: &[Course], registry: &FacetRegistry, state: &FilterState) -> ResultSet {
    let query = state.normalized_query();
    let mut survivors: Vec<&Course> = catalog
        .iter()
        .filter(|course| matches_facets(course, registry, state) && matches_query(course, query.as_deref()))
        .collect();
    // stable, so equal keys stay in catalog order
    survivors.sort_by(|a, b| state.sort.compare(a, b));

    ResultSet {
        state: state.clone(),
        courses: survivors.into_iter().cloned().collect(),
        catalog_size: catalog.len(),
    }
}

fn matches_facets(course: &Course, registry: &FacetRegistry, state: &FilterState) -> bool {
    registry.facets().iter().all(|facet| {
        let Some(selected) = state.selected(&facet.id) else {
            return true;
        };
        course.field_values(facet.field).into_iter().any(|value| selected.contains(value))
    })
}

/// `query` must already be trimmed and passed through [`fold_case`].
fn matches_query(course: &Course, query: Option<&str>) -> bool {
    let Some(query) = query else {
        return true;
    };
    fold_case(&course.title).contains(query) || fold_case(&course.teacher).contains(query)
}

/// Per-value counts for one facet, computed as if this facet (and anything
/// depending on it) had nothing selected, so every option shows what picking
/// it would yield.
pub fn facet_counts(catalog: &[Course], registry: &FacetRegistry, state: &FilterState, facet_id: &str) -> FacetCounts {
    let label = registry.get(facet_id).map(|f| f.label.clone()).unwrap_or_default();
    let domain = registry.domain_of(facet_id, state);
    let Some(facet) = registry.get(facet_id) else {
        return FacetCounts { facet_id: facet_id.to_string(), label, values: Vec::new() };
    };

    let mut relaxed = state.clone();
    relaxed.facet_filters.remove(facet_id);
    for dependent in registry.dependents_of(facet_id) {
        relaxed.facet_filters.remove(dependent);
    }
    let query = relaxed.normalized_query();
    let mut counts = vec![0_u64; domain.len()];
    for course in catalog {
        if !matches_facets(course, registry, &relaxed) || !matches_query(course, query.as_deref()) {
            continue;
        }
        for value in course.field_values(facet.field) {
            if let Some(i) = domain.iter().position(|d| d == value) {
                counts[i] += 1;
            }
        }
    }

    let values = domain
        .into_iter()
        .zip(counts)
        .map(|(value, count)| FacetValueCount { selected: state.is_selected(facet_id, &value), value, count })
        .collect();
    FacetCounts { facet_id: facet_id.to_string(), label, values }
}

pub fn all_facet_counts(catalog: &[Course], registry: &FacetRegistry, state: &FilterState) -> Vec<FacetCounts> {
    registry.facets().iter().map(|facet| facet_counts(catalog, registry, state, &facet.id)).collect()
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeSet, sync::Arc};

    use super::*;
    use crate::{catalog_const::*, course::DeliveryType, filter_store::FilterStore, sort_spec::SortKey};

    fn course(id: &str, board: &str, level: &str, subjects: &[&str], rating: f32, price: u32, launch_date: &str) -> Course {
        Course {
            id: id.into(),
            title: format!("{level} {}", subjects.join(" & ")),
            teacher: format!("Teacher {id}"),
            board: board.to_string(),
            level: level.to_string(),
            subjects: subjects.iter().map(|s| s.to_string()).collect(),
            delivery: DeliveryType::Live,
            rating,
            price,
            original_price: price,
            tags: BTreeSet::new(),
            launch_date: launch_date.to_string(),
        }
    }

    fn catalog() -> Vec<Course> {
        vec![
            course("a", BOARD_CBSE, "Class 10", &["Maths", "Science"], 4.5, 2999, "2025-03-01"),
            course("b", BOARD_CBSE, "Class 12", &["Commerce"], 4.8, 999, "2025-05-01"),
            course("c", BOARD_ICSE, "Class 10", &["Maths"], 4.5, 4999, "2024-12-01"),
            course("d", BOARD_FOUNDATION, "JEE Starter", &["Physics"], 4.1, 0, "2025-05-01"),
        ]
    }

    fn select(state: &mut FilterState, facet: &str, values: &[&str]) {
        state.facet_filters.insert(facet.to_string(), values.iter().map(|v| v.to_string()).collect());
    }

    fn ids(result: &ResultSet) -> Vec<String> {
        result.courses.iter().map(|c| c.id.0.clone()).collect()
    }

    #[test]
    fn or_within_facet_and_across_facets() {
        let registry = FacetRegistry::course_catalog();
        let catalog = catalog();
        for subjects in [&["Maths"][..], &["Science"], &["Maths", "Science"]] {
            let mut state = FilterState::default();
            select(&mut state, FACET_SUBJECT, subjects);
            assert!(ids(&evaluate(&catalog, &registry, &state)).contains(&"a".to_string()));
        }

        let mut state = FilterState::default();
        select(&mut state, FACET_SUBJECT, &["Commerce"]);
        assert_eq!(ids(&evaluate(&catalog, &registry, &state)), vec!["b"]);

        select(&mut state, FACET_SUBJECT, &["Maths"]);
        select(&mut state, FACET_BOARD, &[BOARD_ICSE]);
        assert_eq!(ids(&evaluate(&catalog, &registry, &state)), vec!["c"]);
    }

    #[test]
    fn selected_class_always_filters() {
        let registry = FacetRegistry::course_catalog();
        let mut state = FilterState::default();
        select(&mut state, FACET_CLASS, &["Class 10"]);
        assert_eq!(ids(&evaluate(&catalog(), &registry, &state)), vec!["a", "c"]);
    }

    #[test]
    fn sorts_are_stable_on_ties() {
        let registry = FacetRegistry::course_catalog();
        let catalog = catalog();
        let mut state = FilterState::default();

        state.sort = SortKey::RatingDesc;
        assert_eq!(ids(&evaluate(&catalog, &registry, &state)), vec!["b", "a", "c", "d"]);
        state.sort = SortKey::PriceAsc;
        assert_eq!(ids(&evaluate(&catalog, &registry, &state)), vec!["d", "b", "a", "c"]);
        state.sort = SortKey::PriceDesc;
        assert_eq!(ids(&evaluate(&catalog, &registry, &state)), vec!["c", "a", "b", "d"]);
        state.sort = SortKey::Newest;
        assert_eq!(ids(&evaluate(&catalog, &registry, &state)), vec!["b", "d", "a", "c"]);
        state.sort = SortKey::Featured;
        assert_eq!(ids(&evaluate(&catalog, &registry, &state)), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn query_matches_teacher_name() {
        let registry = FacetRegistry::course_catalog();
        let state = FilterState::from_query("TEACHER d");
        assert_eq!(ids(&evaluate(&catalog(), &registry, &state)), vec!["d"]);
    }

    #[test]
    fn empty_catalog_and_empty_result_are_valid() {
        let registry = FacetRegistry::course_catalog();
        let result = evaluate(&[], &registry, &FilterState::default());
        assert!(result.is_empty());
        assert_eq!(result.catalog_size, 0);

        let result = evaluate(&catalog(), &registry, &FilterState::from_query("astronomy"));
        assert!(result.is_empty());
        assert_eq!(result.catalog_size, 4);
        assert_eq!(result.summary(), "0 courses found");
    }

    #[test]
    fn facet_counts_ignore_own_selection() {
        let registry = FacetRegistry::course_catalog();
        let catalog = catalog();
        let mut state = FilterState::default();
        select(&mut state, FACET_BOARD, &[BOARD_CBSE]);
        select(&mut state, FACET_SUBJECT, &["Maths"]);

        let boards = facet_counts(&catalog, &registry, &state, FACET_BOARD);
        let cbse = boards.values.iter().find(|v| v.value == BOARD_CBSE).unwrap();
        let icse = boards.values.iter().find(|v| v.value == BOARD_ICSE).unwrap();
        assert_eq!((cbse.count, cbse.selected), (1, true));
        assert_eq!((icse.count, icse.selected), (1, false));
        assert_eq!(boards.values.len(), BOARDS.len());

        let subjects = facet_counts(&catalog, &registry, &state, FACET_SUBJECT);
        let commerce = subjects.values.iter().find(|v| v.value == "Commerce").unwrap();
        assert_eq!(commerce.count, 1);

        let classes = facet_counts(&catalog, &registry, &state, FACET_CLASS);
        assert_eq!(classes.values.len(), SCHOOL_CLASSES.len());
        let class_10 = classes.values.iter().find(|v| v.value == "Class 10").unwrap();
        assert_eq!(class_10.count, 1);
    }

    #[test]
    fn parent_counts_ignore_dependent_selection() {
        let registry = Arc::new(FacetRegistry::course_catalog());
        let catalog = vec![
            course("a", BOARD_CBSE, "Class 10", &["Maths"], 4.0, 999, "2025-01-01"),
            course("b", BOARD_CBSE, "Class 12", &["Maths"], 4.0, 999, "2025-01-01"),
            course("c", BOARD_ICSE, "Class 12", &["Maths"], 4.0, 999, "2025-01-01"),
        ];
        let mut store = FilterStore::new(registry.clone());
        store.select_facet_value(FACET_BOARD, BOARD_CBSE);
        store.select_facet_value(FACET_CLASS, "Class 10");
        let state = store.state();
        assert_eq!(ids(&evaluate(&catalog, &registry, &state)), vec!["a"]);

        let boards = facet_counts(&catalog, &registry, &state, FACET_BOARD);
        let board_counts: Vec<(&str, u64)> = boards.values.iter().map(|v| (v.value.as_str(), v.count)).collect();
        assert_eq!(&board_counts[..3], &[(BOARD_CBSE, 2), (BOARD_ICSE, 1), (BOARD_STATE, 0)]);

        let classes = facet_counts(&catalog, &registry, &state, FACET_CLASS);
        let class_count = |level: &str| classes.values.iter().find(|v| v.value == level).map(|v| (v.count, v.selected));
        assert_eq!(class_count("Class 10"), Some((1, true)));
        assert_eq!(class_count("Class 12"), Some((1, false)));
    }

    #[test]
    fn query_folding_matches_multi_char_lowercase() {
        let registry = FacetRegistry::course_catalog();
        let mut catalog = catalog();
        catalog[2].title = "İSTANBUL Heritage Walk".to_string();
        let state = FilterState::from_query("İstanbul");
        assert_eq!(ids(&evaluate(&catalog, &registry, &state)), vec!["c"]);
    }

    #[test]
    fn unknown_facet_has_no_counts() {
        let registry = FacetRegistry::course_catalog();
        let counts = facet_counts(&catalog(), &registry, &FilterState::default(), "nope");
        assert!(counts.values.is_empty());
        assert_eq!(all_facet_counts(&catalog(), &registry, &FilterState::default()).len(), registry.facets().len());
    }
}
