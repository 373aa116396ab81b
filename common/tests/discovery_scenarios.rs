use std::{collections::BTreeSet, sync::Arc};

use common::{
    catalog_const::*,
    course::{Course, CourseId, DeliveryType},
    course_discovery::CourseDiscovery,
    facet_registry::FacetRegistry,
    filter_evaluator::evaluate,
    filter_state::FilterState,
    filter_store::FilterStore,
};

fn course(id: &str, title: &str, teacher: &str, board: &str, level: &str, subjects: &[&str]) -> Course {
    Course {
        id: id.into(),
        title: title.to_string(),
        teacher: teacher.to_string(),
        board: board.to_string(),
        level: level.to_string(),
        subjects: subjects.iter().map(|s| s.to_string()).collect(),
        delivery: DeliveryType::Live,
        rating: 4.5,
        price: 1999,
        original_price: 2999,
        tags: BTreeSet::new(),
        launch_date: "2025-04-01".to_string(),
    }
}

fn three_course_catalog() -> Vec<Course> {
    vec![
        course("1", "Class 10 Science Masterclass", "Anita Verma", BOARD_CBSE, "Class 10", &["Science"]),
        course("2", "Class 12 Commerce Complete", "Rahul Mehta", BOARD_CBSE, "Class 12", &["Commerce"]),
        course("3", "JEE Starter Science Kit", "Vikram Shah", BOARD_FOUNDATION, "JEE Starter", &["Science"]),
    ]
}

fn registry() -> Arc<FacetRegistry> {
    Arc::new(FacetRegistry::course_catalog())
}

#[test]
fn board_and_subject_pick_the_first_course() {
    let mut store = FilterStore::new(registry());
    store.select_facet_value(FACET_BOARD, BOARD_CBSE);
    store.select_facet_value(FACET_SUBJECT, "Science");
    assert_eq!(store.state().selected(FACET_CLASS), None);

    let result = evaluate(&three_course_catalog(), store.registry(), &store.state());
    assert_eq!(result.course_ids(), vec![CourseId::from("1")]);
}

#[test]
fn uppercase_query_matches_case_insensitively() {
    let mut discovery = CourseDiscovery::new(three_course_catalog(), registry());
    discovery.set_search_query("COMMERCE");
    assert_eq!(discovery.results().course_ids(), vec![CourseId::from("2")]);
    assert_eq!(discovery.state().query_string, "COMMERCE");
}

#[test]
fn switching_board_clears_class_and_narrows_domain() {
    let mut store = FilterStore::new(registry());
    store.select_facet_value(FACET_BOARD, BOARD_CBSE);
    assert!(store.select_facet_value(FACET_CLASS, "Class 12"));

    store.select_facet_value(FACET_BOARD, BOARD_FOUNDATION);
    assert_eq!(store.state().selected(FACET_CLASS), None);
    let domain = store.domain_of(FACET_CLASS);
    assert_eq!(domain, FOUNDATION_LEVELS.to_vec());
    assert!(!domain.contains(&"Class 12".to_string()));
    assert!(!domain.contains(&"Class 10".to_string()));
}

#[test]
fn contradictory_board_and_class_cannot_be_built() {
    let mut store = FilterStore::new(registry());
    store.select_facet_value(FACET_BOARD, BOARD_CBSE);
    store.select_facet_value(FACET_CLASS, "Class 10");
    store.select_facet_value(FACET_BOARD, BOARD_GRADUATION);
    // the class was dropped by the board change, and cannot be picked again
    assert!(!store.select_facet_value(FACET_CLASS, "Class 10"));
    let state = store.state();
    assert!(state.is_selected(FACET_BOARD, BOARD_GRADUATION));
    assert_eq!(state.selected(FACET_CLASS), None);

    // the evaluator alone would happily return nothing for such a state
    let mut forged = state.clone();
    forged.facet_filters.insert(FACET_CLASS.to_string(), BTreeSet::from(["Class 10".to_string()]));
    assert!(evaluate(&three_course_catalog(), store.registry(), &forged).is_empty());
}

#[test]
fn evaluation_is_deterministic_and_leaves_catalog_alone() {
    let catalog = three_course_catalog();
    let before = catalog.clone();
    let mut state = FilterState::from_query("science");
    state.sort = common::sort_spec::SortKey::PriceDesc;
    let first = evaluate(&catalog, &registry(), &state);
    let second = evaluate(&catalog, &registry(), &state);
    assert_eq!(first, second);
    assert_eq!(catalog, before);
}

#[test]
fn reset_recovers_from_an_empty_result() {
    let mut discovery = CourseDiscovery::new(three_course_catalog(), registry());
    discovery.select_facet_value(FACET_BOARD, BOARD_FOUNDATION);
    discovery.select_facet_value(FACET_SUBJECT, "Commerce");
    assert!(discovery.results().is_empty());

    discovery.reset_all();
    let once = discovery.state();
    discovery.reset_all();
    assert_eq!(discovery.state(), once);
    assert_eq!(once, FilterState::default());
    assert_eq!(discovery.results().len(), 3);
}
