//! Course discovery engine shared between frontend and backend: catalog
//! records, facet definitions, the filter store and the evaluator.

extern crate serde;


pub mod catalog_const;
pub mod course;
pub mod facet_registry;
pub mod filter_state;
pub mod filter_store;
pub mod filter_evaluator;
pub mod sort_spec;
pub mod result_set;
pub mod text_highlight;
pub mod course_discovery;
