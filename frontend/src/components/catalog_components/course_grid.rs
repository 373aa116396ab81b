use dioxus::prelude::*;

use crate::{components::catalog_components::{course_card::CourseCard, empty_state::EmptyState}, data_definitions::catalog_context::CatalogContext};

#[component]
pub fn CourseGrid() -> Element {
    let ctx = use_context::<CatalogContext>();
    let results = ctx.results.read();
    let query_string = results.state.query_string.clone();

    if results.is_empty() {
        return rsx! {
            EmptyState {
                catalog_is_empty: results.catalog_size == 0,
                offer_reset: results.offers_reset(),
                on_reset: move |_| ctx.reset_all(),
            }
        };
    }

    rsx! {
        ul {
            id: "x-course-grid",
            style: "
                list-style: none;
                margin: 0px;
                padding: 0px;
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                gap: 14px;
            ",
            for course in results.courses.iter().cloned() {
                li {
                    key: "{course.id}",
                    CourseCard { course, query_string: query_string.clone() }
                }
            }
        }
    }
}
