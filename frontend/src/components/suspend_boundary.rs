//! Loading placeholder for pages that wait on a server function.

use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

const PLACEHOLDER_CARDS: usize = 6;

#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_: SuspenseContext| rsx! { CourseGridPlaceholder {} },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

/// Grey card outlines in the shape of the course grid.
#[component]
fn CourseGridPlaceholder() -> Element {
    rsx! {
        div {
            id: "x-course-grid-placeholder",
            style: "
                width: 100%;
                height: 100%;
                box-sizing: border-box;
                padding: 24px;
                display: flex;
                flex-direction: column;
                gap: 16px;
            ",
            div { style: "font-size: 18px; color: rgba(0, 0, 0, 0.5);", "Loading courses..." }
            div {
                style: "
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                    gap: 14px;
                ",
                for i in 0..PLACEHOLDER_CARDS {
                    div {
                        key: "{i}",
                        class: "x-card-placeholder",
                        style: "height: 190px; border-radius: 8px; background: #E5E7EB;",
                    }
                }
            }
        }
    }
}
