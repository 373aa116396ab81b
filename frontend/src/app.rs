//! Root component: document head and the router.

use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "Course Finder" }
        document::Meta { name: "description", content: "Live and recorded courses for every board and class." }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            Router::<Route> {}
        }
    }
}
