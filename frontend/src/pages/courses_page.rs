use std::sync::Arc;

use dioxus::prelude::*;

use common::{course::Course, course_discovery::CourseDiscovery, facet_registry::FacetRegistry, filter_state::FilterState};
use crate::{
    api::catalog_api::fetch_catalog,
    components::{catalog_components::{active_filter_chips::ActiveFilterChips, board_tabs::{BoardTabs, ClassTabs}, course_grid::CourseGrid, filter_drawer::{FilterDrawer, FilterDrawerToggle}, filter_sidebar::FilterSidebar, search_box::SearchBox, sort_selector::SortSelector}, error_boundary::ServerErrorNotice, suspend_boundary::SuspendWrapper},
    data_definitions::{catalog_context::CatalogContext, url_param::UrlParam}, routes::Route
};


fn title_ellipsis(title: String) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title
    }
}

/// Course browsing page
#[component]
pub fn CoursesPage(state: UrlParam<FilterState>) -> Element {
    let title = match state.0.query_string.trim() {
        "" => "Courses".to_string(),
        q => format!("Courses: {}", title_ellipsis(q.to_string())),
    };
    rsx! {
        Title { "{title}" }
        SuspendWrapper {
            CoursesPageRootComponent { url_state: state.0.clone() }
        }
    }
}

#[component]
fn CoursesPageRootComponent(url_state: ReadSignal<FilterState>) -> Element {
    let catalog = use_resource(fetch_catalog).suspend()?.cloned();
    let catalog = match catalog {
        Err(e) => return rsx! { ServerErrorNotice { what: "the course catalog", error_txt: format!("{e:#}") } },
        Ok(c) => c,
    };
    rsx! {
        CatalogBrowser { catalog, url_state }
    }
}

#[component]
fn CatalogBrowser(catalog: ReadSignal<Vec<Course>>, url_state: ReadSignal<FilterState>) -> Element {
    let registry = use_hook(|| Arc::new(FacetRegistry::course_catalog()));
    let registry_for_init = registry.clone();
    let mut discovery = use_signal(move || CourseDiscovery::restore(catalog.peek().clone(), registry_for_init, &url_state.peek()));

    // back/forward navigation and hero searches arrive through the url
    use_effect(move || {
        let from_url = url_state.read().clone();
        if discovery.peek().state() != from_url {
            let restored = CourseDiscovery::restore(catalog.peek().clone(), registry.clone(), &from_url);
            discovery.set(restored);
        }
    });
    // keep the url in sync so the current screen can be shared or reloaded
    use_effect(move || {
        let state = discovery.read().state();
        if state != *url_state.peek() {
            navigator().replace(Route::courses_page_from_state(state));
        }
    });

    let results = use_memo(move || discovery.read().results().clone());
    let facet_counts = use_memo(move || discovery.read().facet_counts());
    let drawer_open = use_signal(|| false);
    use_context_provider(|| CatalogContext { discovery, results, facet_counts, drawer_open });

    rsx! {
        div {
            id: "x-courses-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            div {
                id: "x-courses-top-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                    padding: 12px 16px;
                    width: 100%;
                    box-sizing: border-box;
                ",
                div {
                    style: "display: flex; flex-direction: row; align-items: center; gap: 12px; flex-wrap: wrap;",
                    SearchBox {}
                    FilterDrawerToggle {}
                }
                BoardTabs {}
                ClassTabs {}
            }

            div {
                id: "x-courses-bottom-space",
                style: r#"
                    width: 100%;
                    display: flex;
                    flex-direction: row;
                    flex-grow: 1;
                    min-height: 0;
                "#,
                div {
                    id: "x-courses-left-panel",
                    class: "x-filter-sidebar",
                    style: "
                        height: 100%;
                        background-color: #ECEEF2;
                        width: 300px;
                        flex-shrink: 0;
                        overflow-y: auto;
                    ",
                    FilterSidebar {}
                }
                div {
                    id: "x-courses-right-panel",
                    style: "
                        height: 100%;
                        flex-grow: 1;
                        min-width: 0;
                        display: flex;
                        flex-direction: column;
                        padding: 7px;
                        box-sizing: border-box;
                    ",
                    ResultListHeader {}
                    ActiveFilterChips {}
                    div {
                        style: "flex-grow: 1; min-height: 0; overflow-y: auto;",
                        CourseGrid {}
                    }
                }
            }
            FilterDrawer {}
        }
    }
}

#[component]
fn ResultListHeader() -> Element {
    let ctx = use_context::<CatalogContext>();
    let summary = use_memo(move || {
        let results = ctx.results.read();
        format!("{} of {}", results.summary(), results.catalog_size)
    });
    rsx! {
        div {
            id: "x-courses-result-header",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                padding: 7px;
                height: 56px;
                box-sizing: border-box;
            ",
            h1 {
                style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112);  border-bottom: 1px solid rgb(75, 87, 112);",
                "{summary}"
            }
            div { style: "flex-grow: 1;" }
            SortSelector {}
        }
    }
}
