//! Modal filter drawer for narrow screens. Same facet groups as the sidebar,
//! plus the board and class facets the tab bars show on wide screens.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_image_icons::MdTune, md_navigation_icons::MdClose}};

use crate::{components::catalog_components::filter_sidebar::{FacetGroup, FilterPanelHeader}, data_definitions::catalog_context::CatalogContext};

#[component]
pub fn FilterDrawerToggle() -> Element {
    let ctx = use_context::<CatalogContext>();
    let active_count = use_memo(move || ctx.discovery.read().state().active_filter_count());
    let border_color = use_memo(move || if active_count() > 0 { "rgba(0,0,255,0.9)" } else { "rgba(0,0,0,0.5)" });
    rsx! {
        button {
            class: "x-filter-drawer-toggle",
            style: "
                cursor: pointer;
                align-items: center;
                gap: 6px;
                border: 2px solid {border_color()};
                border-radius: 1000px;
                background-color: white;
                padding: 8px 14px;
                font-size: 15px;
            ",
            onclick: move |_| ctx.set_drawer_open(true),
            Icon { icon: MdTune, style: "width: 20px; height: 20px;" }
            if active_count() > 0 {
                "Filters ({active_count})"
            } else {
                "Filters"
            }
        }
    }
}

#[component]
pub fn FilterDrawer() -> Element {
    let ctx = use_context::<CatalogContext>();
    let is_open = ctx.drawer_open;
    let result_count = use_memo(move || ctx.results.read().len());
    if !is_open() {
        return rsx! {};
    }
    let groups = ctx.facet_counts.read().clone();

    rsx! {
        div {
            style: "
                position: fixed;
                top: 0px;
                left: 0px;
                z-index: 999;
                background-color: rgba(0,0,0,0.3);
                width: 100%;
                height: 100%;
            ",
            onclick: move |_| ctx.set_drawer_open(false),
        }
        div {
            id: "x-filter-drawer",
            style: "
                position: fixed;
                top: 0px;
                right: 0px;
                z-index: 1000;
                width: min(360px, 90vw);
                height: 100%;
                background-color: #ECEEF2;
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.2);
                display: flex;
                flex-direction: column;
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center; padding: 8px;",
                div { style: "flex-grow: 1;", FilterPanelHeader {} }
                button {
                    style: "border: none; background: none; cursor: pointer;",
                    title: "Close filters",
                    onclick: move |_| ctx.set_drawer_open(false),
                    Icon { icon: MdClose, style: "width: 26px; height: 26px;" }
                }
            }
            div {
                style: "flex-grow: 1; overflow-y: auto; padding: 0px 12px;",
                for group in groups {
                    FacetGroup { key: "{group.facet_id}", facet: group.clone() }
                }
            }
            button {
                style: "
                    margin: 12px;
                    padding: 12px;
                    border: none;
                    border-radius: 10px;
                    background: #4F46E5;
                    color: white;
                    font-size: 16px;
                    cursor: pointer;
                ",
                onclick: move |_| ctx.set_drawer_open(false),
                "Show {result_count} courses"
            }
        }
    }
}
