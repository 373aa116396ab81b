//! Persistent filter sidebar and the facet groups it shares with the drawer.

use common::catalog_const::{FACET_BOARD, FACET_CLASS};
use common::result_set::{FacetCounts, FacetValueCount};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}};

use crate::data_definitions::catalog_context::CatalogContext;

/// Facets shown as tab bars above the grid instead of in the sidebar.
pub const TAB_FACETS: &[&str] = &[FACET_BOARD, FACET_CLASS];

#[component]
pub fn FilterSidebar() -> Element {
    let ctx = use_context::<CatalogContext>();
    let groups = use_memo(move || {
        ctx.facet_counts.read().iter().filter(|f| !TAB_FACETS.contains(&f.facet_id.as_str())).cloned().collect::<Vec<_>>()
    });
    rsx! {
        div {
            id: "x-filter-sidebar-wrapper",
            style: "display: flex; flex-direction: column; gap: 4px; padding: 12px;",
            FilterPanelHeader {}
            for group in groups() {
                FacetGroup { key: "{group.facet_id}", facet: group.clone() }
            }
        }
    }
}

#[component]
pub fn FilterPanelHeader() -> Element {
    let ctx = use_context::<CatalogContext>();
    let active_count = use_memo(move || ctx.discovery.read().state().active_filter_count());
    rsx! {
        div {
            style: "display: flex; flex-direction: row; align-items: center; padding: 4px;",
            h2 { style: "font-size: 20px; font-weight: 500; margin: 0;", "Filters" }
            div { style: "flex-grow: 1;" }
            if active_count() > 0 {
                button {
                    style: "border: none; background: none; color: blue; cursor: pointer; font-size: 15px;",
                    onclick: move |_| ctx.reset_all(),
                    "Clear all ({active_count})"
                }
            }
        }
    }
}

#[component]
pub fn FacetGroup(facet: ReadSignal<FacetCounts>) -> Element {
    let FacetCounts { facet_id, label, values } = facet.read().clone();
    if values.is_empty() {
        return rsx! {};
    }
    rsx! {
        div {
            class: "x-facet-group",
            style: "
                background: white;
                border-radius: 10px;
                padding: 8px;
                margin: 4px 0px;
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.05);
            ",
            h3 { style: "font-size: 16px; font-weight: 500; margin: 4px; color: rgb(28, 33, 45);", "{label}" }
            ul {
                style: "list-style: none; padding: 0; margin: 0;",
                for value in values {
                    li {
                        key: "{facet_id}-{value.value}",
                        FacetCheckbox { facet_id: facet_id.clone(), value: value.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn FacetCheckbox(facet_id: ReadSignal<String>, value: ReadSignal<FacetValueCount>) -> Element {
    let ctx = use_context::<CatalogContext>();
    let FacetValueCount { value: display_value, count, selected } = value.read().clone();
    let text_color = if count == 0 && !selected { "rgba(0,0,0,0.4)" } else { "rgb(0, 0, 0)" };
    rsx! {
        div {
            class: "x-facet-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                margin: 2px;
                align-items: center;
            ",
            onclick: move |_e| {
                let facet_id = facet_id.read().clone();
                let FacetValueCount { value, selected, .. } = value.read().clone();
                if selected {
                    ctx.deselect_facet_value(&facet_id, &value);
                } else {
                    ctx.select_facet_value(&facet_id, &value);
                }
            },

            if selected {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }
            div {
                style: "
                    font-size: 16px;
                    line-height: 22px;
                    color: {text_color};
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    min-width: 0;
                ",
                "{display_value}"
            }

            div { style: "flex: 1 1 auto;", }

            div {
                style: "
                    font-size: 16px;
                    line-height: 22px;
                    color: rgba(28, 33, 45, 0.7);
                    flex-shrink: 0;
                ",
                "{count}"
            }
        }
    }
}
