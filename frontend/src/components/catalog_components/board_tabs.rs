//! Board and class tab bars. The class bar only appears once a board is picked,
//! since the class domain is empty until then.

use common::catalog_const::{FACET_BOARD, FACET_CLASS};
use dioxus::prelude::*;

use crate::data_definitions::catalog_context::CatalogContext;

#[component]
pub fn BoardTabs() -> Element {
    rsx! {
        FacetTabBar { facet_id: FACET_BOARD.to_string(), all_label: "All Boards".to_string() }
    }
}

#[component]
pub fn ClassTabs() -> Element {
    rsx! {
        FacetTabBar { facet_id: FACET_CLASS.to_string(), all_label: "All Classes".to_string() }
    }
}

#[component]
fn FacetTabBar(facet_id: ReadSignal<String>, all_label: ReadSignal<String>) -> Element {
    let ctx = use_context::<CatalogContext>();
    let facet = use_memo(move || ctx.facet(&facet_id.read()));
    let Some(facet) = facet() else {
        return rsx! {};
    };
    if facet.values.is_empty() {
        return rsx! {};
    }
    let nothing_selected = !facet.values.iter().any(|v| v.selected);

    rsx! {
        div {
            id: "x-tab-bar-{facet_id}",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 10px;
                overflow-x: auto;
                padding: 4px 0px;
            ",
            TabButton {
                facet_id: facet_id.read().clone(),
                value: None,
                label: all_label.read().clone(),
                count: None,
                active: nothing_selected,
            }
            for value in facet.values {
                TabButton {
                    key: "{value.value}",
                    facet_id: facet_id.read().clone(),
                    value: Some(value.value.clone()),
                    label: value.value.clone(),
                    count: Some(value.count),
                    active: value.selected,
                }
            }
        }
    }
}

#[component]
fn TabButton(
    facet_id: String,
    #[props(!optional)] value: Option<String>,
    label: String,
    #[props(!optional)] count: Option<u64>,
    active: bool,
) -> Element {
    let ctx = use_context::<CatalogContext>();
    let border_color = if active { "rgba(0,0,255,0.9)" } else { "rgba(0,0,0,0.3)" };
    let background = if active { "#E8EEFF" } else { "white" };
    let count_txt = count.map(|c| format!(" ({c})")).unwrap_or_default();
    rsx! {
        button {
            style: "
                cursor: pointer;
                border: 2px solid {border_color};
                border-radius: 1000px;
                background-color: {background};
                padding: 6px 14px;
                font-size: 15px;
                line-height: 20px;
                white-space: nowrap;
                flex-shrink: 0;
            ",
            onclick: move |_| match &value {
                Some(value) => ctx.select_facet_value(&facet_id, value),
                None => ctx.clear_facet(&facet_id),
            },
            "{label}"
            span { style: "color: rgba(0,0,0,0.5);", "{count_txt}" }
        }
    }
}
