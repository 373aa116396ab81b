//! Removable chips for every active selection and the search query.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use crate::data_definitions::catalog_context::CatalogContext;

#[derive(Debug, Clone, PartialEq)]
struct Chip {
    facet_id: Option<String>,
    value: String,
    text: String,
}

#[component]
pub fn ActiveFilterChips() -> Element {
    let ctx = use_context::<CatalogContext>();
    let chips = use_memo(move || {
        let discovery = ctx.discovery.read();
        let state = discovery.state();
        let mut chips = Vec::new();
        if !state.has_active_filters() {
            return chips;
        }
        // registry order, so chips do not jump around when values are added
        for facet in discovery.store().registry().facets() {
            let Some(values) = state.selected(&facet.id) else { continue };
            for value in values {
                chips.push(Chip { facet_id: Some(facet.id.clone()), value: value.clone(), text: format!("{}: {}", facet.label, value) });
            }
        }
        if !state.query_string.trim().is_empty() {
            chips.push(Chip { facet_id: None, value: String::new(), text: format!("\"{}\"", state.query_string.trim()) });
        }
        chips
    });
    if chips.read().is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            id: "x-active-filter-chips",
            style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 8px; padding: 4px 7px 8px 7px; align-items: center;",
            for chip in chips() {
                FilterChip { key: "{chip.text}", chip: chip.clone() }
            }
            button {
                style: "border: none; background: none; color: blue; cursor: pointer; font-size: 14px;",
                onclick: move |_| ctx.reset_all(),
                "Clear all"
            }
        }
    }
}

#[component]
fn FilterChip(chip: ReadSignal<Chip>) -> Element {
    let ctx = use_context::<CatalogContext>();
    let text = chip.read().text.clone();
    rsx! {
        div {
            style: "
                display: flex;
                align-items: center;
                gap: 4px;
                border: 1px solid rgba(0,0,255,0.6);
                border-radius: 1000px;
                background: white;
                padding: 3px 6px 3px 12px;
                font-size: 14px;
            ",
            "{text}"
            button {
                style: "border: none; background: none; cursor: pointer; display: flex; padding: 0px;",
                title: "Remove",
                onclick: move |_| {
                    let Chip { facet_id, value, .. } = chip.read().clone();
                    match facet_id {
                        Some(facet_id) => ctx.deselect_facet_value(&facet_id, &value),
                        None => ctx.set_search_query(String::new()),
                    }
                },
                Icon { icon: MdClose, style: "width: 16px; height: 16px;" }
            }
        }
    }
}
