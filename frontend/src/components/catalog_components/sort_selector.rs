use common::sort_spec::SortKey;
use dioxus::prelude::*;

use crate::data_definitions::catalog_context::CatalogContext;

#[component]
pub fn SortSelector() -> Element {
    let ctx = use_context::<CatalogContext>();
    let current = use_memo(move || ctx.discovery.read().state().sort);
    rsx! {
        label {
            style: "display: flex; align-items: center; gap: 8px; font-size: 16px; color: rgb(75, 87, 112);",
            "Sort by"
            select {
                style: "
                    font-size: 16px;
                    padding: 6px 10px;
                    border-radius: 8px;
                    border: 1px solid rgba(0,0,0,0.3);
                    background: white;
                    cursor: pointer;
                ",
                onchange: move |event: Event<FormData>| ctx.set_sort_key(&event.value()),
                for key in SortKey::ALL {
                    option {
                        key: "{key}",
                        value: "{key}",
                        selected: key == current(),
                        {key.label()}
                    }
                }
            }
        }
    }
}
