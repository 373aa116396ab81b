use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_navigation_icons::MdClose}};

use crate::data_definitions::catalog_context::CatalogContext;


#[component]
pub fn SearchBox() -> Element {
    let ctx = use_context::<CatalogContext>();
    let query_string = use_memo(move || ctx.discovery.read().state().query_string);
    let has_query = use_memo(move || !query_string.read().trim().is_empty());
    let search_icon_color = use_memo(move || if has_query() { "blue" } else { "#6B7280" });
    let search_oninput = move |event: Event<FormData>| {
        ctx.set_search_query(event.value());
    };
    rsx! {
        div {
            id: "x-courses-search-box",
            style: "
                display:flex;
                align-items:center;
                gap: 16px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                box-sizing: border-box;
                color: #111827;
                border: 1px solid rgba(101, 101, 101, 0.8);
                width: 500px;
                max-width: 100%;
            ",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:{search_icon_color()};" }
            input {
                r#type: "text",
                placeholder: "Search courses or teachers",
                style: "
                    flex:1;
                    min-width: 0;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 18px;
                    font-weight: 400;
                    font-family: inherit;
                ",
                value: "{query_string}",
                oninput: search_oninput,
            }
            if has_query() {
                button {
                    style: "border: none; background: none; cursor: pointer; display: flex;",
                    title: "Clear search",
                    onclick: move |_| ctx.set_search_query(String::new()),
                    Icon { icon: MdClose, style: "width: 20px; height: 20px; color: #6B7280;" }
                }
            }
        }
    }
}
