//! Shown when no course survives the current filters.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSearchOff;

#[component]
pub fn EmptyState(catalog_is_empty: bool, offer_reset: bool, on_reset: Callback<()>) -> Element {
    let (headline, hint) = if catalog_is_empty {
        ("No courses available", "The catalog is empty right now. Please check back later.")
    } else {
        ("No courses match your filters", "Try removing a filter or searching for something else.")
    };
    rsx! {
        div {
            id: "x-courses-empty-state",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                height: 100%;
                width: 100%;
            ",
            div {
                style: "
                    width: 340px;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    gap: 12px;
                ",
                Icon {
                    icon: MdSearchOff,
                    style: "width: 160px; height: 160px; color:rgba(0, 0, 0, 0.5);",
                }
                div {
                    style: "font-size: 26px; font-weight: 500; color:rgb(0, 0, 0);",
                    "{headline}"
                }
                div {
                    style: "font-size: 18px; font-weight: 400; color:rgba(0, 0, 0, 0.5);",
                    "{hint}"
                }
                if offer_reset {
                    button {
                        style: "
                            margin-top: 8px;
                            padding: 10px 20px;
                            border: none;
                            border-radius: 10px;
                            background: #4F46E5;
                            color: white;
                            font-size: 16px;
                            cursor: pointer;
                        ",
                        onclick: move |_| on_reset.call(()),
                        "Reset filters"
                    }
                }
            }
        }
    }
}
