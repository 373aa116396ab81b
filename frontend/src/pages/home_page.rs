use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::icons::md_social_icons::MdSchool;
use dioxus_free_icons::Icon;

use common::catalog_const::{BOARD_CBSE, BOARD_FOUNDATION, BOARD_GRADUATION, BOARD_ICSE, BOARD_STATE, FACET_BOARD};
use common::facet_registry::FacetRegistry;
use common::filter_state::FilterState;
use common::filter_store::FilterStore;
use crate::routes::Route;

const BOARD_SHORTCUTS: &[(&str, &str)] = &[
    (BOARD_CBSE, "Classes 6 to 12, NCERT aligned"),
    (BOARD_ICSE, "Classes 6 to 12, CISCE syllabus"),
    (BOARD_STATE, "Regional syllabus, bilingual batches"),
    (BOARD_FOUNDATION, "JEE, NEET and Olympiad starters"),
    (BOARD_GRADUATION, "B.Com, B.Sc, BBA and B.Tech"),
];

/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Course Finder - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}
            SubText {}
            HeroSearchCard {}

            div {
                style: "font-size: 24px; font-weight: 500; color: #0F172A; margin-top: 10px;",
                "Browse by board"
            }
            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                ",
                for (board, blurb) in BOARD_SHORTCUTS.iter() {
                    BoardShortcutCard { key: "{board}", board: board.to_string(), blurb: blurb.to_string() }
                }
            }
        }
    }
}


#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items: center;
                gap: 8px;
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            Icon { icon: MdSchool, style: "width: 46px; height: 46px; color:#4F46E5;" }
            span { "Find your next" }
            span { style: "color:#4F46E5;", "course" }
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        div {
            style: "
                color: #111827;
                font-size: 24px;
                line-height: 1.6;
                max-width: 680px;
                font-weight: 500;
            ",
            "Live and recorded courses for every board and class. Filter by subject, price and format to find the right fit."
        }
    }
}

#[component]
fn HeroSearchCard() -> Element {
    rsx! {
        div {
            id: "x-card-hero-search",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                max-width: 680px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",
            div {
                style: "font-size: 16px; color: rgba(255,255,255,0.9);",
                "Search by course title or teacher name and hit Enter."
            }
            HeroSearchInput {}
        }
    }
}

#[component]
fn HeroSearchInput() -> Element {
    let n2 = navigator();
    let mut search_q = use_signal(|| "".to_string());
    let go = move || {
        let state = FilterState::from_query(search_q.read().clone());
        n2.push(Route::courses_page_from_state(state));
    };
    rsx! {
        div {
            style: "
                display:flex;
                align-items:center;
                gap: 10px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 42px;
                color: #111827;
            ",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
            input {
                r#type: "text",
                placeholder: "Try \"Physics\" or a teacher's name",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 14px;
                ",
                oninput: move |e| {
                    *search_q.write() = e.value();
                },
                onkeypress: move |e| {
                    if e.key() == Key::Enter {
                        e.prevent_default();
                        go();
                    }
                },
            }
            button {
                style: "
                    height: 34px;
                    padding: 0 16px;
                    border: none;
                    border-radius: 9999px;
                    background: #4F46E5;
                    color: white;
                    cursor: pointer;
                ",
                onclick: move |_| go(),
                "Search"
            }
        }
    }
}

#[component]
fn BoardShortcutCard(board: String, blurb: String) -> Element {
    let n2 = navigator();
    let target = board.clone();
    rsx! {
        div {
            class: "x-card-board-shortcut",
            style: "
                display:flex;
                flex-direction: column;
                gap: 8px;
                width: 240px;
                min-height: 110px;
                border-radius: 16px;
                padding: 18px;
                background: white;
                color: #111827;
                border: 1px solid #E5E7EB;
                box-shadow: 0 6px 16px rgba(0,0,0,0.06);
                cursor: pointer;
            ",
            onclick: move |_| {
                let mut store = FilterStore::new(Arc::new(FacetRegistry::course_catalog()));
                store.select_facet_value(FACET_BOARD, &target);
                n2.push(Route::courses_page_from_state(store.state()));
            },
            div { style: "font-size: 22px; font-weight: 500; color: #4F46E5;", "{board}" }
            div { style: "font-size: 15px; color: #4B5563;", "{blurb}" }
        }
    }
}
