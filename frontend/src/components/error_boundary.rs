//! Error views for the catalog app: a page-level boundary, a per-component
//! boundary with retry, and the notice shown when a server call fails.

use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::md_alert_icons::MdErrorOutline};

use common::filter_state::FilterState;
use crate::routes::Route;

const PRIMARY_LINK_STYLE: &str = "
    padding: 10px 18px;
    border-radius: 10px;
    background: #4F46E5;
    color: white;
    text-decoration: none;
    font-size: 16px;
    border: none;
    cursor: pointer;
";

/// Plain href so it also works above the router.
pub fn all_courses_href() -> String {
    Route::courses_page_from_state(FilterState::default()).to_string()
}

fn describe(err: &ErrorContext) -> String {
    match err.error() {
        Some(captured) => format!("{:#?}", captured.0),
        None => "unknown error".to_string(),
    }
}

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                let details = describe(&err);
                tracing::error!("{} view failed to render: {}", boundary_name.peek(), details);
                rsx! {
                    ErrorPanel {
                        headline: "This page could not be shown",
                        hint: "Something broke while rendering the catalog. Your filters live in the address bar, so reloading usually brings them back.",
                        details,
                        a { href: all_courses_href(), style: PRIMARY_LINK_STYLE, "Browse all courses" }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let details = describe(&err);
                tracing::warn!("catalog section failed: {}", details);
                rsx! {
                    ErrorPanel {
                        headline: "This section failed to load",
                        hint: "The rest of the page still works.",
                        details,
                        button {
                            style: PRIMARY_LINK_STYLE,
                            onclick: move |_| err.clear_errors(),
                            "Try again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

/// A server function answered with an error. `what` names the missing data,
/// e.g. "the course catalog".
#[component]
pub fn ServerErrorNotice(what: String, error_txt: String) -> Element {
    tracing::warn!("could not load {what}: {error_txt}");
    rsx! {
        ErrorPanel {
            headline: "Could not load {what}",
            hint: "The catalog service did not answer. Please try again in a moment.",
            details: error_txt,
            a { href: all_courses_href(), style: PRIMARY_LINK_STYLE, "Back to all courses" }
        }
    }
}

#[component]
pub fn ErrorPanel(headline: String, hint: String, details: Option<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "x-error-panel",
            style: "
                width: 100%;
                height: 100%;
                display: flex;
                align-items: center;
                justify-content: center;
                box-sizing: border-box;
                padding: 24px;
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 12px;
                    max-width: 520px;
                    text-align: center;
                    background: white;
                    border: 1px solid #E5E7EB;
                    border-radius: 16px;
                    padding: 28px;
                ",
                Icon { icon: MdErrorOutline, style: "width: 64px; height: 64px; color: #DC2626;" }
                div { style: "font-size: 24px; font-weight: 500; color: #111827;", "{headline}" }
                div { style: "font-size: 16px; color: #4B5563;", "{hint}" }
                {children}
                if let Some(text) = details {
                    details {
                        style: "width: 100%; text-align: left; font-size: 13px; color: #6B7280;",
                        summary { style: "cursor: pointer;", "Technical details" }
                        pre {
                            style: "white-space: pre-wrap; max-height: 240px; overflow-y: auto;",
                            "{text}"
                        }
                    }
                }
            }
        }
    }
}
