//! Fallback for paths no route accepts. A `/courses/<state>` link whose state
//! segment cannot be decoded lands here too.

use dioxus::{logger::tracing, prelude::*};

use crate::components::error_boundary::{ErrorPanel, all_courses_href};

const LINK_STYLE: &str = "
    padding: 10px 18px;
    border-radius: 10px;
    background: #4F46E5;
    color: white;
    text-decoration: none;
    font-size: 16px;
";

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    let is_filter_link = segments.first().is_some_and(|s| s == "courses");
    let logged_path = path.clone();
    use_hook(move || tracing::warn!("no route for {logged_path}"));

    let (headline, hint) = if is_filter_link {
        ("This filter link is broken", "The saved filters in this link could not be read. It may be cut off or come from an older version of the site.")
    } else {
        ("Page not found", "There is nothing at this address.")
    };
    rsx! {
        Title { "{headline}" }
        ErrorPanel {
            headline: headline.to_string(),
            hint: hint.to_string(),
            details: path,
            a { href: all_courses_href(), style: LINK_STYLE, "Browse all courses" }
        }
    }
}
