//! Course card action buttons.

use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdOpenInNew, md_editor_icons::MdInsertLink}};

use crate::routes::Route;

const ACTION_BUTTON_STYLE: &str = "
    width: 34px;
    height: 34px;
    cursor: pointer;
    border: 1px solid #000;
    border-radius: 8px;
    background: white;
    color: black;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1px;
    margin: 1px;
";

#[component]
pub fn CourseCardActionOpenNewTab(course_id: ReadSignal<String>) -> Element {
    rsx! {
        a {
            style: ACTION_BUTTON_STYLE,
            target: "_blank",
            title: "Open in new tab",
            href: Route::CourseDetailPage { course_id: course_id.read().clone() }.to_string(),
            onclick: move |e| e.stop_propagation(),
            Icon {
                icon: MdOpenInNew,
                style: "width: 20px; height: 20px;"
            }
        }
    }
}

#[component]
pub fn CourseCardActionCopyLink(course_id: ReadSignal<String>) -> Element {
    let do_copy_link = use_callback(move |_: ()| {
        let Some(window) = web_sys::window() else { return };
        let Ok(origin) = window.location().origin() else { return };
        let url = format!("{}{}", origin, Route::CourseDetailPage { course_id: course_id.read().clone() });
        let promise = window.navigator().clipboard().write_text(&url);
        spawn(async move {
            match wasm_bindgen_futures::JsFuture::from(promise).await {
                Ok(_) => tracing::info!("Course link copied to clipboard: {url}"),
                Err(e) => tracing::warn!("Copying course link failed: {e:?}"),
            }
        });
    });
    rsx! {
        button {
            style: ACTION_BUTTON_STYLE,
            title: "Copy link",
            onclick: move |e| {
                e.stop_propagation();
                do_copy_link.call(());
            },
            Icon {
                icon: MdInsertLink,
                style: "width: 20px; height: 20px;"
            }
        }
    }
}
