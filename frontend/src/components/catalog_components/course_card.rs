//! Course card for the result grid.

use common::{course::Course, text_highlight::{HighlightTextSpan, highlight_query}};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_social_icons::MdPerson, md_toggle_icons::MdStar}};

use crate::{components::catalog_components::card_action_buttons::{CourseCardActionCopyLink, CourseCardActionOpenNewTab}, routes::Route};

#[component]
pub fn CourseCard(course: ReadSignal<Course>, query_string: ReadSignal<String>) -> Element {
    let course_value = course.read().clone();
    let title_spans = highlight_query(&course_value.title, &query_string.read());
    let teacher_spans = highlight_query(&course_value.teacher, &query_string.read());
    let discount = course_value.discount_percent();
    let subjects = course_value.subjects.iter().cloned().collect::<Vec<_>>();
    let rating = format!("{:.1}", course_value.rating);

    rsx! {
        div {
            class: "x-course-card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                background: white;
                border: 3px solid #AAAAAA33;
                border-radius: 8px;
                padding: 12px 16px;
                height: 100%;
                box-sizing: border-box;
                cursor: pointer;
            ",
            onclick: move |_| {
                navigator().push(Route::CourseDetailPage { course_id: course.read().id.0.clone() });
            },
            // Row 1: BOARD / CLASS - SPACER - DELIVERY
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
                span {
                    style: "font-size: 13px; color: rgba(0, 0, 0, 0.6); font-style: italic;",
                    "{course_value.board} · {course_value.level}"
                }
                div { style: "flex: 1 1 auto;" }
                DeliveryBadge { label: course_value.delivery.label().to_string() }
            }
            // Row 2: TITLE
            div {
                style: "
                    font-size: 19px;
                    line-height: 26px;
                    font-weight: 500;
                    color: rgb(0, 0, 0);
                    display: -webkit-box;
                    -webkit-line-clamp: 2;
                    -webkit-box-orient: vertical;
                    overflow: hidden;
                ",
                {render_highlight_text_span(title_spans)}
            }
            // Row 3: TEACHER
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 6px; font-size: 15px; color: rgba(0, 0, 0, 0.7);",
                Icon { icon: MdPerson, style: "width: 18px; height: 18px;" }
                {render_highlight_text_span(teacher_spans)}
            }
            // Row 4: SUBJECTS
            div {
                style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 6px;",
                for subject in subjects {
                    span {
                        key: "{subject}",
                        style: "font-size: 12px; background: #ECEEF2; border-radius: 1000px; padding: 2px 8px;",
                        "{subject}"
                    }
                }
            }
            div { style: "flex: 1 1 auto;" }
            // Row 5: RATING - PRICE - ACTIONS
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 10px;",
                span {
                    style: "display: flex; align-items: center; gap: 2px; font-size: 15px; font-weight: 500;",
                    Icon { icon: MdStar, style: "width: 18px; height: 18px; color: #F59E0B;" }
                    "{rating}"
                }
                PriceTag { price: course_value.price, original_price: course_value.original_price, discount }
                div { style: "flex: 1 1 auto;" }
                CourseCardActionOpenNewTab { course_id: course_value.id.0.clone() }
                CourseCardActionCopyLink { course_id: course_value.id.0.clone() }
            }
        }
    }
}

#[component]
fn DeliveryBadge(label: String) -> Element {
    rsx! {
        span {
            style: "font-size: 12px; color: #4F46E5; border: 1px solid #4F46E5; border-radius: 4px; padding: 1px 6px; white-space: nowrap;",
            "{label}"
        }
    }
}

#[component]
pub fn PriceTag(price: u32, original_price: u32, discount: u32) -> Element {
    rsx! {
        span {
            style: "display: flex; align-items: baseline; gap: 6px;",
            if price == 0 {
                span { style: "font-size: 18px; font-weight: 600; color: #15803D;", "Free" }
            } else {
                span { style: "font-size: 18px; font-weight: 600;", "₹{price}" }
            }
            if discount > 0 {
                span { style: "font-size: 13px; color: rgba(0,0,0,0.5); text-decoration: line-through;", "₹{original_price}" }
                span { style: "font-size: 13px; color: #15803D;", "{discount}% off" }
            }
        }
    }
}

pub fn render_highlight_text_span(spans: Vec<HighlightTextSpan>) -> Element {
    let spans = spans.into_iter().map(|i| {
        let color = if i.is_highlighted { "#EB3E014D" } else { "transparent" };
        rsx! {
            span {
                key: "{i.index}",
                style: "background-color: {color};",
                "{i.text}"
            }
        }
    }).collect::<Vec<_>>();
    rsx! {
        {spans.into_iter()}
    }
}
