use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdSearchOff;
use dioxus_free_icons::icons::md_navigation_icons::MdArrowBack;
use dioxus_free_icons::icons::md_social_icons::MdPerson;
use dioxus_free_icons::icons::md_toggle_icons::MdStar;
use dioxus_free_icons::Icon;

use common::course::Course;
use common::filter_state::FilterState;
use crate::api::catalog_api::fetch_course;
use crate::components::catalog_components::card_action_buttons::CourseCardActionCopyLink;
use crate::components::catalog_components::course_card::PriceTag;
use crate::components::error_boundary::ServerErrorNotice;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::routes::Route;

/// Single course page, reached from a course card.
#[component]
pub fn CourseDetailPage(course_id: String) -> Element {
    rsx! {
        SuspendWrapper {
            CourseDetailRoot { course_id }
        }
    }
}

#[component]
fn CourseDetailRoot(course_id: ReadSignal<String>) -> Element {
    let course = use_resource(move || fetch_course(course_id.read().clone())).suspend()?.cloned();
    let course = match course {
        Err(e) => return rsx! { ServerErrorNotice { what: "this course", error_txt: format!("{e:#}") } },
        Ok(c) => c,
    };
    rsx! {
        div {
            id: "x-course-detail-page",
            style: "
                display:flex;
                flex-direction: column;
                gap: 18px;
                width: 100%;
                height: 100%;
                padding: 28px 40px;
                box-sizing: border-box;
                overflow: auto;
                background: #F5F6F8;
            ",
            BackToCourses {}
            match course {
                Some(course) => rsx! { CourseDetail { course } },
                None => rsx! { CourseNotFound { course_id: course_id.read().clone() } },
            }
        }
    }
}

#[component]
fn BackToCourses() -> Element {
    rsx! {
        Link {
            to: Route::courses_page_from_state(FilterState::default()),
            style: "display:flex; align-items:center; gap:6px; color:#4F46E5; text-decoration:none; font-size: 16px;",
            Icon { icon: MdArrowBack, style: "width: 20px; height: 20px;" }
            "All courses"
        }
    }
}

#[component]
fn CourseDetail(course: ReadSignal<Course>) -> Element {
    let c = course.read().clone();
    let subjects = c.subjects.iter().cloned().collect::<Vec<_>>().join(", ");
    let tags = c.tags.iter().cloned().collect::<Vec<_>>();
    let discount = c.discount_percent();
    let delivery = c.delivery.label();
    let rating = format!("{:.1}", c.rating);
    rsx! {
        Title { "{c.title}" }
        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                max-width: 760px;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 16px;
                padding: 24px;
            ",
            div {
                style: "font-size: 14px; color: rgba(0,0,0,0.6); font-style: italic;",
                "{c.board} · {c.level} · {delivery}"
            }
            div {
                style: "display:flex; flex-direction: row; align-items: flex-start; gap: 12px;",
                h1 { style: "margin: 0px; font-size: 32px; font-weight: 500; flex: 1 1 auto;", "{c.title}" }
                CourseCardActionCopyLink { course_id: c.id.0.clone() }
            }
            div {
                style: "display:flex; align-items:center; gap: 6px; font-size: 17px; color: #374151;",
                Icon { icon: MdPerson, style: "width: 20px; height: 20px;" }
                "{c.teacher}"
            }
            div {
                style: "display:flex; align-items:center; gap: 16px;",
                span {
                    style: "display:flex; align-items:center; gap: 2px; font-size: 17px; font-weight: 500;",
                    Icon { icon: MdStar, style: "width: 20px; height: 20px; color: #F59E0B;" }
                    "{rating}"
                }
                PriceTag { price: c.price, original_price: c.original_price, discount }
            }
            DetailRow { label: "Subjects", value: subjects }
            DetailRow { label: "Launched", value: c.launch_date.clone() }
            if !tags.is_empty() {
                div {
                    style: "display:flex; flex-wrap: wrap; gap: 6px;",
                    for tag in tags {
                        span {
                            key: "{tag}",
                            style: "font-size: 13px; background: #EEF2FF; color: #4F46E5; border-radius: 1000px; padding: 3px 10px;",
                            "{tag}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DetailRow(label: String, value: String) -> Element {
    rsx! {
        div {
            style: "display:flex; gap: 10px; font-size: 16px;",
            span { style: "width: 90px; color: #6B7280;", "{label}" }
            span { style: "color: #111827;", "{value}" }
        }
    }
}

#[component]
fn CourseNotFound(course_id: String) -> Element {
    rsx! {
        Title { "Course not found" }
        div {
            style: "display:flex; flex-direction: column; align-items: center; gap: 12px; margin-top: 60px;",
            Icon { icon: MdSearchOff, style: "width: 120px; height: 120px; color:rgba(0, 0, 0, 0.5);" }
            div { style: "font-size: 24px; font-weight: 500;", "Course not found" }
            div { style: "font-size: 16px; color: rgba(0,0,0,0.5);", "No course with id \"{course_id}\" is in the catalog." }
        }
    }
}
