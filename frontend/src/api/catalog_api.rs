//! Client API calls for catalog endpoints.

use common::course::{Course, CourseId};
use dioxus::prelude::*;


#[server]
pub async fn fetch_catalog() -> Result<Vec<Course>, ServerFnError> {
    let x = backend::api::catalog::list_courses().await;
    x.map_err(|e| ServerFnError::ServerError { message: format!("{e:#}"), code: 500, details: None })
}

#[server]
pub async fn fetch_course(course_id: String) -> Result<Option<Course>, ServerFnError> {
    let x = backend::api::catalog::get_course(CourseId(course_id)).await;
    x.map_err(|e| ServerFnError::ServerError { message: format!("{e:#}"), code: 500, details: None })
}
