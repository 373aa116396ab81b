use axum::{Json, http::{StatusCode, header}, response::IntoResponse};
use tracing::{error, info};

use crate::api::catalog::list_courses;

/// `GET /_catalog/courses.json`: the catalog as a downloadable JSON array.
pub async fn export_catalog() -> impl IntoResponse {
    match list_courses().await {
        Ok(courses) => {
            info!("Exporting catalog with {} courses", courses.len());
            let headers = [(header::CONTENT_DISPOSITION, "attachment; filename=\"courses.json\"")];
            (headers, Json(courses)).into_response()
        }
        Err(e) => {
            error!("Catalog export failed: {e:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("catalog unavailable: {e}")).into_response()
        }
    }
}
