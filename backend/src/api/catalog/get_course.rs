use common::course::{Course, CourseId};

use crate::api::catalog::list_courses::shared_catalog;

pub async fn get_course(id: CourseId) -> anyhow::Result<Option<Course>> {
    let catalog = shared_catalog().await?;
    Ok(catalog.iter().find(|c| c.id == id).cloned())
}
