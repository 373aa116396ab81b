//! Loading and validating the course catalog from its configured source.

use std::{collections::HashSet, path::Path};

use anyhow::Context;
use common::{catalog_const::{FACET_BOARD, FACET_CLASS}, course::Course, facet_registry::FacetRegistry, filter_state::FilterState};
use tracing::{info, warn};

use crate::catalog_utils::{catalog_config::CatalogSource, fixture_catalog::fixture_courses};

pub async fn load_catalog(source: &CatalogSource) -> anyhow::Result<Vec<Course>> {
    let courses = match source {
        CatalogSource::RemoteService(url) => load_from_service(url).await?,
        CatalogSource::FixtureFile(path) => load_from_file(path).await?,
        CatalogSource::BuiltIn => fixture_courses(),
    };
    validate_catalog(&courses)?;
    info!("Loaded {} courses from {:?}", courses.len(), source);
    Ok(courses)
}

async fn load_from_file(path: &Path) -> anyhow::Result<Vec<Course>> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading catalog fixture {}", path.display()))?;
    parse_catalog_json(&text).with_context(|| format!("parsing catalog fixture {}", path.display()))
}

async fn load_from_service(url: &str) -> anyhow::Result<Vec<Course>> {
    let response = reqwest::get(url)
        .await
        .with_context(|| format!("fetching catalog from {url}"))?
        .error_for_status()
        .with_context(|| format!("catalog service at {url} returned an error"))?;
    let text = response.text().await.context("reading catalog service response")?;
    parse_catalog_json(&text).with_context(|| format!("parsing catalog from {url}"))
}

pub fn parse_catalog_json(text: &str) -> anyhow::Result<Vec<Course>> {
    let courses: Vec<Course> = serde_json::from_str(text)?;
    Ok(courses)
}

/// Duplicate ids are fatal. Courses whose class is not valid for their board
/// are kept but can never be reached through the class facet, so they are
/// reported.
pub fn validate_catalog(courses: &[Course]) -> anyhow::Result<()> {
    let mut ids = HashSet::new();
    for course in courses {
        if !ids.insert(&course.id) {
            anyhow::bail!("Duplicate course id in catalog: {}", course.id);
        }
    }

    let registry = FacetRegistry::course_catalog();
    for course in courses {
        let mut board_only = FilterState::default();
        board_only.facet_filters.insert(FACET_BOARD.to_string(), [course.board.clone()].into());
        let classes = registry.domain_of(FACET_CLASS, &board_only);
        if !classes.contains(&course.level) {
            warn!("Course {} has class {:?} which is not offered for board {:?}", course.id, course.level, course.board);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const TWO_COURSES: &str = r#"[
        {"id": "x-1", "title": "Trigonometry Sprint", "teacher": "N. Das", "board": "CBSE", "level": "Class 11",
         "subjects": ["Maths"], "delivery": "live", "rating": 4.4, "price": 1499, "original_price": 2499,
         "tags": ["New"], "launch_date": "2025-06-01"},
        {"id": "x-2", "title": "Cell Biology", "teacher": "P. Nair", "board": "ICSE", "level": "Class 9",
         "subjects": ["Biology"], "delivery": "recorded", "rating": 4.0, "price": 0, "original_price": 0,
         "launch_date": "2024-11-15"}
    ]"#;

    #[test]
    fn parses_courses_with_optional_tags() {
        let courses = parse_catalog_json(TWO_COURSES).unwrap();
        assert_eq!(courses.len(), 2);
        assert!(courses[1].tags.is_empty());
        assert!(courses[1].is_free());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut courses = parse_catalog_json(TWO_COURSES).unwrap();
        courses[1].id = courses[0].id.clone();
        assert!(validate_catalog(&courses).is_err());
    }

    #[tokio::test]
    async fn loads_fixture_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_COURSES.as_bytes()).unwrap();
        let courses = load_catalog(&CatalogSource::FixtureFile(file.path().to_path_buf())).await.unwrap();
        assert_eq!(courses[0].title, "Trigonometry Sprint");
    }

    #[tokio::test]
    async fn missing_fixture_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_catalog(&CatalogSource::FixtureFile(dir.path().join("missing.json"))).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn built_in_catalog_is_valid() {
        let courses = load_catalog(&CatalogSource::BuiltIn).await.unwrap();
        assert!(!courses.is_empty());
    }
}
