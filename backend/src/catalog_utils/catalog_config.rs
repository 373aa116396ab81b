//! Where the course catalog comes from, read from the environment.

use std::path::PathBuf;

pub const CATALOG_SERVICE_URL_VAR: &str = "CATALOG_SERVICE_URL";
pub const CATALOG_FIXTURE_PATH_VAR: &str = "CATALOG_FIXTURE_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Remote catalog service answering with a JSON array of courses.
    RemoteService(String),
    /// JSON fixture file on disk.
    FixtureFile(PathBuf),
    /// Courses compiled into the binary.
    BuiltIn,
}

pub fn catalog_source_from_env() -> CatalogSource {
    catalog_source_from(std::env::var(CATALOG_SERVICE_URL_VAR).ok(), std::env::var(CATALOG_FIXTURE_PATH_VAR).ok())
}

/// The service URL wins over the fixture path; blank values count as unset.
pub fn catalog_source_from(service_url: Option<String>, fixture_path: Option<String>) -> CatalogSource {
    let service_url = service_url.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
    let fixture_path = fixture_path.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
    match (service_url, fixture_path) {
        (Some(url), _) => CatalogSource::RemoteService(url),
        (None, Some(path)) => CatalogSource::FixtureFile(PathBuf::from(path)),
        (None, None) => CatalogSource::BuiltIn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_url_takes_precedence() {
        let source = catalog_source_from(Some("http://catalog:8080/courses".to_string()), Some("/tmp/courses.json".to_string()));
        assert_eq!(source, CatalogSource::RemoteService("http://catalog:8080/courses".to_string()));
    }

    #[test]
    fn falls_back_to_fixture_then_built_in() {
        assert_eq!(catalog_source_from(None, Some("courses.json".to_string())), CatalogSource::FixtureFile(PathBuf::from("courses.json")));
        assert_eq!(catalog_source_from(Some("  ".to_string()), None), CatalogSource::BuiltIn);
        assert_eq!(catalog_source_from(None, None), CatalogSource::BuiltIn);
    }
}
