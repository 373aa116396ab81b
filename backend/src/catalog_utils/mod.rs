pub mod catalog_config;
pub mod catalog_loader;
pub mod fixture_catalog;
