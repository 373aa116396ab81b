pub mod export_catalog;
