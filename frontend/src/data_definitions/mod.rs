pub mod catalog_context;
pub mod url_param;
