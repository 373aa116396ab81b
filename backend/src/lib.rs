//! Server side of the course catalog: loading the catalog from its source and
//! exposing it to the frontend's server functions.

pub mod api;
pub mod catalog_utils;
pub mod server_extra;
