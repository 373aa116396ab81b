//! Backend API module exports.

pub mod catalog;
