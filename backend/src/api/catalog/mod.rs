//! Catalog API handlers and module exports.

mod list_courses;
pub use list_courses::list_courses;

mod get_course;
pub use get_course::get_course;
