pub mod home_page;
pub mod courses_page;
pub mod course_detail_page;
pub mod not_found_page;
