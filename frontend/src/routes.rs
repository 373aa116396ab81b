use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use common::filter_state::FilterState;

use crate::data_definitions::url_param::UrlParam;
use crate::pages::home_page::HomePage;
use crate::pages::courses_page::CoursesPage;
use crate::pages::course_detail_page::CourseDetailPage;
use crate::pages::not_found_page::NotFoundPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/courses/:state")]
    CoursesPage { state: UrlParam<FilterState> },


    #[route("/course/:course_id")]
    CourseDetailPage { course_id: String },


    // also catches /courses/<state> segments that fail to decode
    #[route("/:..segments")]
    NotFoundPage { segments: Vec<String> },

}

impl Route {
    pub fn courses_page_from_state(state: FilterState) -> Self {
        Self::CoursesPage { state: UrlParam::from(state) }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use common::{catalog_const::FACET_SUBJECT, sort_spec::SortKey};

    use super::*;

    #[test]
    fn filter_state_survives_the_address_bar() {
        let mut state = FilterState::from_query("Physics");
        state.sort = SortKey::PriceAsc;
        state.facet_filters.insert(FACET_SUBJECT.to_string(), ["Physics".to_string()].into());
        let route = Route::courses_page_from_state(state);
        assert_eq!(Route::from_str(&route.to_string()).ok(), Some(route));
    }

    #[test]
    fn undecodable_filter_link_falls_back_to_not_found() {
        let parsed = Route::from_str("/courses/@@@@").ok();
        assert_eq!(parsed, Some(Route::NotFoundPage { segments: vec!["courses".to_string(), "@@@@".to_string()] }));
    }
}
