use serde::{Deserialize, Serialize};

use crate::{course::{Course, CourseId}, filter_state::FilterState};


/// Filtered and sorted view of the catalog for one [`FilterState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub state: FilterState,
    pub courses: Vec<Course>,
    pub catalog_size: usize,
}

impl ResultSet {
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn course_ids(&self) -> Vec<CourseId> {
        self.courses.iter().map(|c| c.id.clone()).collect()
    }

    /// An empty result offers a reset whenever something is filtering, also
    /// when the catalog itself is empty.
    pub fn offers_reset(&self) -> bool {
        self.is_empty() && self.state.has_active_filters()
    }

    pub fn summary(&self) -> String {
        match self.courses.len() {
            1 => "1 course found".to_string(),
            n => format!("{n} courses found"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCounts {
    pub facet_id: String,
    pub label: String,
    pub values: Vec<FacetValueCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetValueCount {
    pub value: String,
    pub count: u64,
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_result(state: FilterState, catalog_size: usize) -> ResultSet {
        ResultSet { state, courses: Vec::new(), catalog_size }
    }

    #[test]
    fn empty_catalog_with_a_query_still_offers_reset() {
        assert!(empty_result(FilterState::from_query("physics"), 0).offers_reset());
        assert!(empty_result(FilterState::from_query("physics"), 12).offers_reset());
    }

    #[test]
    fn nothing_to_reset_without_filters() {
        assert!(!empty_result(FilterState::default(), 0).offers_reset());
        assert_eq!(empty_result(FilterState::default(), 0).summary(), "0 courses found");
    }
}
