//! Built-in course catalog, served when no catalog service or fixture file is
//! configured.

use common::{
    catalog_const::*,
    course::{Course, CourseId, DeliveryType},
};

struct FixtureRow {
    id: &'static str,
    title: &'static str,
    teacher: &'static str,
    board: &'static str,
    level: &'static str,
    subjects: &'static [&'static str],
    delivery: DeliveryType,
    rating: f32,
    price: u32,
    original_price: u32,
    tags: &'static [&'static str],
    launch_date: &'static str,
}

const FIXTURE_ROWS: &[FixtureRow] = &[
    FixtureRow { id: "cbse-10-science", title: "Class 10 Science Masterclass", teacher: "Anita Verma", board: BOARD_CBSE, level: "Class 10", subjects: &["Science"], delivery: DeliveryType::LiveAndRecorded, rating: 4.8, price: 3499, original_price: 5999, tags: &["Bestseller", "Exam Ready"], launch_date: "2025-04-02" },
    FixtureRow { id: "cbse-10-maths", title: "Class 10 Maths: Board Booster", teacher: "Rohit Khanna", board: BOARD_CBSE, level: "Class 10", subjects: &["Maths"], delivery: DeliveryType::Live, rating: 4.7, price: 2999, original_price: 4999, tags: &["Exam Ready", "Doubt Support"], launch_date: "2025-03-18" },
    FixtureRow { id: "cbse-12-commerce", title: "Class 12 Commerce Complete", teacher: "Rahul Mehta", board: BOARD_CBSE, level: "Class 12", subjects: &["Commerce", "Accountancy", "Economics"], delivery: DeliveryType::LiveAndRecorded, rating: 4.6, price: 5499, original_price: 7999, tags: &["Bestseller"], launch_date: "2025-01-20" },
    FixtureRow { id: "cbse-12-pcm", title: "Class 12 PCM Crash Course", teacher: "Sneha Kulkarni", board: BOARD_CBSE, level: "Class 12", subjects: &["Physics", "Chemistry", "Maths"], delivery: DeliveryType::Recorded, rating: 4.5, price: 1999, original_price: 3999, tags: &["Exam Ready"], launch_date: "2025-06-10" },
    FixtureRow { id: "cbse-8-foundation", title: "Class 8 Maths & Science Foundation", teacher: "Meera Iyer", board: BOARD_CBSE, level: "Class 8", subjects: &["Maths", "Science"], delivery: DeliveryType::Recorded, rating: 4.3, price: 799, original_price: 1499, tags: &["Bilingual"], launch_date: "2024-11-05" },
    FixtureRow { id: "cbse-9-english", title: "Class 9 English Grammar Lab", teacher: "Farah Siddiqui", board: BOARD_CBSE, level: "Class 9", subjects: &["English"], delivery: DeliveryType::Live, rating: 4.2, price: 0, original_price: 0, tags: &["New"], launch_date: "2025-07-01" },
    FixtureRow { id: "icse-10-physics", title: "ICSE Class 10 Physics Deep Dive", teacher: "Arjun Menon", board: BOARD_ICSE, level: "Class 10", subjects: &["Physics"], delivery: DeliveryType::LiveAndRecorded, rating: 4.6, price: 2499, original_price: 3999, tags: &["Doubt Support"], launch_date: "2025-02-14" },
    FixtureRow { id: "icse-9-biology", title: "ICSE Class 9 Biology Essentials", teacher: "Priya Nair", board: BOARD_ICSE, level: "Class 9", subjects: &["Biology"], delivery: DeliveryType::Recorded, rating: 4.1, price: 999, original_price: 1999, tags: &[], launch_date: "2024-09-30" },
    FixtureRow { id: "icse-7-social", title: "ICSE Class 7 History & Civics", teacher: "Kavita Rao", board: BOARD_ICSE, level: "Class 7", subjects: &["Social Studies"], delivery: DeliveryType::Recorded, rating: 3.9, price: 0, original_price: 0, tags: &["Bilingual"], launch_date: "2024-08-12" },
    FixtureRow { id: "state-11-chemistry", title: "State Board Class 11 Chemistry", teacher: "Suresh Patil", board: BOARD_STATE, level: "Class 11", subjects: &["Chemistry"], delivery: DeliveryType::Live, rating: 4.4, price: 1499, original_price: 2499, tags: &["Bilingual", "Doubt Support"], launch_date: "2025-05-05" },
    FixtureRow { id: "state-6-maths", title: "Class 6 Maths Made Easy", teacher: "Lakshmi Subramanian", board: BOARD_STATE, level: "Class 6", subjects: &["Maths"], delivery: DeliveryType::Recorded, rating: 4.0, price: 499, original_price: 999, tags: &["New", "Bilingual"], launch_date: "2025-06-22" },
    FixtureRow { id: "found-jee", title: "JEE Starter: Physics & Maths", teacher: "Vikram Shah", board: BOARD_FOUNDATION, level: "JEE Starter", subjects: &["Physics", "Maths"], delivery: DeliveryType::LiveAndRecorded, rating: 4.9, price: 8999, original_price: 12999, tags: &["Bestseller", "Doubt Support"], launch_date: "2025-04-15" },
    FixtureRow { id: "found-neet", title: "NEET Starter Biology & Chemistry", teacher: "Dr. Kiran Bedi", board: BOARD_FOUNDATION, level: "NEET Starter", subjects: &["Biology", "Chemistry"], delivery: DeliveryType::Live, rating: 4.7, price: 7999, original_price: 11999, tags: &["Exam Ready"], launch_date: "2025-03-01" },
    FixtureRow { id: "found-olympiad", title: "Olympiad Prep: Science Reasoning", teacher: "Anand Joshi", board: BOARD_FOUNDATION, level: "Olympiad Prep", subjects: &["Science", "Maths"], delivery: DeliveryType::Recorded, rating: 4.5, price: 3999, original_price: 5999, tags: &["New"], launch_date: "2025-07-10" },
    FixtureRow { id: "grad-bcom", title: "B.Com Financial Accounting", teacher: "CA Neha Gupta", board: BOARD_GRADUATION, level: "B.Com", subjects: &["Accountancy", "Commerce"], delivery: DeliveryType::LiveAndRecorded, rating: 4.6, price: 4499, original_price: 6999, tags: &["Bestseller"], launch_date: "2025-02-01" },
    FixtureRow { id: "grad-bsc-cs", title: "B.Sc Computer Science: Data Structures", teacher: "Sanjay Reddy", board: BOARD_GRADUATION, level: "B.Sc", subjects: &["Computer Science"], delivery: DeliveryType::Recorded, rating: 4.4, price: 2999, original_price: 4999, tags: &[], launch_date: "2024-12-12" },
    FixtureRow { id: "grad-bba-eco", title: "BBA Managerial Economics", teacher: "Ritu Malhotra", board: BOARD_GRADUATION, level: "BBA", subjects: &["Economics"], delivery: DeliveryType::Live, rating: 4.2, price: 0, original_price: 1999, tags: &["New"], launch_date: "2025-05-28" },
];

pub fn fixture_courses() -> Vec<Course> {
    FIXTURE_ROWS
        .iter()
        .map(|row| Course {
            id: CourseId(row.id.to_string()),
            title: row.title.to_string(),
            teacher: row.teacher.to_string(),
            board: row.board.to_string(),
            level: row.level.to_string(),
            subjects: row.subjects.iter().map(|s| s.to_string()).collect(),
            delivery: row.delivery,
            rating: row.rating,
            price: row.price,
            original_price: row.original_price,
            tags: row.tags.iter().map(|s| s.to_string()).collect(),
            launch_date: row.launch_date.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashSet};

    use common::{facet_registry::FacetRegistry, filter_state::FilterState};

    use super::*;

    #[test]
    fn every_course_is_reachable_through_the_facets() {
        let registry = FacetRegistry::course_catalog();
        let empty = FilterState::default();
        for course in fixture_courses() {
            let mut with_board = FilterState::default();
            with_board.facet_filters.insert(FACET_BOARD.to_string(), BTreeSet::from([course.board.clone()]));
            assert!(registry.is_in_domain(FACET_BOARD, &course.board, &empty), "{}", course.id);
            assert!(registry.is_in_domain(FACET_CLASS, &course.level, &with_board), "{}", course.id);
            for subject in &course.subjects {
                assert!(registry.is_in_domain(FACET_SUBJECT, subject, &empty), "{} {subject}", course.id);
            }
            for tag in &course.tags {
                assert!(registry.is_in_domain(FACET_TAG, tag, &empty), "{} {tag}", course.id);
            }
            assert!(course.price <= course.original_price || course.original_price == 0, "{}", course.id);
        }
    }

    #[test]
    fn ids_are_unique() {
        let courses = fixture_courses();
        let ids: HashSet<_> = courses.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids.len(), courses.len());
    }
}
