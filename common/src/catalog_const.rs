//! Facet identifiers and labels shared by frontend and backend.

pub const FACET_BOARD: &str = "board";
pub const FACET_CLASS: &str = "class";
pub const FACET_SUBJECT: &str = "subject";
pub const FACET_DELIVERY: &str = "delivery";
pub const FACET_PRICE_BAND: &str = "price_band";
pub const FACET_TAG: &str = "tag";

pub const BOARD_CBSE: &str = "CBSE";
pub const BOARD_ICSE: &str = "ICSE";
pub const BOARD_STATE: &str = "State Board";
pub const BOARD_FOUNDATION: &str = "Foundation";
pub const BOARD_GRADUATION: &str = "Graduation";

pub const PRICE_BAND_FREE: &str = "Free";
pub const PRICE_BAND_UNDER_1000: &str = "Under ₹1,000";
pub const PRICE_BAND_1000_TO_4999: &str = "₹1,000 - ₹4,999";
pub const PRICE_BAND_5000_PLUS: &str = "₹5,000 & above";

/// Boards in tab order.
pub const BOARDS: &[&str] = &[BOARD_CBSE, BOARD_ICSE, BOARD_STATE, BOARD_FOUNDATION, BOARD_GRADUATION];

pub const SCHOOL_CLASSES: &[&str] = &["Class 6", "Class 7", "Class 8", "Class 9", "Class 10", "Class 11", "Class 12"];
pub const FOUNDATION_LEVELS: &[&str] = &["JEE Starter", "NEET Starter", "Olympiad Prep"];
pub const GRADUATION_LEVELS: &[&str] = &["B.Com", "B.Sc", "BBA", "B.Tech"];

pub const SUBJECTS: &[&str] = &[
    "Maths",
    "Science",
    "Physics",
    "Chemistry",
    "Biology",
    "English",
    "Social Studies",
    "Commerce",
    "Accountancy",
    "Economics",
    "Computer Science",
];

pub const TAGS: &[&str] = &["Bestseller", "New", "Exam Ready", "Doubt Support", "Bilingual"];
