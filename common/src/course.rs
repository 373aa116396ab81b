//! Course catalog records.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog_const::{PRICE_BAND_1000_TO_4999, PRICE_BAND_5000_PLUS, PRICE_BAND_FREE, PRICE_BAND_UNDER_1000};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CourseId(pub String);

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CourseId {
    fn from(value: &str) -> Self {
        CourseId(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryType {
    Live,
    Recorded,
    LiveAndRecorded,
}

impl DeliveryType {
    pub const ALL: [DeliveryType; 3] = [DeliveryType::Live, DeliveryType::Recorded, DeliveryType::LiveAndRecorded];

    pub fn label(&self) -> &'static str {
        match self {
            DeliveryType::Live => "Live",
            DeliveryType::Recorded => "Recorded",
            DeliveryType::LiveAndRecorded => "Live + Recorded",
        }
    }
}

/// Which part of a course a facet reads its values from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseField {
    Board,
    Level,
    Subjects,
    Delivery,
    PriceBand,
    Tags,
}

/// Immutable catalog record. Prices are whole rupees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub teacher: String,
    pub board: String,
    pub level: String,
    pub subjects: BTreeSet<String>,
    pub delivery: DeliveryType,
    pub rating: f32,
    pub price: u32,
    pub original_price: u32,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// ISO `YYYY-MM-DD`, compared lexicographically.
    pub launch_date: String,
}

impl Course {
    /// Values this course carries for a facet field. Single-valued fields
    /// yield exactly one entry.
    pub fn field_values(&self, field: CourseField) -> Vec<&str> {
        match field {
            CourseField::Board => vec![self.board.as_str()],
            CourseField::Level => vec![self.level.as_str()],
            CourseField::Subjects => self.subjects.iter().map(|s| s.as_str()).collect(),
            CourseField::Delivery => vec![self.delivery.label()],
            CourseField::PriceBand => vec![price_band(self.price)],
            CourseField::Tags => self.tags.iter().map(|s| s.as_str()).collect(),
        }
    }

    pub fn discount_percent(&self) -> u32 {
        if self.original_price == 0 || self.price >= self.original_price {
            return 0;
        }
        let saved = (self.original_price - self.price) as u64 * 100;
        (saved / self.original_price as u64) as u32
    }

    pub fn is_free(&self) -> bool {
        self.price == 0
    }
}

pub fn price_band(price: u32) -> &'static str {
    match price {
        0 => PRICE_BAND_FREE,
        1..=999 => PRICE_BAND_UNDER_1000,
        1000..=4999 => PRICE_BAND_1000_TO_4999,
        _ => PRICE_BAND_5000_PLUS,
    }
}
