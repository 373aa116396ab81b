//! Deterministic sort keys for the course grid.

use std::{cmp::Ordering, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::course::Course;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Catalog order.
    #[default]
    Featured,
    RatingDesc,
    PriceAsc,
    PriceDesc,
    Newest,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

impl SortKey {
    pub const ALL: [SortKey; 5] = [SortKey::Featured, SortKey::RatingDesc, SortKey::PriceAsc, SortKey::PriceDesc, SortKey::Newest];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::RatingDesc => "rating_desc",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::Newest => "newest",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::RatingDesc => "Highest Rated",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::Newest => "Newest First",
        }
    }

    /// Ordering between two courses. `Equal` leaves the pair in catalog order
    /// under a stable sort.
    pub fn compare(&self, a: &Course, b: &Course) -> Ordering {
        match self {
            SortKey::Featured => Ordering::Equal,
            SortKey::RatingDesc => b.rating.total_cmp(&a.rating),
            SortKey::PriceAsc => a.price.cmp(&b.price),
            SortKey::PriceDesc => b.price.cmp(&a.price),
            SortKey::Newest => b.launch_date.cmp(&a.launch_date),
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_key_from_its_string_form() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
        }
    }

    #[test]
    fn unknown_key_is_an_error() {
        assert_eq!("relevance".parse::<SortKey>(), Err(UnknownSortKey("relevance".to_string())));
    }

    #[test]
    fn default_is_featured() {
        assert_eq!(SortKey::default(), SortKey::Featured);
    }
}
