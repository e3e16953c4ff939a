//! Destination category enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of categories a destination can be listed under.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "destination_category")]
pub enum Category {
    Beach,
    City,
    Adventure,
    Romantic,
    Cultural,
    Nature,
    Luxury,
    Family,
    Honeymoon,
    Wildlife,
    Desert,
    Island,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 12] = [
        Self::Beach,
        Self::City,
        Self::Adventure,
        Self::Romantic,
        Self::Cultural,
        Self::Nature,
        Self::Luxury,
        Self::Family,
        Self::Honeymoon,
        Self::Wildlife,
        Self::Desert,
        Self::Island,
    ];

    /// Return the category label as stored and displayed.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beach => "Beach",
            Self::City => "City",
            Self::Adventure => "Adventure",
            Self::Romantic => "Romantic",
            Self::Cultural => "Cultural",
            Self::Nature => "Nature",
            Self::Luxury => "Luxury",
            Self::Family => "Family",
            Self::Honeymoon => "Honeymoon",
            Self::Wildlife => "Wildlife",
            Self::Desert => "Desert",
            Self::Island => "Island",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = travelhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                travelhub_core::AppError::validation(format!("Invalid category: '{s}'"))
            })
    }
}
