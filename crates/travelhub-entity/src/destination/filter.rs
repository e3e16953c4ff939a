//! Catalog query filters.

use serde::{Deserialize, Serialize};

use super::model::Destination;

/// Value that clients send to mean "no filter" for a select box.
pub const ALL_SENTINEL: &str = "all";

/// Optional constraints on a catalog listing. Every supplied filter must
/// match (logical AND).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DestinationFilter {
    /// Case-insensitive substring matched against name, location, country
    /// or description.
    pub search: Option<String>,
    /// Exact country.
    pub country: Option<String>,
    /// Exact category label.
    pub category: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    pub max_price: Option<f64>,
    /// Either `rating` or `average_rating` must reach this value.
    pub min_rating: Option<f64>,
}

impl DestinationFilter {
    /// Drop blank values and the `"all"` sentinel so that only real
    /// constraints remain.
    pub fn normalized(self) -> Self {
        Self {
            search: non_blank(self.search),
            country: non_blank(self.country).filter(|c| c != ALL_SENTINEL),
            category: non_blank(self.category).filter(|c| c != ALL_SENTINEL),
            min_price: self.min_price,
            max_price: self.max_price,
            min_rating: self.min_rating,
        }
    }

    /// Evaluate the filter against a destination.
    ///
    /// Expects a normalized filter. Unlisted destinations never match.
    pub fn matches(&self, destination: &Destination) -> bool {
        if !destination.is_listed() {
            return false;
        }

        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = [
                &destination.name,
                &destination.location,
                &destination.country,
                &destination.description,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        if let Some(country) = &self.country {
            if &destination.country != country {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if destination.category.as_str() != category {
                return false;
            }
        }

        if let Some(min) = self.min_price {
            if destination.price < min {
                return false;
            }
        }

        if let Some(max) = self.max_price {
            if destination.price > max {
                return false;
            }
        }

        if let Some(min_rating) = self.min_rating {
            if destination.rating < min_rating && destination.average_rating < min_rating {
                return false;
            }
        }

        true
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
