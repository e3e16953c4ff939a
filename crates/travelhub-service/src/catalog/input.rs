//! Admin input for creating and editing destinations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use travelhub_core::error::AppError;
use travelhub_core::result::AppResult;
use travelhub_entity::destination::{Category, Destination, NewDestination};

const DEFAULT_BEST_TIME: &str = "Year-round";

/// Destination fields as supplied by an administrator.
///
/// Every field is optional so the same type serves create (where the
/// required ones are enforced) and partial update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DestinationInput {
    /// Display name.
    pub name: Option<String>,
    /// Human-readable location.
    pub location: Option<String>,
    /// Country.
    pub country: Option<String>,
    /// Long description.
    pub description: Option<String>,
    /// Price per traveller per day, at least 0.
    pub price: Option<f64>,
    /// Image URLs; an empty list keeps the stored ones on update.
    pub images: Option<Vec<String>>,
    /// Duration label.
    pub duration: Option<String>,
    /// Category label, parsed into [`Category`].
    pub category: Option<String>,
    /// Season hint.
    pub best_time_to_visit: Option<String>,
    /// Activity labels.
    pub activities: Option<Vec<String>>,
    /// Whether bookable.
    pub available: Option<bool>,
    /// Initial display rating.
    pub rating: Option<f64>,
}

/// Collects every violated field before failing.
#[derive(Debug, Default)]
struct Violations(Vec<String>);

impl Violations {
    fn push(&mut self, field: &str, problem: &str) {
        self.0.push(format!("{field} {problem}"));
    }

    fn into_result(self) -> AppResult<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(format!(
                "Validation failed: {}",
                self.0.join("; ")
            )))
        }
    }
}

/// Trim and drop blank entries.
fn clean_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

fn text(
    violations: &mut Violations,
    field: &str,
    value: Option<String>,
    required: bool,
) -> Option<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Some(v),
        Some(_) => {
            violations.push(field, "must not be blank");
            None
        }
        None => {
            if required {
                violations.push(field, "is required");
            }
            None
        }
    }
}

fn price(violations: &mut Violations, value: Option<f64>, required: bool) -> Option<f64> {
    match value {
        Some(p) if p.is_finite() && p >= 0.0 => Some(p),
        Some(_) => {
            violations.push("price", "must be a non-negative number");
            None
        }
        None => {
            if required {
                violations.push("price", "is required");
            }
            None
        }
    }
}

fn category(violations: &mut Violations, value: Option<String>, required: bool) -> Option<Category> {
    match value {
        Some(raw) => match raw.trim().parse::<Category>() {
            Ok(c) => Some(c),
            Err(_) => {
                violations.push("category", &format!("'{}' is not a known category", raw.trim()));
                None
            }
        },
        None => {
            if required {
                violations.push("category", "is required");
            }
            None
        }
    }
}

fn seed_rating(violations: &mut Violations, value: Option<f64>) -> Option<f64> {
    match value {
        Some(r) if (0.0..=5.0).contains(&r) => Some(r),
        Some(_) => {
            violations.push("rating", "must be between 0 and 5");
            None
        }
        None => None,
    }
}

impl DestinationInput {
    /// Validate a complete destination for creation.
    pub fn into_new(self) -> AppResult<NewDestination> {
        let mut v = Violations::default();

        let name = text(&mut v, "name", self.name, true);
        let location = text(&mut v, "location", self.location, true);
        let country = text(&mut v, "country", self.country, true);
        let description = text(&mut v, "description", self.description, true);
        let duration = text(&mut v, "duration", self.duration, true);
        let price = price(&mut v, self.price, true);
        let category = category(&mut v, self.category, true);
        let rating = seed_rating(&mut v, self.rating);
        let images = clean_list(self.images.unwrap_or_default());
        if images.is_empty() {
            v.push("images", "must contain at least one image URL");
        }
        let best_time_to_visit = self
            .best_time_to_visit
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BEST_TIME.to_string());

        v.into_result()?;

        match (name, location, country, description, duration, price, category) {
            (
                Some(name),
                Some(location),
                Some(country),
                Some(description),
                Some(duration),
                Some(price),
                Some(category),
            ) => Ok(NewDestination {
                name,
                location,
                country,
                description,
                price,
                images,
                duration,
                category,
                best_time_to_visit,
                activities: clean_list(self.activities.unwrap_or_default()),
                available: self.available.unwrap_or(true),
                rating: rating.unwrap_or(0.0),
            }),
            _ => Err(AppError::validation("Validation failed")),
        }
    }

    /// Validate the supplied fields and apply them to `destination`.
    ///
    /// Nothing is applied when any supplied field is invalid. An absent or
    /// empty image list keeps the stored images.
    pub fn apply_to(self, destination: &mut Destination, now: DateTime<Utc>) -> AppResult<()> {
        let mut v = Violations::default();

        let name = text(&mut v, "name", self.name, false);
        let location = text(&mut v, "location", self.location, false);
        let country = text(&mut v, "country", self.country, false);
        let description = text(&mut v, "description", self.description, false);
        let duration = text(&mut v, "duration", self.duration, false);
        let best_time = text(&mut v, "bestTimeToVisit", self.best_time_to_visit, false);
        let price = price(&mut v, self.price, false);
        let category = category(&mut v, self.category, false);
        let rating = seed_rating(&mut v, self.rating);

        v.into_result()?;

        if let Some(name) = name {
            destination.name = name;
        }
        if let Some(location) = location {
            destination.location = location;
        }
        if let Some(country) = country {
            destination.country = country;
        }
        if let Some(description) = description {
            destination.description = description;
        }
        if let Some(duration) = duration {
            destination.duration = duration;
        }
        if let Some(best_time) = best_time {
            destination.best_time_to_visit = best_time;
        }
        if let Some(price) = price {
            destination.price = price;
        }
        if let Some(category) = category {
            destination.category = category;
        }
        if let Some(images) = self.images.map(clean_list).filter(|i| !i.is_empty()) {
            destination.images = images;
        }
        if let Some(activities) = self.activities {
            destination.activities = clean_list(activities);
        }
        if let Some(available) = self.available {
            destination.available = available;
        }
        if let Some(rating) = rating {
            destination.rating = rating;
            destination.recompute_rating();
        }
        destination.updated_at = now;
        Ok(())
    }
}
