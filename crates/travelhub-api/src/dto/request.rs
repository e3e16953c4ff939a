//! Request DTOs with validation.
//!
//! Older clients send `image` instead of `images` and `guests` instead of
//! `travelers`; both spellings are accepted here and nowhere else.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use travelhub_core::error::AppError;
use travelhub_core::result::AppResult;
use travelhub_core::types::DestinationId;
use travelhub_entity::destination::DestinationFilter;
use travelhub_entity::destination::filter::ALL_SENTINEL;
use travelhub_service::booking::{NewBookingInput, PaymentInput};
use travelhub_service::catalog::DestinationInput;

/// Query string of `GET /api/destinations`.
///
/// Numbers arrive as strings so that `"all"` and empty values can be
/// treated as "no filter" instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationQuery {
    /// Free-text search over name, location, country and description.
    pub search: Option<String>,
    /// Exact country, or `"all"`.
    pub country: Option<String>,
    /// Exact category, or `"all"`.
    pub category: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<String>,
    /// Inclusive upper price bound.
    pub max_price: Option<String>,
    /// Minimum rating, or `"all"`.
    pub min_rating: Option<String>,
}

impl DestinationQuery {
    /// Parse into a catalog filter.
    pub fn into_filter(self) -> AppResult<DestinationFilter> {
        Ok(DestinationFilter {
            search: self.search,
            country: self.country,
            category: self.category,
            min_price: parse_number("minPrice", self.min_price)?,
            max_price: parse_number("maxPrice", self.max_price)?,
            min_rating: parse_number("minRating", self.min_rating)?,
        }
        .normalized())
    }
}

fn parse_number(field: &str, raw: Option<String>) -> AppResult<Option<f64>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() || raw == ALL_SENTINEL {
        return Ok(None);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(Some)
        .ok_or_else(|| AppError::validation(format!("{field} must be a number")))
}

/// Body of `POST /api/admin/destinations` and `PUT /api/admin/destinations/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationRequest {
    /// Display name.
    pub name: Option<String>,
    /// Human-readable location.
    pub location: Option<String>,
    /// Country.
    pub country: Option<String>,
    /// Long description.
    pub description: Option<String>,
    /// Price per traveller per day.
    pub price: Option<f64>,
    /// Image URLs.
    pub images: Option<Vec<String>>,
    /// Single-image form used by older clients.
    pub image: Option<String>,
    /// Duration label, e.g. "5 days".
    pub duration: Option<String>,
    /// Category label.
    pub category: Option<String>,
    /// Season hint.
    pub best_time_to_visit: Option<String>,
    /// Activity labels.
    pub activities: Option<Vec<String>>,
    /// Whether the destination can be booked.
    pub available: Option<bool>,
    /// Initial display rating.
    pub rating: Option<f64>,
}

impl DestinationRequest {
    /// Convert to service input. A non-empty `images` wins over `image`.
    pub fn into_input(self) -> DestinationInput {
        let images = match self.images.filter(|i| i.iter().any(|s| !s.trim().is_empty())) {
            Some(images) => Some(images),
            None => self
                .image
                .filter(|i| !i.trim().is_empty())
                .map(|i| vec![i]),
        };

        DestinationInput {
            name: self.name,
            location: self.location,
            country: self.country,
            description: self.description,
            price: self.price,
            images,
            duration: self.duration,
            category: self.category,
            best_time_to_visit: self.best_time_to_visit,
            activities: self.activities,
            available: self.available,
            rating: self.rating,
        }
    }
}

/// Body of `POST /api/bookings`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    /// Destination to book.
    #[validate(length(min = 1, message = "Destination is required"))]
    pub destination_id: String,
    /// ISO date or date-time.
    #[validate(length(min = 1, message = "Start date is required"))]
    pub start_date: String,
    /// ISO date or date-time.
    #[validate(length(min = 1, message = "End date is required"))]
    pub end_date: String,
    /// Number of travelers, 1 to 20.
    #[validate(range(min = 1, max = 20, message = "Travelers must be between 1 and 20"))]
    pub travelers: Option<i32>,
    /// Older name for `travelers`.
    #[validate(range(min = 1, max = 20, message = "Travelers must be between 1 and 20"))]
    pub guests: Option<i32>,
    /// Free-text notes.
    #[validate(length(max = 2000, message = "Notes must be at most 2000 characters"))]
    pub notes: Option<String>,
    /// Payment method label; defaults to paying at check-in.
    pub payment_method: Option<String>,
}

impl CreateBookingRequest {
    /// Parse identifiers and dates into service input.
    ///
    /// One of `travelers` or `guests` is required.
    pub fn into_input(self) -> AppResult<NewBookingInput> {
        let destination_id: DestinationId = self
            .destination_id
            .trim()
            .parse()
            .map_err(|_| AppError::validation("Invalid destination id"))?;

        let travelers = self
            .travelers
            .or(self.guests)
            .ok_or_else(|| AppError::validation("Travelers must be at least 1"))?;

        Ok(NewBookingInput {
            destination_id,
            start_date: parse_date("startDate", &self.start_date)?,
            end_date: parse_date("endDate", &self.end_date)?,
            travelers,
            notes: self.notes,
            payment_method: self.payment_method,
        })
    }
}

/// Accepts RFC 3339 date-times and plain `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_date(field: &str, raw: &str) -> AppResult<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| AppError::validation(format!("{field} must be a valid date")))
}

/// Body of `POST /api/destinations/{id}/review`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRequest {
    /// Star rating. Range checked by the review service.
    pub rating: Option<i64>,
    /// Free-text comment.
    pub comment: Option<String>,
}

/// Body of the status endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StatusRequest {
    /// Target status name.
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}

/// Body of `PUT /api/bookings/{id}/payment`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// `"paid"` or `"unpaid"`.
    pub payment_status: Option<String>,
    /// Payment method label.
    pub payment_method: Option<String>,
}

impl From<PaymentRequest> for PaymentInput {
    fn from(req: PaymentRequest) -> Self {
        Self {
            payment_status: req.payment_status,
            payment_method: req.payment_method,
        }
    }
}

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    /// Email address, stored lowercase.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Plain-text password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Plain-text password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
