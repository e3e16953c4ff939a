//! Response DTOs.
//!
//! Entities are reshaped here so that the legacy `image`, `rating` and
//! `guests` fields are emitted next to their canonical counterparts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use travelhub_auth::jwt::IssuedToken;
use travelhub_core::types::{BookingId, DestinationId, UserId};
use travelhub_entity::booking::{BookingStatus, PaymentStatus};
use travelhub_entity::destination::{CatalogMeta, Category, Destination};
use travelhub_entity::user::{User, UserRole, UserSummary};
use travelhub_service::booking::BookingDetails;
use travelhub_service::catalog::{ResolvedDestination, ResolvedReview};

/// Reviewer shown next to a review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewerResponse {
    /// Reviewer id.
    pub id: UserId,
    /// Reviewer display name.
    pub name: String,
}

/// A review with its author's display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    /// The reviewer.
    pub user_id: UserId,
    /// `None` when the reviewer's account no longer exists.
    pub user: Option<ReviewerResponse>,
    /// Star rating, 1 to 5.
    pub rating: u8,
    /// Free-text comment.
    pub comment: String,
    /// When the review was last submitted.
    pub date: DateTime<Utc>,
}

impl From<ResolvedReview> for ReviewResponse {
    fn from(resolved: ResolvedReview) -> Self {
        Self {
            user_id: resolved.review.user_id,
            user: resolved.reviewer.map(|u| ReviewerResponse {
                id: u.id,
                name: u.name,
            }),
            rating: resolved.review.rating,
            comment: resolved.review.comment,
            date: resolved.review.date,
        }
    }
}

/// Destination as returned by catalog and admin endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationResponse {
    /// Destination id.
    pub id: DestinationId,
    /// Display name.
    pub name: String,
    /// Human-readable location.
    pub location: String,
    /// Country.
    pub country: String,
    /// Long description.
    pub description: String,
    /// Price per traveller per day.
    pub price: f64,
    /// Image URLs.
    pub images: Vec<String>,
    /// First entry of `images`.
    pub image: Option<String>,
    /// Duration label.
    pub duration: String,
    /// Catalog category.
    pub category: Category,
    /// Season hint.
    pub best_time_to_visit: String,
    /// Activity labels.
    pub activities: Vec<String>,
    /// Whether the destination can be booked.
    pub available: bool,
    /// Reviews in submission order.
    pub reviews: Vec<ReviewResponse>,
    /// Mean review rating, 0 without reviews.
    pub average_rating: f64,
    /// Display rating: the seed rating until the first review, then `averageRating`.
    pub rating: f64,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

impl DestinationResponse {
    fn build(destination: Destination, reviews: Vec<ReviewResponse>) -> Self {
        Self {
            image: destination.primary_image().map(str::to_string),
            id: destination.id,
            name: destination.name,
            location: destination.location,
            country: destination.country,
            description: destination.description,
            price: destination.price,
            images: destination.images,
            duration: destination.duration,
            category: destination.category,
            best_time_to_visit: destination.best_time_to_visit,
            activities: destination.activities,
            available: destination.available,
            reviews,
            average_rating: destination.average_rating,
            rating: destination.rating,
            created_at: destination.created_at,
            updated_at: destination.updated_at,
        }
    }
}

impl From<ResolvedDestination> for DestinationResponse {
    fn from(resolved: ResolvedDestination) -> Self {
        let reviews = resolved.reviews.into_iter().map(Into::into).collect();
        Self::build(resolved.destination, reviews)
    }
}

/// Listings do not resolve reviewer names.
impl From<Destination> for DestinationResponse {
    fn from(destination: Destination) -> Self {
        let reviews = destination
            .reviews
            .iter()
            .map(|review| ReviewResponse {
                user_id: review.user_id,
                user: None,
                rating: review.rating,
                comment: review.comment.clone(),
                date: review.date,
            })
            .collect();
        Self::build(destination, reviews)
    }
}

/// `GET /api/destinations/meta` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaResponse {
    /// Distinct countries, sorted.
    pub countries: Vec<String>,
    /// Distinct categories, sorted.
    pub categories: Vec<String>,
    /// Rating filter values.
    pub ratings: Vec<u8>,
}

impl From<CatalogMeta> for MetaResponse {
    fn from(meta: CatalogMeta) -> Self {
        Self {
            countries: meta.countries,
            categories: meta.categories,
            ratings: meta.ratings,
        }
    }
}

/// Destination summary embedded in a booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedDestination {
    /// Destination id.
    pub id: DestinationId,
    /// Display name.
    pub name: String,
    /// Human-readable location.
    pub location: String,
    /// Country.
    pub country: String,
    /// Current daily price.
    pub price: f64,
    /// First entry of `images`.
    pub image: Option<String>,
    /// Image URLs.
    pub images: Vec<String>,
}

impl From<Destination> for BookedDestination {
    fn from(d: Destination) -> Self {
        Self {
            image: d.primary_image().map(str::to_string),
            id: d.id,
            name: d.name,
            location: d.location,
            country: d.country,
            price: d.price,
            images: d.images,
        }
    }
}

/// Booking with its destination and owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    /// Booking id.
    pub id: BookingId,
    /// Owner.
    pub user_id: UserId,
    /// Booked destination.
    pub destination_id: DestinationId,
    /// The destination, if it still exists.
    pub destination: Option<BookedDestination>,
    /// The owner, if the account still exists.
    pub user: Option<UserSummary>,
    /// Start of the stay.
    pub start_date: DateTime<Utc>,
    /// End of the stay.
    pub end_date: DateTime<Utc>,
    /// Number of travelers.
    pub travelers: i32,
    /// Same as `travelers`.
    pub guests: i32,
    /// Free-text notes.
    pub notes: String,
    /// Price fixed when the booking was made.
    pub total_price: f64,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Paid or unpaid.
    pub payment_status: PaymentStatus,
    /// Payment method label.
    pub payment_method: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

impl From<BookingDetails> for BookingResponse {
    fn from(details: BookingDetails) -> Self {
        let b = details.booking;
        Self {
            id: b.id,
            user_id: b.user_id,
            destination_id: b.destination_id,
            destination: details.destination.map(Into::into),
            user: details.user,
            start_date: b.start_date,
            end_date: b.end_date,
            travelers: b.travelers,
            guests: b.travelers,
            notes: b.notes,
            total_price: b.total_price,
            status: b.status,
            payment_status: b.payment_status,
            payment_method: b.payment_method,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

/// Account details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User id.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// `user` or `admin`.
    pub role: UserRole,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Register and login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Bearer access token.
    pub token: String,
    /// Token expiry.
    pub expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: UserResponse,
}

impl AuthResponse {
    /// Pair a signed token with the user it was issued to.
    pub fn new(user: User, token: IssuedToken) -> Self {
        Self {
            token: token.token,
            expires_at: token.expires_at,
            user: user.into(),
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Database connectivity.
    pub database: String,
    /// `postgres` or `memory`.
    pub backend: String,
    /// Seconds since the server started.
    pub uptime_seconds: u64,
}
