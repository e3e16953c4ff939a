//! Booking service: creation, pricing, and status/payment changes.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use travelhub_auth::policy::{authorize_owner_or_admin, authorize_status_change};
use travelhub_core::error::AppError;
use travelhub_core::result::AppResult;
use travelhub_core::types::{BookingId, DestinationId, UserId};
use travelhub_database::{BookingRepository, DestinationRepository, UserRepository};
use travelhub_entity::booking::{
    Booking, BookingStatus, DEFAULT_PAYMENT_METHOD, MAX_TRAVELERS, MIN_TRAVELERS, PaymentStatus,
    stay_days, total_price,
};

use super::view::BookingDetails;
use crate::catalog::service::require_admin;
use crate::context::RequestContext;

/// Data for a new booking.
#[derive(Debug, Clone)]
pub struct NewBookingInput {
    /// Destination to book.
    pub destination_id: DestinationId,
    /// Start of the stay.
    pub start_date: DateTime<Utc>,
    /// End of the stay.
    pub end_date: DateTime<Utc>,
    /// Number of travelers.
    pub travelers: i32,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Payment method; defaults to paying at check-in.
    pub payment_method: Option<String>,
}

/// Requested payment changes. Values are parsed by the service.
#[derive(Debug, Clone, Default)]
pub struct PaymentInput {
    /// `"paid"` or `"unpaid"`.
    pub payment_status: Option<String>,
    /// New payment method label.
    pub payment_method: Option<String>,
}

/// Creates bookings and drives them through their lifecycle.
#[derive(Debug, Clone)]
pub struct BookingService {
    bookings: Arc<dyn BookingRepository>,
    destinations: Arc<dyn DestinationRepository>,
    users: Arc<dyn UserRepository>,
}

impl BookingService {
    /// Creates a new booking service.
    pub fn new(
        bookings: Arc<dyn BookingRepository>,
        destinations: Arc<dyn DestinationRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            bookings,
            destinations,
            users,
        }
    }

    /// Book a destination for the caller.
    ///
    /// The total price is computed once here and never recomputed.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: NewBookingInput,
    ) -> AppResult<BookingDetails> {
        if !(MIN_TRAVELERS..=MAX_TRAVELERS).contains(&input.travelers) {
            return Err(AppError::validation(format!(
                "Travelers must be between {MIN_TRAVELERS} and {MAX_TRAVELERS}"
            )));
        }

        let destination = self
            .destinations
            .find_by_id(input.destination_id)
            .await?
            .filter(|d| d.deleted_at.is_none())
            .ok_or_else(|| AppError::not_found("Destination not found"))?;
        if !destination.available {
            return Err(AppError::validation(
                "Destination is not available for booking",
            ));
        }

        let days = stay_days(input.start_date, input.end_date);
        if days <= 0 {
            return Err(AppError::validation("End date must be after start date"));
        }

        let now = Utc::now();
        let booking = Booking {
            id: BookingId::new(),
            user_id: ctx.user_id,
            destination_id: destination.id,
            start_date: input.start_date,
            end_date: input.end_date,
            travelers: input.travelers,
            notes: input.notes.map(|n| n.trim().to_string()).unwrap_or_default(),
            total_price: total_price(destination.price, days, input.travelers),
            status: BookingStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
            payment_method: input
                .payment_method
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_PAYMENT_METHOD.to_string()),
            version: 0,
            created_at: now,
            updated_at: now,
        };
        let created = self.bookings.create(&booking).await?;

        // A delete that read the destination before this booking existed
        // must fail its version check, so the touch comes after the insert.
        if let Err(err) = self.destinations.touch(destination.id, now).await {
            self.bookings.remove(created.id).await?;
            warn!(
                booking_id = %created.id,
                destination_id = %destination.id,
                "Destination removed while booking; booking withdrawn"
            );
            return Err(err);
        }

        info!(
            booking_id = %created.id,
            user_id = %created.user_id,
            destination_id = %created.destination_id,
            days,
            travelers = created.travelers,
            total_price = created.total_price,
            "Booking created"
        );

        let user = self.users.find_by_id(ctx.user_id).await?.map(|u| u.summary());
        Ok(BookingDetails {
            booking: created,
            destination: Some(destination),
            user,
        })
    }

    /// Fetch one booking. Owner or admin only.
    pub async fn get(&self, ctx: &RequestContext, id: BookingId) -> AppResult<BookingDetails> {
        let booking = self.load(id).await?;
        authorize_owner_or_admin(ctx.user_id, ctx.role, booking.user_id)?;
        self.details(booking).await
    }

    /// Cancel a booking. Owner or admin.
    pub async fn cancel(&self, ctx: &RequestContext, id: BookingId) -> AppResult<BookingDetails> {
        self.change_status(ctx, id, BookingStatus::Cancelled).await
    }

    /// Move a booking to the status named by `status`.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        id: BookingId,
        status: &str,
    ) -> AppResult<BookingDetails> {
        let target: BookingStatus = status.trim().parse()?;
        self.change_status(ctx, id, target).await
    }

    async fn change_status(
        &self,
        ctx: &RequestContext,
        id: BookingId,
        target: BookingStatus,
    ) -> AppResult<BookingDetails> {
        let mut booking = self.load(id).await?;
        authorize_status_change(ctx.user_id, ctx.role, booking.user_id, target)?;

        let from = booking.status;
        booking.transition(target, Utc::now())?;
        let updated = self.bookings.update(&booking).await?;

        info!(
            booking_id = %id,
            actor_id = %ctx.user_id,
            from = %from,
            to = %updated.status,
            payment_status = %updated.payment_status,
            "Booking status changed"
        );
        self.details(updated).await
    }

    /// Update payment status and/or method. Owner or admin.
    pub async fn update_payment(
        &self,
        ctx: &RequestContext,
        id: BookingId,
        input: PaymentInput,
    ) -> AppResult<BookingDetails> {
        let status = input
            .payment_status
            .as_deref()
            .map(|s| s.trim().parse::<PaymentStatus>())
            .transpose()?;
        if status.is_none() && input.payment_method.is_none() {
            return Err(AppError::validation(
                "paymentStatus or paymentMethod is required",
            ));
        }

        let mut booking = self.load(id).await?;
        authorize_owner_or_admin(ctx.user_id, ctx.role, booking.user_id)?;

        booking.update_payment(status, input.payment_method, Utc::now())?;
        let updated = self.bookings.update(&booking).await?;

        info!(
            booking_id = %id,
            actor_id = %ctx.user_id,
            payment_status = %updated.payment_status,
            payment_method = %updated.payment_method,
            "Booking payment updated"
        );
        self.details(updated).await
    }

    /// Bookings of one user, newest first. Self or admin.
    pub async fn list_for_user(
        &self,
        ctx: &RequestContext,
        user_id: UserId,
    ) -> AppResult<Vec<BookingDetails>> {
        authorize_owner_or_admin(ctx.user_id, ctx.role, user_id)?;
        let bookings = self.bookings.find_by_user(user_id).await?;
        self.details_many(bookings).await
    }

    /// Every booking, newest first. Admin only.
    pub async fn list_all(&self, ctx: &RequestContext) -> AppResult<Vec<BookingDetails>> {
        require_admin(ctx)?;
        let bookings = self.bookings.find_all().await?;
        self.details_many(bookings).await
    }

    async fn load(&self, id: BookingId) -> AppResult<Booking> {
        self.bookings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))
    }

    async fn details(&self, booking: Booking) -> AppResult<BookingDetails> {
        let destination = self.destinations.find_by_id(booking.destination_id).await?;
        let user = self
            .users
            .find_by_id(booking.user_id)
            .await?
            .map(|u| u.summary());
        Ok(BookingDetails {
            booking,
            destination,
            user,
        })
    }

    async fn details_many(&self, bookings: Vec<Booking>) -> AppResult<Vec<BookingDetails>> {
        let mut destination_ids: Vec<DestinationId> =
            bookings.iter().map(|b| b.destination_id).collect();
        destination_ids.sort_by_key(|id| id.into_uuid());
        destination_ids.dedup();

        let mut user_ids: Vec<UserId> = bookings.iter().map(|b| b.user_id).collect();
        user_ids.sort_by_key(|id| id.into_uuid());
        user_ids.dedup();

        let destinations: HashMap<_, _> = self
            .destinations
            .find_by_ids(&destination_ids)
            .await?
            .into_iter()
            .map(|d| (d.id, d))
            .collect();
        let users: HashMap<_, _> = self
            .users
            .find_by_ids(&user_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u.summary()))
            .collect();

        Ok(bookings
            .into_iter()
            .map(|booking| BookingDetails {
                destination: destinations.get(&booking.destination_id).cloned(),
                user: users.get(&booking.user_id).cloned(),
                booking,
            })
            .collect())
    }
}
