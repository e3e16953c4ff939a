//! PostgreSQL booking repository.

use async_trait::async_trait;
use sqlx::PgPool;

use travelhub_core::result::AppResult;
use travelhub_core::types::{BookingId, DestinationId, UserId};
use travelhub_entity::booking::Booking;

use super::db_error;
use crate::repositories::{BookingRepository, stale_write};

/// Booking storage in the `bookings` table.
#[derive(Debug, Clone)]
pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn find_by_id(&self, id: BookingId) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find booking by id"))
    }

    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list bookings for user"))
    }

    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list bookings"))
    }

    async fn create(&self, b: &Booking) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, user_id, destination_id, start_date, end_date, travelers, \
             notes, total_price, status, payment_status, payment_method, version, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING *",
        )
        .bind(b.id)
        .bind(b.user_id)
        .bind(b.destination_id)
        .bind(b.start_date)
        .bind(b.end_date)
        .bind(b.travelers)
        .bind(&b.notes)
        .bind(b.total_price)
        .bind(b.status)
        .bind(b.payment_status)
        .bind(&b.payment_method)
        .bind(b.version)
        .bind(b.created_at)
        .bind(b.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create booking"))
    }

    async fn update(&self, b: &Booking) -> AppResult<Booking> {
        let stored = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $3, payment_status = $4, payment_method = $5, \
             notes = $6, updated_at = $7, version = version + 1 \
             WHERE id = $1 AND version = $2 \
             RETURNING *",
        )
        .bind(b.id)
        .bind(b.version)
        .bind(b.status)
        .bind(b.payment_status)
        .bind(&b.payment_method)
        .bind(&b.notes)
        .bind(b.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update booking"))?;

        stored.ok_or_else(|| stale_write("Booking"))
    }

    async fn has_completed(
        &self,
        user_id: UserId,
        destination_id: DestinationId,
    ) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM bookings \
             WHERE user_id = $1 AND destination_id = $2 AND status = 'completed')",
        )
        .bind(user_id)
        .bind(destination_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to check completed bookings"))
    }

    async fn count_active_for_destination(&self, destination_id: DestinationId) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM bookings \
             WHERE destination_id = $1 AND status IN ('pending', 'confirmed')",
        )
        .bind(destination_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to count active bookings"))
    }

    async fn remove(&self, id: BookingId) -> AppResult<bool> {
        sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected() > 0)
            .map_err(db_error("Failed to delete booking"))
    }

    async fn delete_all(&self) -> AppResult<u64> {
        sqlx::query("DELETE FROM bookings")
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected())
            .map_err(db_error("Failed to clear bookings"))
    }
}
