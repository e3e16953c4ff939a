//! In-memory booking repository.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use travelhub_core::error::AppError;
use travelhub_core::result::AppResult;
use travelhub_core::types::{BookingId, DestinationId, UserId};
use travelhub_entity::booking::{Booking, BookingStatus};

use crate::repositories::{BookingRepository, stale_write};

/// Booking storage in a concurrent hash map.
#[derive(Debug, Clone, Default)]
pub struct MemoryBookingRepository {
    rows: Arc<DashMap<BookingId, Booking>>,
}

impl MemoryBookingRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn collect_sorted(&self, keep: impl Fn(&Booking) -> bool) -> Vec<Booking> {
        let mut found: Vec<Booking> = self
            .rows
            .iter()
            .filter(|entry| keep(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        found
    }
}

#[async_trait]
impl BookingRepository for MemoryBookingRepository {
    async fn find_by_id(&self, id: BookingId) -> AppResult<Option<Booking>> {
        Ok(self.rows.get(&id).map(|b| b.clone()))
    }

    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Booking>> {
        Ok(self.collect_sorted(|b| b.user_id == user_id))
    }

    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        Ok(self.collect_sorted(|_| true))
    }

    async fn create(&self, booking: &Booking) -> AppResult<Booking> {
        match self.rows.entry(booking.id) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Booking {} already exists",
                booking.id
            ))),
            Entry::Vacant(slot) => Ok(slot.insert(booking.clone()).value().clone()),
        }
    }

    async fn update(&self, booking: &Booking) -> AppResult<Booking> {
        let mut entry = self
            .rows
            .get_mut(&booking.id)
            .ok_or_else(|| AppError::not_found("Booking not found"))?;
        if entry.version != booking.version {
            return Err(stale_write("Booking"));
        }
        let mut stored = booking.clone();
        stored.version += 1;
        *entry = stored.clone();
        Ok(stored)
    }

    async fn has_completed(
        &self,
        user_id: UserId,
        destination_id: DestinationId,
    ) -> AppResult<bool> {
        Ok(self.rows.iter().any(|b| {
            b.user_id == user_id
                && b.destination_id == destination_id
                && b.status == BookingStatus::Completed
        }))
    }

    async fn count_active_for_destination(&self, destination_id: DestinationId) -> AppResult<i64> {
        Ok(self
            .rows
            .iter()
            .filter(|b| b.destination_id == destination_id && b.status.is_active())
            .count() as i64)
    }

    async fn remove(&self, id: BookingId) -> AppResult<bool> {
        Ok(self.rows.remove(&id).is_some())
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let removed = self.rows.len() as u64;
        self.rows.clear();
        Ok(removed)
    }
}
