//! Catalog service.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use travelhub_core::error::AppError;
use travelhub_core::result::AppResult;
use travelhub_core::types::{DestinationId, UserId};
use travelhub_database::{BookingRepository, DestinationRepository, UserRepository};
use travelhub_entity::destination::{CatalogMeta, Destination, DestinationFilter};

use super::input::DestinationInput;
use super::view::ResolvedDestination;
use crate::context::RequestContext;

/// Public catalog reads and admin catalog maintenance.
#[derive(Debug, Clone)]
pub struct CatalogService {
    destinations: Arc<dyn DestinationRepository>,
    bookings: Arc<dyn BookingRepository>,
    users: Arc<dyn UserRepository>,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(
        destinations: Arc<dyn DestinationRepository>,
        bookings: Arc<dyn BookingRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            destinations,
            bookings,
            users,
        }
    }

    /// Listed destinations matching every supplied filter, newest first.
    pub async fn query(&self, filter: DestinationFilter) -> AppResult<Vec<Destination>> {
        self.destinations.query(&filter.normalized()).await
    }

    /// Filter values for the catalog UI.
    pub async fn meta(&self) -> AppResult<CatalogMeta> {
        self.destinations.meta().await
    }

    /// Fetch a destination with reviewer names resolved.
    pub async fn get(&self, id: DestinationId) -> AppResult<ResolvedDestination> {
        let destination = self.load(id).await?;
        self.resolve(destination).await
    }

    /// Load a destination, treating removed ones as missing.
    pub async fn load(&self, id: DestinationId) -> AppResult<Destination> {
        self.destinations
            .find_by_id(id)
            .await?
            .filter(|d| d.deleted_at.is_none())
            .ok_or_else(|| AppError::not_found("Destination not found"))
    }

    /// Look up the authors of a destination's reviews.
    pub async fn resolve(&self, destination: Destination) -> AppResult<ResolvedDestination> {
        let mut ids: Vec<UserId> = destination.reviews.iter().map(|r| r.user_id).collect();
        ids.sort_by_key(|id| id.into_uuid());
        ids.dedup();

        let reviewers: HashMap<_, _> = self
            .users
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u.summary()))
            .collect();

        Ok(ResolvedDestination::new(destination, &reviewers))
    }

    /// All destinations that have not been removed, including unavailable ones.
    pub async fn list_all(&self, ctx: &RequestContext) -> AppResult<Vec<Destination>> {
        require_admin(ctx)?;
        self.destinations.find_all().await
    }

    /// Create a destination.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: DestinationInput,
    ) -> AppResult<Destination> {
        require_admin(ctx)?;
        let data = input.into_new()?;
        let destination = Destination::from_new(data, Utc::now());
        let created = self.destinations.create(&destination).await?;

        info!(
            destination_id = %created.id,
            name = %created.name,
            admin_id = %ctx.user_id,
            "Destination created"
        );
        Ok(created)
    }

    /// Apply a partial update.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: DestinationId,
        input: DestinationInput,
    ) -> AppResult<Destination> {
        require_admin(ctx)?;
        let mut destination = self.load(id).await?;
        input.apply_to(&mut destination, Utc::now())?;
        let updated = self.destinations.update(&destination).await?;

        info!(destination_id = %id, admin_id = %ctx.user_id, "Destination updated");
        Ok(updated)
    }

    /// Remove a destination from the catalog.
    ///
    /// Refused while pending or confirmed bookings reference it. Removal is
    /// soft so past bookings keep resolving their destination.
    pub async fn delete(&self, ctx: &RequestContext, id: DestinationId) -> AppResult<()> {
        require_admin(ctx)?;
        let destination = self.load(id).await?;

        let active = self.bookings.count_active_for_destination(id).await?;
        if active > 0 {
            return Err(AppError::conflict(format!(
                "Destination has {active} active booking(s) and cannot be deleted"
            )));
        }

        self.destinations
            .soft_delete(id, destination.version, Utc::now())
            .await?;

        info!(destination_id = %id, admin_id = %ctx.user_id, "Destination deleted");
        Ok(())
    }
}

/// Reject callers without the admin role.
pub(crate) fn require_admin(ctx: &RequestContext) -> AppResult<()> {
    if ctx.is_admin() {
        Ok(())
    } else {
        Err(AppError::forbidden("Admin access required"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::booking::{BookingService, NewBookingInput};
    use crate::testing::{Fixture, SlowBookings, SlowDestinations, days_from_now};
    use travelhub_core::error::ErrorKind;

    fn one_night(destination_id: DestinationId) -> NewBookingInput {
        NewBookingInput {
            destination_id,
            start_date: days_from_now(1),
            end_date: days_from_now(2),
            travelers: 1,
            notes: None,
            payment_method: None,
        }
    }

    #[tokio::test]
    async fn test_non_admin_cannot_edit_catalog() {
        let fx = Fixture::new();
        let alice = fx.user("Alice").await;
        let err = fx
            .catalog
            .create(&alice, DestinationInput::default())
            .await
            .unwrap_err();
        assert!(err.is(ErrorKind::Authorization));
    }

    #[tokio::test]
    async fn test_query_normalizes_filters() {
        let fx = Fixture::new();
        fx.destination("Lisbon", 100.0).await;
        fx.destination("Porto", 300.0).await;

        let all = fx
            .catalog
            .query(DestinationFilter {
                country: Some("all".into()),
                category: Some("all".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(all.len(), 2);

        let cheap = fx
            .catalog
            .query(DestinationFilter {
                max_price: Some(100.0),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(cheap.len(), 1);
        assert_eq!(cheap[0].name, "Lisbon");

        let none = fx
            .catalog
            .query(DestinationFilter {
                category: Some("Volcano".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_delete_refused_while_bookings_active() {
        let fx = Fixture::new();
        let alice = fx.user("Alice").await;
        let lisbon = fx.destination("Lisbon", 100.0).await;
        let booking = fx
            .bookings
            .create(
                &alice,
                NewBookingInput {
                    destination_id: lisbon.id,
                    start_date: days_from_now(1),
                    end_date: days_from_now(2),
                    travelers: 1,
                    notes: None,
                    payment_method: None,
                },
            )
            .await
            .unwrap()
            .booking;

        let err = fx.catalog.delete(&fx.admin, lisbon.id).await.unwrap_err();
        assert!(err.is(ErrorKind::Conflict));

        fx.bookings.cancel(&alice, booking.id).await.unwrap();
        fx.catalog.delete(&fx.admin, lisbon.id).await.unwrap();

        let err = fx.catalog.get(lisbon.id).await.unwrap_err();
        assert!(err.is(ErrorKind::NotFound));
        let err = fx.catalog.delete(&fx.admin, lisbon.id).await.unwrap_err();
        assert!(err.is(ErrorKind::NotFound));

        let history = fx.bookings.get(&alice, booking.id).await.unwrap();
        assert_eq!(history.destination.unwrap().name, "Lisbon");
    }

    #[tokio::test]
    async fn test_meta_lists_distinct_values() {
        let fx = Fixture::new();
        fx.destination("Lisbon", 100.0).await;
        fx.destination("Porto", 100.0).await;

        let meta = fx.catalog.meta().await.unwrap();
        assert_eq!(meta.countries, vec!["Portugal"]);
        assert_eq!(meta.categories, vec!["City"]);
        assert_eq!(meta.ratings, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_delete_during_booking_withdraws_the_booking() {
        let fx = Fixture::new();
        let alice = fx.user("Alice").await;
        let lisbon = fx.destination("Lisbon", 100.0).await;
        let slow_bookings = BookingService::new(
            fx.db.bookings(),
            Arc::new(SlowDestinations {
                inner: fx.db.destinations(),
                delay: Duration::from_millis(100),
            }),
            fx.db.users(),
        );

        let (created, deleted) = tokio::join!(
            slow_bookings.create(&alice, one_night(lisbon.id)),
            fx.catalog.delete(&fx.admin, lisbon.id),
        );

        deleted.unwrap();
        assert!(created.unwrap_err().is(ErrorKind::NotFound));
        let active = fx.db.bookings().count_active_for_destination(lisbon.id).await.unwrap();
        assert_eq!(active, 0);
        assert!(fx.bookings.list_all(&fx.admin).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_booking_during_delete_blocks_the_delete() {
        let fx = Fixture::new();
        let alice = fx.user("Alice").await;
        let lisbon = fx.destination("Lisbon", 100.0).await;
        let slow_catalog = CatalogService::new(
            fx.db.destinations(),
            Arc::new(SlowBookings {
                inner: fx.db.bookings(),
                delay: Duration::from_millis(100),
            }),
            fx.db.users(),
        );

        let (deleted, created) = tokio::join!(
            slow_catalog.delete(&fx.admin, lisbon.id),
            fx.bookings.create(&alice, one_night(lisbon.id)),
        );

        assert!(deleted.unwrap_err().is(ErrorKind::Conflict));
        let booking = created.unwrap().booking;
        let stored = fx.catalog.get(lisbon.id).await.unwrap();
        assert_eq!(stored.destination.name, "Lisbon");
        assert_eq!(
            fx.db.bookings().count_active_for_destination(lisbon.id).await.unwrap(),
            1
        );
        assert_eq!(booking.destination_id, lisbon.id);
    }
}
