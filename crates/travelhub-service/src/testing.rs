//! Fixtures shared by the service unit tests.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use travelhub_core::result::AppResult;
use travelhub_core::types::{BookingId, DestinationId, UserId};
use travelhub_database::{BookingRepository, Database, DestinationRepository};
use travelhub_entity::booking::Booking;
use travelhub_entity::destination::{CatalogMeta, Destination, DestinationFilter};
use travelhub_entity::user::{CreateUser, UserRole};

use crate::booking::BookingService;
use crate::catalog::{CatalogService, DestinationInput};
use crate::context::RequestContext;
use crate::review::ReviewService;

pub(crate) struct Fixture {
    pub db: Database,
    pub catalog: Arc<CatalogService>,
    pub bookings: BookingService,
    pub reviews: ReviewService,
    pub admin: RequestContext,
}

impl Fixture {
    pub fn new() -> Self {
        let db = Database::in_memory();
        let catalog = Arc::new(CatalogService::new(db.destinations(), db.bookings(), db.users()));
        let bookings = BookingService::new(db.bookings(), db.destinations(), db.users());
        let reviews = ReviewService::new(db.destinations(), db.bookings(), Arc::clone(&catalog));
        Self {
            db,
            catalog,
            bookings,
            reviews,
            admin: RequestContext::new(UserId::new(), UserRole::Admin, "Admin"),
        }
    }

    pub async fn user(&self, name: &str) -> RequestContext {
        let user = self
            .db
            .users()
            .create(&CreateUser {
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase()),
                password_hash: "unused".to_string(),
                role: UserRole::User,
            })
            .await
            .unwrap();
        RequestContext::new(user.id, user.role, user.name)
    }

    pub async fn destination(&self, name: &str, price: f64) -> Destination {
        self.catalog
            .create(
                &self.admin,
                DestinationInput {
                    name: Some(name.to_string()),
                    location: Some(format!("{name} Old Town")),
                    country: Some("Portugal".to_string()),
                    description: Some(format!("Visit {name}")),
                    price: Some(price),
                    images: Some(vec![format!("https://img.example/{name}.jpg")]),
                    duration: Some("3 days".to_string()),
                    category: Some("City".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
    }
}

pub(crate) fn days_from_now(days: i64) -> chrono::DateTime<Utc> {
    Utc::now() + chrono::Duration::days(days)
}

/// Destination repository whose `find_by_id` returns its result only after
/// a pause, so a caller acts on a read that has gone stale.
#[derive(Debug)]
pub(crate) struct SlowDestinations {
    pub inner: Arc<dyn DestinationRepository>,
    pub delay: Duration,
}

#[async_trait]
impl DestinationRepository for SlowDestinations {
    async fn find_by_id(&self, id: DestinationId) -> AppResult<Option<Destination>> {
        let found = self.inner.find_by_id(id).await?;
        tokio::time::sleep(self.delay).await;
        Ok(found)
    }

    async fn find_by_ids(&self, ids: &[DestinationId]) -> AppResult<Vec<Destination>> {
        self.inner.find_by_ids(ids).await
    }

    async fn query(&self, filter: &DestinationFilter) -> AppResult<Vec<Destination>> {
        self.inner.query(filter).await
    }

    async fn meta(&self) -> AppResult<CatalogMeta> {
        self.inner.meta().await
    }

    async fn find_all(&self) -> AppResult<Vec<Destination>> {
        self.inner.find_all().await
    }

    async fn create(&self, destination: &Destination) -> AppResult<Destination> {
        self.inner.create(destination).await
    }

    async fn update(&self, destination: &Destination) -> AppResult<Destination> {
        self.inner.update(destination).await
    }

    async fn soft_delete(&self, id: DestinationId, version: i64, now: DateTime<Utc>) -> AppResult<()> {
        self.inner.soft_delete(id, version, now).await
    }

    async fn touch(&self, id: DestinationId, now: DateTime<Utc>) -> AppResult<()> {
        self.inner.touch(id, now).await
    }

    async fn delete_all(&self) -> AppResult<u64> {
        self.inner.delete_all().await
    }
}

/// Booking repository whose active-booking count returns only after a
/// pause.
#[derive(Debug)]
pub(crate) struct SlowBookings {
    pub inner: Arc<dyn BookingRepository>,
    pub delay: Duration,
}

#[async_trait]
impl BookingRepository for SlowBookings {
    async fn find_by_id(&self, id: BookingId) -> AppResult<Option<Booking>> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Booking>> {
        self.inner.find_by_user(user_id).await
    }

    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        self.inner.find_all().await
    }

    async fn create(&self, booking: &Booking) -> AppResult<Booking> {
        self.inner.create(booking).await
    }

    async fn update(&self, booking: &Booking) -> AppResult<Booking> {
        self.inner.update(booking).await
    }

    async fn has_completed(&self, user_id: UserId, destination_id: DestinationId) -> AppResult<bool> {
        self.inner.has_completed(user_id, destination_id).await
    }

    async fn count_active_for_destination(&self, destination_id: DestinationId) -> AppResult<i64> {
        let count = self.inner.count_active_for_destination(destination_id).await?;
        tokio::time::sleep(self.delay).await;
        Ok(count)
    }

    async fn remove(&self, id: BookingId) -> AppResult<bool> {
        self.inner.remove(id).await
    }

    async fn delete_all(&self) -> AppResult<u64> {
        self.inner.delete_all().await
    }
}
