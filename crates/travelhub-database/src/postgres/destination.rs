//! PostgreSQL destination repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};

use travelhub_core::error::AppError;
use travelhub_core::result::AppResult;
use travelhub_core::types::DestinationId;
use travelhub_entity::destination::{CatalogMeta, Destination, DestinationFilter, RATING_SCALE};

use super::db_error;
use crate::repositories::{DestinationRepository, stale_write};

const LISTED: &str = "available = TRUE AND deleted_at IS NULL";

/// Destination storage in the `destinations` table.
#[derive(Debug, Clone)]
pub struct PgDestinationRepository {
    pool: PgPool,
}

impl PgDestinationRepository {
    /// Create a new destination repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Append the WHERE clause for a normalized filter.
fn push_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &DestinationFilter) {
    qb.push(" WHERE ").push(LISTED);

    if let Some(search) = &filter.search {
        let pattern = format!("%{}%", escape_like(search));
        qb.push(" AND (name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR location ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR country ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR description ILIKE ")
            .push_bind(pattern)
            .push(")");
    }
    if let Some(country) = &filter.country {
        qb.push(" AND country = ").push_bind(country.clone());
    }
    if let Some(category) = &filter.category {
        qb.push(" AND category::text = ").push_bind(category.clone());
    }
    if let Some(min) = filter.min_price {
        qb.push(" AND price >= ").push_bind(min);
    }
    if let Some(max) = filter.max_price {
        qb.push(" AND price <= ").push_bind(max);
    }
    if let Some(min_rating) = filter.min_rating {
        qb.push(" AND (rating >= ")
            .push_bind(min_rating)
            .push(" OR average_rating >= ")
            .push_bind(min_rating)
            .push(")");
    }
}

/// Escape LIKE metacharacters so user input matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl DestinationRepository for PgDestinationRepository {
    async fn find_by_id(&self, id: DestinationId) -> AppResult<Option<Destination>> {
        sqlx::query_as::<_, Destination>("SELECT * FROM destinations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find destination by id"))
    }

    async fn find_by_ids(&self, ids: &[DestinationId]) -> AppResult<Vec<Destination>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<uuid::Uuid> = ids.iter().map(|id| id.into_uuid()).collect();
        sqlx::query_as::<_, Destination>("SELECT * FROM destinations WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to load destinations"))
    }

    async fn query(&self, filter: &DestinationFilter) -> AppResult<Vec<Destination>> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM destinations");
        push_filter(&mut qb, filter);
        qb.push(" ORDER BY created_at DESC");

        qb.build_query_as::<Destination>()
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to query destinations"))
    }

    async fn meta(&self) -> AppResult<CatalogMeta> {
        let sql = format!(
            "SELECT DISTINCT country FROM destinations WHERE {LISTED} AND country <> '' ORDER BY country"
        );
        let countries: Vec<String> = sqlx::query_scalar(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list countries"))?;

        let sql = format!(
            "SELECT DISTINCT category::text AS label FROM destinations WHERE {LISTED} ORDER BY label"
        );
        let categories: Vec<String> = sqlx::query_scalar(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list categories"))?;

        Ok(CatalogMeta {
            countries,
            categories,
            ratings: RATING_SCALE.to_vec(),
        })
    }

    async fn find_all(&self) -> AppResult<Vec<Destination>> {
        sqlx::query_as::<_, Destination>(
            "SELECT * FROM destinations WHERE deleted_at IS NULL ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list destinations"))
    }

    async fn create(&self, d: &Destination) -> AppResult<Destination> {
        sqlx::query_as::<_, Destination>(
            "INSERT INTO destinations (id, name, location, country, description, price, images, \
             duration, category, best_time_to_visit, activities, available, reviews, \
             average_rating, rating, version, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18) \
             RETURNING *",
        )
        .bind(d.id)
        .bind(&d.name)
        .bind(&d.location)
        .bind(&d.country)
        .bind(&d.description)
        .bind(d.price)
        .bind(&d.images)
        .bind(&d.duration)
        .bind(d.category)
        .bind(&d.best_time_to_visit)
        .bind(&d.activities)
        .bind(d.available)
        .bind(Json(&d.reviews))
        .bind(d.average_rating)
        .bind(d.rating)
        .bind(d.version)
        .bind(d.created_at)
        .bind(d.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to create destination"))
    }

    async fn update(&self, d: &Destination) -> AppResult<Destination> {
        let stored = sqlx::query_as::<_, Destination>(
            "UPDATE destinations SET name = $3, location = $4, country = $5, description = $6, \
             price = $7, images = $8, duration = $9, category = $10, best_time_to_visit = $11, \
             activities = $12, available = $13, reviews = $14, average_rating = $15, rating = $16, \
             updated_at = $17, version = version + 1 \
             WHERE id = $1 AND version = $2 AND deleted_at IS NULL \
             RETURNING *",
        )
        .bind(d.id)
        .bind(d.version)
        .bind(&d.name)
        .bind(&d.location)
        .bind(&d.country)
        .bind(&d.description)
        .bind(d.price)
        .bind(&d.images)
        .bind(&d.duration)
        .bind(d.category)
        .bind(&d.best_time_to_visit)
        .bind(&d.activities)
        .bind(d.available)
        .bind(Json(&d.reviews))
        .bind(d.average_rating)
        .bind(d.rating)
        .bind(d.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to update destination"))?;

        stored.ok_or_else(|| stale_write("Destination"))
    }

    async fn soft_delete(
        &self,
        id: DestinationId,
        version: i64,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE destinations SET deleted_at = $3, updated_at = $3, version = version + 1 \
             WHERE id = $1 AND version = $2 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(version)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to delete destination"))?;

        if result.rows_affected() == 0 {
            return Err(stale_write("Destination"));
        }
        Ok(())
    }

    async fn touch(&self, id: DestinationId, now: DateTime<Utc>) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE destinations SET updated_at = $2, version = version + 1 \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to touch destination"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Destination not found"));
        }
        Ok(())
    }

    async fn delete_all(&self) -> AppResult<u64> {
        sqlx::query("DELETE FROM destinations")
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected())
            .map_err(db_error("Failed to clear destinations"))
    }
}
