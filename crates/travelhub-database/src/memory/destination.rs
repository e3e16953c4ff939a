//! In-memory destination repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use travelhub_core::error::AppError;
use travelhub_core::result::AppResult;
use travelhub_core::types::DestinationId;
use travelhub_entity::destination::{CatalogMeta, Destination, DestinationFilter};

use crate::repositories::{DestinationRepository, stale_write};

/// Destination storage in a concurrent hash map.
#[derive(Debug, Clone, Default)]
pub struct MemoryDestinationRepository {
    rows: Arc<DashMap<DestinationId, Destination>>,
}

impl MemoryDestinationRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn collect_sorted(&self, keep: impl Fn(&Destination) -> bool) -> Vec<Destination> {
        let mut found: Vec<Destination> = self
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
impl DestinationRepository for MemoryDestinationRepository {
    async fn find_by_id(&self, id: DestinationId) -> AppResult<Option<Destination>> {
        Ok(self.rows.get(&id).map(|d| d.clone()))
    }

    async fn find_by_ids(&self, ids: &[DestinationId]) -> AppResult<Vec<Destination>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.rows.get(id).map(|d| d.clone()))
            .collect())
    }

    async fn query(&self, filter: &DestinationFilter) -> AppResult<Vec<Destination>> {
        Ok(self.collect_sorted(|d| filter.matches(d)))
    }

    async fn meta(&self) -> AppResult<CatalogMeta> {
        let listed = self.collect_sorted(Destination::is_listed);
        Ok(CatalogMeta::from_destinations(&listed))
    }

    async fn find_all(&self) -> AppResult<Vec<Destination>> {
        Ok(self.collect_sorted(|d| d.deleted_at.is_none()))
    }

    async fn create(&self, destination: &Destination) -> AppResult<Destination> {
        match self.rows.entry(destination.id) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Destination {} already exists",
                destination.id
            ))),
            Entry::Vacant(slot) => {
                let stored = slot.insert(destination.clone());
                Ok(stored.value().clone())
            }
        }
    }

    async fn update(&self, destination: &Destination) -> AppResult<Destination> {
        let mut entry = self
            .rows
            .get_mut(&destination.id)
            .ok_or_else(|| AppError::not_found("Destination not found"))?;
        if entry.version != destination.version || entry.deleted_at.is_some() {
            return Err(stale_write("Destination"));
        }
        let mut stored = destination.clone();
        stored.version += 1;
        *entry = stored.clone();
        Ok(stored)
    }

    async fn soft_delete(
        &self,
        id: DestinationId,
        version: i64,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        let mut entry = self
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Destination not found"))?;
        if entry.version != version || entry.deleted_at.is_some() {
            return Err(stale_write("Destination"));
        }
        entry.deleted_at = Some(now);
        entry.updated_at = now;
        entry.version += 1;
        Ok(())
    }

    async fn touch(&self, id: DestinationId, now: DateTime<Utc>) -> AppResult<()> {
        let mut entry = self
            .rows
            .get_mut(&id)
            .filter(|d| d.deleted_at.is_none())
            .ok_or_else(|| AppError::not_found("Destination not found"))?;
        entry.updated_at = now;
        entry.version += 1;
        Ok(())
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let removed = self.rows.len() as u64;
        self.rows.clear();
        Ok(removed)
    }
}
