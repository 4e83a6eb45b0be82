use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{
    Aggregate, ListOrder, NewWorkoutRecord, PairScan, RecordId, WorkoutRecord,
};

use super::RecordStore;

/// Async handle on the record store.
///
/// Each call checks the single pooled connection out on a blocking thread,
/// runs the synchronous [`RecordStore`] method and hands the result back, so
/// request handlers never block the runtime.
#[derive(Clone)]
pub struct WorkoutRepository {
    pool: DbPool,
}

impl WorkoutRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn with_store<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&RecordStore<'_>) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            f(&RecordStore::new(&conn))
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn create(&self, record: NewWorkoutRecord) -> Result<RecordId> {
        let id = self
            .with_store(move |store| {
                store.insert(
                    &record.date,
                    &record.calories,
                    &record.distance,
                    &record.description,
                )
            })
            .await?;
        tracing::info!("Added workout {}", id);
        Ok(id)
    }

    pub async fn delete(&self, id: RecordId) -> Result<bool> {
        let removed = self.with_store(move |store| store.delete(id)).await?;
        if removed {
            tracing::info!("Deleted workout {}", id);
        } else {
            tracing::debug!("No workout {} to delete", id);
        }
        Ok(removed)
    }

    pub async fn find_by_id(&self, id: RecordId) -> Result<Option<WorkoutRecord>> {
        self.with_store(move |store| store.find_by_id(id)).await
    }

    pub async fn list_all(&self, order: ListOrder) -> Result<Vec<WorkoutRecord>> {
        self.with_store(move |store| store.list_all(order)).await
    }

    pub async fn aggregate(&self) -> Result<Aggregate> {
        self.with_store(|store| store.aggregate()).await
    }

    pub async fn list_distance_calorie_pairs(&self, order: ListOrder) -> Result<PairScan> {
        self.with_store(move |store| store.list_distance_calorie_pairs(order))
            .await
    }
}
