use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::like::errors::LikeError;
use crate::domain::like::models::LikeConfirmation;
use crate::domain::like::ports::LikeRepository;
use crate::domain::like::ports::LikeServicePort;
use crate::domain::models::RecordId;

type PairKey = (RecordId, i64);

/// Domain service enforcing the at-most-one-like-per-pair invariant.
///
/// The record store offers no uniqueness constraint and no
/// transactions, so the check-then-create sequence is serialized per
/// (user, project) pair through an in-process async mutex map. This
/// protects against duplicate inserts within a single process
/// instance; concurrent instances still race through the store.
pub struct LikeService<LR>
where
    LR: LikeRepository,
{
    repository: Arc<LR>,
    pair_locks: Mutex<HashMap<PairKey, Arc<Mutex<()>>>>,
}

impl<LR> LikeService<LR>
where
    LR: LikeRepository,
{
    pub fn new(repository: Arc<LR>) -> Self {
        Self {
            repository,
            pair_locks: Mutex::new(HashMap::new()),
        }
    }

    async fn pair_lock(&self, key: &PairKey) -> Arc<Mutex<()>> {
        let mut locks = self.pair_locks.lock().await;
        Arc::clone(locks.entry(key.clone()).or_default())
    }

    /// Drop the pair's lock entry once no other task holds it, so the
    /// map does not grow with every pair ever touched.
    async fn release_pair_lock(&self, key: &PairKey) {
        let mut locks = self.pair_locks.lock().await;
        if let Some(lock) = locks.get(key) {
            // One reference in the map, one held by the caller
            if Arc::strong_count(lock) <= 2 {
                locks.remove(key);
            }
        }
    }

    async fn add_like_locked(
        &self,
        user_id: &RecordId,
        project_external_id: i64,
    ) -> Result<LikeConfirmation, LikeError> {
        if self
            .repository
            .find(user_id, project_external_id)
            .await?
            .is_some()
        {
            return Err(LikeError::AlreadyLiked);
        }

        let like = self
            .repository
            .create(user_id, project_external_id, Utc::now().date_naive())
            .await?;

        Ok(LikeConfirmation { like_id: like.id })
    }

    async fn remove_like_locked(
        &self,
        user_id: &RecordId,
        project_external_id: i64,
    ) -> Result<(), LikeError> {
        let like = self
            .repository
            .find(user_id, project_external_id)
            .await?
            .ok_or(LikeError::NotFound)?;

        self.repository.delete(&like.id).await
    }
}

#[async_trait]
impl<LR> LikeServicePort for LikeService<LR>
where
    LR: LikeRepository,
{
    async fn add_like(
        &self,
        user_id: &RecordId,
        project_external_id: i64,
    ) -> Result<LikeConfirmation, LikeError> {
        let key = (user_id.clone(), project_external_id);
        let lock = self.pair_lock(&key).await;

        let result = {
            let _guard = lock.lock().await;
            self.add_like_locked(user_id, project_external_id).await
        };

        drop(lock);
        self.release_pair_lock(&key).await;
        result
    }

    async fn remove_like(
        &self,
        user_id: &RecordId,
        project_external_id: i64,
    ) -> Result<(), LikeError> {
        let key = (user_id.clone(), project_external_id);
        let lock = self.pair_lock(&key).await;

        let result = {
            let _guard = lock.lock().await;
            self.remove_like_locked(user_id, project_external_id).await
        };

        drop(lock);
        self.release_pair_lock(&key).await;
        result
    }

    async fn has_liked(
        &self,
        user_id: &RecordId,
        project_external_id: i64,
    ) -> Result<bool, LikeError> {
        // Pure existence check; no serialization needed
        Ok(self
            .repository
            .find(user_id, project_external_id)
            .await?
            .is_some())
    }
}
