use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::like::errors::LikeError;
use crate::domain::like::models::Like;
use crate::domain::like::models::LikeConfirmation;
use crate::domain::models::RecordId;

/// Port for like toggle operations on a (user, project) pair.
///
/// State machine per pair: NotLiked --add_like--> Liked,
/// Liked --remove_like--> NotLiked. Adding while Liked fails with
/// `AlreadyLiked`; removing while NotLiked fails with `NotFound`.
#[async_trait]
pub trait LikeServicePort: Send + Sync + 'static {
    /// Record a like for the pair.
    ///
    /// # Errors
    /// * `AlreadyLiked` - The pair is already in the Liked state
    /// * `Store` - Record store operation failed
    async fn add_like(
        &self,
        user_id: &RecordId,
        project_external_id: i64,
    ) -> Result<LikeConfirmation, LikeError>;

    /// Remove the pair's like.
    ///
    /// # Errors
    /// * `NotFound` - The pair is not in the Liked state
    /// * `Store` - Record store operation failed
    async fn remove_like(
        &self,
        user_id: &RecordId,
        project_external_id: i64,
    ) -> Result<(), LikeError>;

    /// Check whether the pair is in the Liked state.
    ///
    /// # Errors
    /// * `Store` - Record store operation failed
    async fn has_liked(
        &self,
        user_id: &RecordId,
        project_external_id: i64,
    ) -> Result<bool, LikeError>;
}

/// Persistence operations for like records.
#[async_trait]
pub trait LikeRepository: Send + Sync + 'static {
    /// Find the like for a (user, project-external-id) pair, if any.
    ///
    /// # Errors
    /// * `Store` - Record store operation failed
    async fn find(
        &self,
        user_id: &RecordId,
        project_external_id: i64,
    ) -> Result<Option<Like>, LikeError>;

    /// Create a like record for the pair.
    ///
    /// # Errors
    /// * `Store` - Record store operation failed
    async fn create(
        &self,
        user_id: &RecordId,
        project_external_id: i64,
        created_on: NaiveDate,
    ) -> Result<Like, LikeError>;

    /// Delete a like record by id.
    ///
    /// # Errors
    /// * `Store` - Record store operation failed
    async fn delete(&self, like_id: &RecordId) -> Result<(), LikeError>;
}
