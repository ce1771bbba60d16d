use thiserror::Error;

/// Error for like toggle operations.
#[derive(Debug, Clone, Error)]
pub enum LikeError {
    #[error("Like already exists")]
    AlreadyLiked,

    #[error("Like not found")]
    NotFound,

    #[error("Record store error: {0}")]
    Store(String),
}
