use thiserror::Error;

/// Error for project catalog operations.
#[derive(Debug, Clone, Error)]
pub enum ProjectError {
    #[error("Project not found: {0}")]
    NotFound(String),

    #[error("Record store error: {0}")]
    Store(String),
}
