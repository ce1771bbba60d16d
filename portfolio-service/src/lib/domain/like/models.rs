use chrono::NaiveDate;

use crate::domain::models::RecordId;

/// Join record linking one user to one project.
///
/// Invariant: at most one Like exists per (user, project-external-id)
/// pair at any time.
#[derive(Debug, Clone)]
pub struct Like {
    pub id: RecordId,
    pub user_id: RecordId,
    pub project_external_id: i64,
    /// Day granularity; the store keeps a date column, not a timestamp.
    pub created_on: Option<NaiveDate>,
}

/// Result of a successful like operation.
#[derive(Debug, Clone)]
pub struct LikeConfirmation {
    pub like_id: RecordId,
}
