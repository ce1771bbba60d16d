use chrono::NaiveDate;

use crate::domain::models::RecordId;

/// Read-only project entry from the external record store.
///
/// Never created or mutated by this service. The like count is derived
/// from the size of the linked like set at read time, not stored
/// independently.
#[derive(Debug, Clone)]
pub struct Project {
    pub id: RecordId,
    /// Human-facing numeric identifier, used when linking likes.
    pub external_id: i64,
    pub title: String,
    pub description: String,
    pub created_at: Option<NaiveDate>,
    pub likes: usize,
    pub picture: Option<String>,
}
