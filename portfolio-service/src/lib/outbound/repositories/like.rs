use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::like::errors::LikeError;
use crate::domain::like::models::Like;
use crate::domain::like::ports::LikeRepository;
use crate::domain::models::RecordId;
use crate::outbound::records::formula_string;
use crate::outbound::records::ApiRecord;
use crate::outbound::records::RecordStoreClient;
use crate::outbound::records::RecordStoreError;

/// Likes-table adapter.
///
/// The table links likes to users through a linked-record column and to
/// projects through the project's external id stored as plain text.
pub struct RecordStoreLikeRepository {
    client: Arc<RecordStoreClient>,
    table: String,
}

impl RecordStoreLikeRepository {
    pub fn new(client: Arc<RecordStoreClient>, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }

    fn pair_formula(user_id: &RecordId, project_external_id: i64) -> String {
        format!(
            "AND({{user}} = {}, {{project}} = {})",
            formula_string(user_id.as_str()),
            formula_string(&project_external_id.to_string())
        )
    }
}

#[derive(Debug, Deserialize)]
struct LikeFields {
    /// Linked user record ids (a single-element link in practice)
    #[serde(default)]
    user: Vec<String>,
    #[serde(default)]
    project: String,
    #[serde(rename = "createdAt", default)]
    created_at: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
struct NewLikeFields<'a> {
    user: [&'a str; 1],
    project: String,
    #[serde(rename = "createdAt")]
    created_at: NaiveDate,
}

fn into_like(record: ApiRecord<LikeFields>) -> Result<Like, LikeError> {
    let user_id = record
        .fields
        .user
        .into_iter()
        .next()
        .map(RecordId::new)
        .ok_or_else(|| LikeError::Store("like record has no user link".to_string()))?;

    let project_external_id = record
        .fields
        .project
        .parse::<i64>()
        .map_err(|_| LikeError::Store("like record has a non-numeric project id".to_string()))?;

    Ok(Like {
        id: RecordId::new(record.id),
        user_id,
        project_external_id,
        created_on: record.fields.created_at,
    })
}

fn store_error(e: RecordStoreError) -> LikeError {
    LikeError::Store(e.to_string())
}

#[async_trait]
impl LikeRepository for RecordStoreLikeRepository {
    async fn find(
        &self,
        user_id: &RecordId,
        project_external_id: i64,
    ) -> Result<Option<Like>, LikeError> {
        let formula = Self::pair_formula(user_id, project_external_id);

        let records = self
            .client
            .select(&self.table, Some(&formula))
            .await
            .map_err(store_error)?;

        // The invariant allows at most one; take the first match
        records.into_iter().next().map(into_like).transpose()
    }

    async fn create(
        &self,
        user_id: &RecordId,
        project_external_id: i64,
        created_on: NaiveDate,
    ) -> Result<Like, LikeError> {
        let fields = NewLikeFields {
            user: [user_id.as_str()],
            project: project_external_id.to_string(),
            created_at: created_on,
        };

        let record = self
            .client
            .create(&self.table, &fields)
            .await
            .map_err(store_error)?;

        into_like(record)
    }

    async fn delete(&self, like_id: &RecordId) -> Result<(), LikeError> {
        self.client
            .destroy(&self.table, like_id.as_str())
            .await
            .map_err(store_error)
    }
}
