use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::models::RecordId;
use crate::domain::project::errors::ProjectError;
use crate::domain::project::models::Project;
use crate::domain::project::ports::ProjectRepository;
use crate::outbound::records::formula_string;
use crate::outbound::records::ApiRecord;
use crate::outbound::records::RecordStoreClient;
use crate::outbound::records::RecordStoreError;

/// Projects-table adapter. Read-only: this service never writes the
/// projects table.
pub struct RecordStoreProjectRepository {
    client: Arc<RecordStoreClient>,
    table: String,
}

impl RecordStoreProjectRepository {
    pub fn new(client: Arc<RecordStoreClient>, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProjectFields {
    /// Human-facing numeric identifier ("external id")
    id: i64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "createdAt", default)]
    created_at: Option<NaiveDate>,
    /// Linked like record ids; the like count is the size of this set
    #[serde(rename = "Like", default)]
    like_links: Vec<String>,
    #[serde(default)]
    picture: Vec<Attachment>,
}

#[derive(Debug, Deserialize)]
struct Attachment {
    url: String,
}

fn into_project(record: ApiRecord<ProjectFields>) -> Project {
    Project {
        id: RecordId::new(record.id),
        external_id: record.fields.id,
        title: record.fields.title,
        description: record.fields.description,
        created_at: record.fields.created_at,
        likes: record.fields.like_links.len(),
        picture: record.fields.picture.into_iter().next().map(|a| a.url),
    }
}

fn store_error(e: RecordStoreError) -> ProjectError {
    ProjectError::Store(e.to_string())
}

#[async_trait]
impl ProjectRepository for RecordStoreProjectRepository {
    async fn list_all(&self) -> Result<Vec<Project>, ProjectError> {
        let records = self
            .client
            .select(&self.table, None)
            .await
            .map_err(store_error)?;

        Ok(records.into_iter().map(into_project).collect())
    }

    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Project>, ProjectError> {
        let record = self
            .client
            .find(&self.table, id.as_str())
            .await
            .map_err(store_error)?;

        Ok(record.map(into_project))
    }

    async fn search(&self, keywords: &str) -> Result<Vec<Project>, ProjectError> {
        let needle = formula_string(keywords);
        let formula = format!("OR(SEARCH({needle}, {{title}}), SEARCH({needle}, {{description}}))");

        let records = self
            .client
            .select(&self.table, Some(&formula))
            .await
            .map_err(store_error)?;

        Ok(records.into_iter().map(into_project).collect())
    }
}
