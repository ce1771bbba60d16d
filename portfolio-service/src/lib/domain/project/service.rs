use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::models::RecordId;
use crate::domain::project::errors::ProjectError;
use crate::domain::project::models::Project;
use crate::domain::project::ports::ProjectRepository;
use crate::domain::project::ports::ProjectServicePort;

/// Domain service for the read-only project catalog.
///
/// Pure pass-through to the repository; the catalog holds no business
/// rules of its own.
pub struct ProjectService<PR>
where
    PR: ProjectRepository,
{
    repository: Arc<PR>,
}

impl<PR> ProjectService<PR>
where
    PR: ProjectRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> ProjectServicePort for ProjectService<PR>
where
    PR: ProjectRepository,
{
    async fn list_projects(&self) -> Result<Vec<Project>, ProjectError> {
        self.repository.list_all().await
    }

    async fn get_project(&self, id: &RecordId) -> Result<Project, ProjectError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProjectError::NotFound(id.to_string()))
    }

    async fn search_projects(&self, keywords: &str) -> Result<Vec<Project>, ProjectError> {
        self.repository.search(keywords).await
    }
}
