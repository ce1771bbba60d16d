use async_trait::async_trait;

use crate::domain::models::RecordId;
use crate::domain::project::errors::ProjectError;
use crate::domain::project::models::Project;

/// Port for read-only catalog operations.
#[async_trait]
pub trait ProjectServicePort: Send + Sync + 'static {
    /// List every project in the catalog.
    ///
    /// # Errors
    /// * `Store` - Record store operation failed
    async fn list_projects(&self) -> Result<Vec<Project>, ProjectError>;

    /// Retrieve a single project by store record id.
    ///
    /// # Errors
    /// * `NotFound` - No such project
    /// * `Store` - Record store operation failed
    async fn get_project(&self, id: &RecordId) -> Result<Project, ProjectError>;

    /// Full-text search over title and description.
    ///
    /// # Errors
    /// * `Store` - Record store operation failed
    async fn search_projects(&self, keywords: &str) -> Result<Vec<Project>, ProjectError>;
}

/// Read operations against the projects table.
#[async_trait]
pub trait ProjectRepository: Send + Sync + 'static {
    /// Retrieve all project records.
    ///
    /// # Errors
    /// * `Store` - Record store operation failed
    async fn list_all(&self) -> Result<Vec<Project>, ProjectError>;

    /// Retrieve a project by store record id.
    ///
    /// # Errors
    /// * `Store` - Record store operation failed
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Project>, ProjectError>;

    /// Search title and description for the given keywords.
    ///
    /// # Errors
    /// * `Store` - Record store operation failed
    async fn search(&self, keywords: &str) -> Result<Vec<Project>, ProjectError>;
}
