use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::annotated_project_views;
use super::ApiError;
use super::ApiSuccess;
use super::ProjectView;
use crate::domain::project::ports::ProjectServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn search_projects(
    State(state): State<AppState>,
    Path(keywords): Path<String>,
    identity: Option<Extension<AuthenticatedUser>>,
) -> Result<ApiSuccess<Vec<ProjectView>>, ApiError> {
    let projects = state
        .project_service
        .search_projects(&keywords)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to search projects"))?;

    let views = annotated_project_views(&state, identity.as_ref().map(|e| &e.0), &projects)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to search projects"))?;

    Ok(ApiSuccess::new(StatusCode::OK, views))
}
