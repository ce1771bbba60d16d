use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::ProjectView;
use crate::domain::like::ports::LikeServicePort;
use crate::domain::models::RecordId;
use crate::domain::project::errors::ProjectError;
use crate::domain::project::ports::ProjectServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    identity: Option<Extension<AuthenticatedUser>>,
) -> Result<ApiSuccess<ProjectView>, ApiError> {
    let project = state
        .project_service
        .get_project(&RecordId::new(id))
        .await
        .map_err(|e| match e {
            ProjectError::NotFound(_) => ApiError::NotFound("Project not found".to_string()),
            other => ApiError::internal(other, "Failed to fetch project"),
        })?;

    let mut view = ProjectView::from(&project);
    if let Some(Extension(AuthenticatedUser(user))) = &identity {
        view.is_liked = Some(
            state
                .like_service
                .has_liked(&user.id, project.external_id)
                .await
                .map_err(|e| ApiError::internal(e, "Failed to fetch project"))?,
        );
    }

    Ok(ApiSuccess::new(StatusCode::OK, view))
}
