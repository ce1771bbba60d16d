use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::like::errors::LikeError;
use crate::domain::like::ports::LikeServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn like_project(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<LikeResponseData>, ApiError> {
    let project_external_id: i64 = id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid project id".to_string()))?;

    match state.like_service.add_like(&user.id, project_external_id).await {
        Ok(confirmation) => Ok(ApiSuccess::new(
            StatusCode::OK,
            LikeResponseData {
                message: "Project liked successfully".to_string(),
                success: true,
                like_id: confirmation.like_id.to_string(),
            },
        )),
        Err(LikeError::AlreadyLiked) => Err(ApiError::BadRequest(
            "You have already liked this project".to_string(),
        )),
        Err(e) => Err(ApiError::internal(e, "Failed to like project")),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponseData {
    pub message: String,
    pub success: bool,
    pub like_id: String,
}
