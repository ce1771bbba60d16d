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

pub async fn unlike_project(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<UnlikeResponseData>, ApiError> {
    let project_external_id: i64 = id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid project id".to_string()))?;

    match state
        .like_service
        .remove_like(&user.id, project_external_id)
        .await
    {
        Ok(()) => Ok(ApiSuccess::new(
            StatusCode::OK,
            UnlikeResponseData {
                message: "Like removed successfully".to_string(),
            },
        )),
        Err(LikeError::NotFound) => Err(ApiError::NotFound("Like not found".to_string())),
        Err(e) => Err(ApiError::internal(e, "Failed to remove like")),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnlikeResponseData {
    pub message: String,
}
