use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::non_empty;
use super::ApiError;
use super::ApiSuccess;
use super::ProfileView;
use crate::domain::user::models::PhoneNumber;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::ports::AccountServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<ApiSuccess<UpdateProfileResponseData>, ApiError> {
    let command = UpdateProfileCommand {
        first_name: non_empty(body.first_name),
        last_name: non_empty(body.last_name),
        // Unparseable input degrades to "not supplied"
        phone: body.phone.as_deref().and_then(PhoneNumber::normalize),
    };

    match state.account_service.update_profile(&user.id, command).await {
        Ok(updated) => Ok(ApiSuccess::new(
            StatusCode::OK,
            UpdateProfileResponseData {
                message: "Profile updated successfully".to_string(),
                user: ProfileView::from(&updated),
            },
        )),
        Err(e) => Err(ApiError::internal(e, "Failed to update profile")),
    }
}

/// HTTP request body for a partial profile update (raw JSON)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    first_name: Option<String>,
    last_name: Option<String>,
    phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateProfileResponseData {
    pub message: String,
    pub user: ProfileView,
}
