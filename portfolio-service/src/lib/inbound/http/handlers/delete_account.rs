use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::ports::AccountServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Irreversible. The user's like records stay behind; reads elsewhere
/// tolerate the orphans.
pub async fn delete_account(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<DeleteAccountResponseData>, ApiError> {
    match state.account_service.delete_account(&user.id).await {
        Ok(()) => Ok(ApiSuccess::new(
            StatusCode::OK,
            DeleteAccountResponseData {
                message: "Account deleted successfully".to_string(),
            },
        )),
        Err(e) => Err(ApiError::internal(e, "Failed to delete account")),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteAccountResponseData {
    pub message: String,
}
