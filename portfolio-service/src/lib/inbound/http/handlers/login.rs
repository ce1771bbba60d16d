use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::non_empty;
use super::ApiError;
use super::ApiSuccess;
use super::UserView;
use crate::domain::user::errors::UserError;
use crate::domain::user::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let (Some(email), Some(password)) = (non_empty(body.email), non_empty(body.password))
    else {
        return Err(ApiError::BadRequest(
            "Email and password are required".to_string(),
        ));
    };

    match state.account_service.login(&email, &password).await {
        Ok(account) => Ok(ApiSuccess::new(
            StatusCode::OK,
            LoginResponseData {
                message: "Login successful".to_string(),
                user: UserView::from(&account.user),
                token: account.token,
            },
        )),
        // One message for unknown email and wrong password alike
        Err(UserError::InvalidCredentials) => Err(ApiError::Unauthorized(
            "Invalid email or password".to_string(),
        )),
        Err(e) => Err(ApiError::internal(e, "Login failed")),
    }
}

/// HTTP request body for login (raw JSON)
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginResponseData {
    pub message: String,
    pub user: UserView,
    pub token: String,
}
