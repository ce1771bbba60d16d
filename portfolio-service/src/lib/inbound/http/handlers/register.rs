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
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::PhoneNumber;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::ports::AccountServicePort;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    let command = body.try_into_command()?;

    match state.account_service.register(command).await {
        Ok(account) => Ok(ApiSuccess::new(
            StatusCode::CREATED,
            RegisterResponseData {
                message: "User created successfully".to_string(),
                user: UserView::from(&account.user),
                token: account.token,
            },
        )),
        Err(UserError::EmailAlreadyExists(_)) => Err(ApiError::BadRequest(
            "User already exists with this email".to_string(),
        )),
        Err(e) => Err(ApiError::internal(e, "Failed to create user")),
    }
}

/// HTTP request body for registration (raw JSON)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    email: Option<String>,
    password: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    phone: Option<String>,
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterCommand, ApiError> {
        let (Some(email), Some(password), Some(first_name), Some(last_name)) = (
            non_empty(self.email),
            non_empty(self.password),
            non_empty(self.first_name),
            non_empty(self.last_name),
        ) else {
            return Err(ApiError::BadRequest(
                "Email, password, firstName and lastName are required".to_string(),
            ));
        };

        let email =
            EmailAddress::new(email).map_err(|e| ApiError::BadRequest(e.to_string()))?;

        // An unparseable phone is dropped rather than stored
        let phone = self.phone.as_deref().and_then(PhoneNumber::normalize);

        Ok(RegisterCommand {
            email,
            password,
            first_name,
            last_name,
            phone,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterResponseData {
    pub message: String,
    pub user: UserView,
    pub token: String,
}
