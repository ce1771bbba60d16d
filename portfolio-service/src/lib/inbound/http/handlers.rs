use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use crate::domain::like::errors::LikeError;
use crate::domain::like::ports::LikeServicePort;
use crate::domain::project::models::Project;
use crate::domain::user::models::User;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub mod delete_account;
pub mod get_profile;
pub mod get_project;
pub mod health;
pub mod like_project;
pub mod list_projects;
pub mod login;
pub mod register;
pub mod search_projects;
pub mod unlike_project;
pub mod update_profile;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Wire-level error taxonomy. Bodies are always `{"error": message}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    InternalServerError(String),
}

impl ApiError {
    /// Log the underlying failure at full detail and surface only a
    /// generic message to the caller.
    pub fn internal(err: impl std::fmt::Display, public_message: &str) -> Self {
        tracing::error!(error = %err, "{}", public_message);
        ApiError::InternalServerError(public_message.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Sanitized user view for register/login/update responses. Never
/// carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<u64>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.as_str().to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.map(|p| p.value()),
        }
    }
}

/// User view for the profile endpoint, including store timestamps.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<u64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&User> for ProfileView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.as_str().to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.map(|p| p.value()),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Project card as served to the frontend. `isLiked` is only present
/// when an authenticated identity was resolved for the request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: String,
    pub external_id: i64,
    pub title: String,
    pub description: String,
    pub created_at: Option<NaiveDate>,
    pub likes: usize,
    pub picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_liked: Option<bool>,
}

impl From<&Project> for ProjectView {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.to_string(),
            external_id: project.external_id,
            title: project.title.clone(),
            description: project.description.clone(),
            created_at: project.created_at,
            likes: project.likes,
            picture: project.picture.clone(),
            is_liked: None,
        }
    }
}

/// Required-field checks treat an empty string as absent.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Build project views, annotating each with the requester's like flag
/// when an identity is present. Anonymous requests get no flag at all.
pub async fn annotated_project_views(
    state: &AppState,
    identity: Option<&AuthenticatedUser>,
    projects: &[Project],
) -> Result<Vec<ProjectView>, LikeError> {
    let mut views = Vec::with_capacity(projects.len());

    for project in projects {
        let mut view = ProjectView::from(project);
        if let Some(AuthenticatedUser(user)) = identity {
            view.is_liked = Some(
                state
                    .like_service
                    .has_liked(&user.id, project.external_id)
                    .await?,
            );
        }
        views.push(view);
    }

    Ok(views)
}
