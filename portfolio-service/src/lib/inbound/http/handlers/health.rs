use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use super::ApiSuccess;

pub async fn health() -> ApiSuccess<HealthResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        HealthResponseData {
            message: "Portfolio API is running!".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        },
    )
}

/// Service banner with an endpoint map for humans poking at the API.
pub async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Welcome to the Portfolio API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/api/health",
            "projects": "/api/projects",
            "auth": {
                "register": "POST /api/auth/register",
                "login": "POST /api/auth/login"
            },
            "user": {
                "profile": "/api/user/profile"
            }
        }
    }))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthResponseData {
    pub message: String,
    pub timestamp: String,
}
