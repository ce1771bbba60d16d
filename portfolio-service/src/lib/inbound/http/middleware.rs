use auth::JwtError;
use axum::extract::Request;
use axum::extract::State;
use axum::http;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::models::RecordId;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::ports::AccountServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the identity resolved for this request.
///
/// Required-mode routes can rely on its presence; optional-mode routes
/// must treat its absence as an anonymous caller.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

/// Required-mode auth gate.
///
/// Extracts the bearer token, verifies it, and resolves the user
/// through the record store. Every failure blocks the request; the
/// expired and invalid cases are surfaced as distinct messages.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)
        .ok_or_else(|| unauthorized("Access denied. No token provided."))?;

    let claims = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!("Token validation failed: {}", e);
        match e {
            JwtError::TokenExpired => unauthorized("Token expired."),
            _ => unauthorized("Invalid token."),
        }
    })?;

    // Fresh read: a token for a deleted account must stop resolving
    let user = match state
        .account_service
        .get_user(&RecordId::new(claims.sub))
        .await
    {
        Ok(user) => user,
        Err(UserError::NotFound(_)) => {
            return Err(unauthorized("Invalid token. User not found."));
        }
        Err(e) => {
            tracing::error!(error = %e, "Identity resolution failed");
            return Err(ApiError::InternalServerError(
                "Server error during authentication.".to_string(),
            )
            .into_response());
        }
    };

    req.extensions_mut().insert(AuthenticatedUser(user));

    Ok(next.run(req).await)
}

/// Optional-mode auth gate.
///
/// Same pipeline as `require_auth`, but any failure (missing token,
/// invalid token, expired token, unresolvable user, store error)
/// degrades to an anonymous pass-through. It never blocks the request.
pub async fn optional_auth(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let token = extract_bearer_token(&req).map(str::to_owned);
    if let Some(user) = resolve_identity(&state, token).await {
        req.extensions_mut().insert(AuthenticatedUser(user));
    }

    next.run(req).await
}

async fn resolve_identity(state: &AppState, token: Option<String>) -> Option<User> {
    let token = token?;
    let claims = state.authenticator.validate_token(&token).ok()?;

    state
        .account_service
        .get_user(&RecordId::new(claims.sub))
        .await
        .ok()
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let header = req.headers().get(http::header::AUTHORIZATION)?;
    let value = header.to_str().ok()?;

    value.strip_prefix("Bearer ")
}

fn unauthorized(message: &str) -> Response {
    ApiError::Unauthorized(message.to_string()).into_response()
}
