use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::delete_account::delete_account;
use super::handlers::get_profile::get_profile;
use super::handlers::get_project::get_project;
use super::handlers::health::health;
use super::handlers::health::root;
use super::handlers::like_project::like_project;
use super::handlers::list_projects::list_projects;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::search_projects::search_projects;
use super::handlers::unlike_project::unlike_project;
use super::handlers::update_profile::update_profile;
use super::middleware::optional_auth;
use super::middleware::require_auth;
use crate::domain::like::service::LikeService;
use crate::domain::project::service::ProjectService;
use crate::domain::user::service::AccountService;
use crate::outbound::repositories::RecordStoreLikeRepository;
use crate::outbound::repositories::RecordStoreProjectRepository;
use crate::outbound::repositories::RecordStoreUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService<RecordStoreUserRepository>>,
    pub project_service: Arc<ProjectService<RecordStoreProjectRepository>>,
    pub like_service: Arc<LikeService<RecordStoreLikeRepository>>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    account_service: Arc<AccountService<RecordStoreUserRepository>>,
    project_service: Arc<ProjectService<RecordStoreProjectRepository>>,
    like_service: Arc<LikeService<RecordStoreLikeRepository>>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        account_service,
        project_service,
        like_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/", get(root))
        .route("/api/health", get(health))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login));

    // Read endpoints personalize output when a valid identity is
    // present but never require one
    let catalog_routes = Router::new()
        .route("/api/projects", get(list_projects))
        .route("/api/projects/search/:keywords", get(search_projects))
        .route("/api/projects/:id", get(get_project))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            optional_auth,
        ));

    let protected_routes = Router::new()
        .route(
            "/api/user/profile",
            get(get_profile).put(update_profile).delete(delete_account),
        )
        .route(
            "/api/projects/:id/like",
            post(like_project).delete(unlike_project),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(catalog_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
