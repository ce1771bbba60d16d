use std::sync::Arc;

use auth::Authenticator;
use portfolio_service::config::Config;
use portfolio_service::domain::like::service::LikeService;
use portfolio_service::domain::project::service::ProjectService;
use portfolio_service::domain::user::service::AccountService;
use portfolio_service::inbound::http::router::create_router;
use portfolio_service::outbound::records::RecordStoreClient;
use portfolio_service::outbound::repositories::RecordStoreLikeRepository;
use portfolio_service::outbound::repositories::RecordStoreProjectRepository;
use portfolio_service::outbound::repositories::RecordStoreUserRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "portfolio-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        store_api_url = %config.store.api_url,
        store_base_id = %config.store.base_id,
        store_timeout_seconds = config.store.timeout_seconds,
        "Configuration loaded"
    );

    let client = Arc::new(RecordStoreClient::new(&config.store)?);
    tracing::info!(store = "tabular record store", "Record store client created");

    let user_repository = Arc::new(RecordStoreUserRepository::new(
        Arc::clone(&client),
        config.store.users_table.clone(),
    ));
    let project_repository = Arc::new(RecordStoreProjectRepository::new(
        Arc::clone(&client),
        config.store.projects_table.clone(),
    ));
    let like_repository = Arc::new(RecordStoreLikeRepository::new(
        Arc::clone(&client),
        config.store.likes_table.clone(),
    ));

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        config.jwt.expiration_hours,
    ));

    let account_service = Arc::new(AccountService::new(
        user_repository,
        Arc::clone(&authenticator),
    ));
    let project_service = Arc::new(ProjectService::new(project_repository));
    let like_service = Arc::new(LikeService::new(like_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        account_service,
        project_service,
        like_service,
        authenticator,
    );

    axum::serve(http_listener, http_application).await?;

    Ok(())
}
