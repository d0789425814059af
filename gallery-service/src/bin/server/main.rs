use std::sync::Arc;

use auth::Authenticator;
use auth::HashingParams;
use auth::PasswordHasher;
use gallery_service::config::Config;
use gallery_service::domain::like::service::LikeService;
use gallery_service::domain::token::service::TokenService;
use gallery_service::domain::user::service::UserService;
use gallery_service::inbound::http::router::create_router;
use gallery_service::outbound::database;
use gallery_service::outbound::repositories::PostgresLikeRepository;
use gallery_service::outbound::repositories::PostgresTokenRepository;
use gallery_service::outbound::repositories::PostgresUserRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gallery_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "gallery-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        query_timeout_ms = config.database.query_timeout_ms,
        authentication_ttl_hours = config.tokens.authentication_ttl_hours,
        "Configuration loaded"
    );

    let pg_pool = database::connect(&config.database).await?;
    database::migrate(&pg_pool).await?;

    let password_hasher = PasswordHasher::with_params(HashingParams::from(&config.password))?;
    let authenticator = Arc::new(Authenticator::with_password_hasher(password_hasher)?);

    let query_timeout = config.database.query_timeout();
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone(), query_timeout));
    let token_repository = Arc::new(PostgresTokenRepository::new(pg_pool.clone(), query_timeout));
    let like_repository = Arc::new(PostgresLikeRepository::new(pg_pool, query_timeout));

    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repository),
        Arc::clone(&authenticator),
    ));
    let token_service = Arc::new(TokenService::new(
        user_repository,
        token_repository,
        authenticator,
        config.tokens.authentication_ttl(),
    ));
    let like_service = Arc::new(LikeService::new(like_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, token_service, like_service);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}
