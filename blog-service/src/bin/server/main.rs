use std::sync::Arc;

use auth::Authenticator;
use auth::TokenCodec;
use auth::TokenGuard;
use auth::TokenIssuer;
use auth::TokenKind;
use blog_service::config::Config;
use blog_service::domain::blog::service::BlogService;
use blog_service::domain::review::service::ReviewService;
use blog_service::domain::tag::service::TagService;
use blog_service::domain::user::service::UserService;
use blog_service::inbound::http::router::create_router;
use blog_service::inbound::http::router::AppState;
use blog_service::outbound::repositories::PostgresBlogRepository;
use blog_service::outbound::repositories::PostgresReviewRepository;
use blog_service::outbound::repositories::PostgresTagRepository;
use blog_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blog_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "blog-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_algorithm = %config.jwt.algorithm,
        access_token_expire_minutes = config.jwt.access_token_expire_minutes,
        refresh_token_expire_days = config.jwt.refresh_token_expire_days,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    // Signing secret and algorithm are read once here and shared read-only
    let codec = TokenCodec::new(config.jwt.secret.as_bytes(), &config.jwt.algorithm)?;
    let issuer = TokenIssuer::new(
        codec.clone(),
        config.jwt.access_token_expire_minutes,
        config.jwt.refresh_token_expire_days,
    );
    let authenticator = Arc::new(Authenticator::new(issuer));
    let access_guard = Arc::new(TokenGuard::new(codec.clone(), TokenKind::Access));
    let refresh_guard = Arc::new(TokenGuard::new(codec, TokenKind::Refresh));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let blog_repository = Arc::new(PostgresBlogRepository::new(pg_pool.clone()));
    let review_repository = Arc::new(PostgresReviewRepository::new(pg_pool.clone()));
    let tag_repository = Arc::new(PostgresTagRepository::new(pg_pool));

    let state = AppState {
        user_service: Arc::new(UserService::new(user_repository)),
        blog_service: Arc::new(BlogService::new(Arc::clone(&blog_repository))),
        review_service: Arc::new(ReviewService::new(
            review_repository,
            Arc::clone(&blog_repository),
        )),
        tag_service: Arc::new(TagService::new(tag_repository, blog_repository)),
        authenticator,
        access_guard,
        refresh_guard,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    Ok(())
}
