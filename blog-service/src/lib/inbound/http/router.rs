use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use auth::TokenGuard;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::domain::blog::service::BlogService;
use crate::domain::review::service::ReviewService;
use crate::domain::tag::service::TagService;
use crate::domain::user::service::UserService;
use crate::inbound::http::handlers::auth::change_password::change_password;
use crate::inbound::http::handlers::auth::login::login;
use crate::inbound::http::handlers::auth::me::me;
use crate::inbound::http::handlers::auth::refresh_token::refresh_token;
use crate::inbound::http::handlers::auth::signup::signup;
use crate::inbound::http::handlers::blogs::create_blog::create_blog;
use crate::inbound::http::handlers::blogs::delete_blog::delete_blog;
use crate::inbound::http::handlers::blogs::get_blog::get_blog;
use crate::inbound::http::handlers::blogs::list_blogs::list_blogs;
use crate::inbound::http::handlers::blogs::update_blog::update_blog;
use crate::inbound::http::handlers::blogs::user_blogs::user_blogs;
use crate::inbound::http::handlers::reviews::create_review::create_review;
use crate::inbound::http::handlers::reviews::delete_review::delete_review;
use crate::inbound::http::handlers::reviews::get_review::get_review;
use crate::inbound::http::handlers::reviews::list_reviews::list_reviews;
use crate::inbound::http::handlers::tags::add_tags_to_blog::add_tags_to_blog;
use crate::inbound::http::handlers::tags::create_tag::create_tag;
use crate::inbound::http::handlers::tags::delete_tag::delete_tag;
use crate::inbound::http::handlers::tags::get_tag::get_tag;
use crate::inbound::http::handlers::tags::list_tags::list_tags;
use crate::inbound::http::handlers::tags::update_tag::update_tag;
use crate::outbound::repositories::blog::PostgresBlogRepository;
use crate::outbound::repositories::review::PostgresReviewRepository;
use crate::outbound::repositories::tag::PostgresTagRepository;
use crate::outbound::repositories::user::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub blog_service: Arc<BlogService<PostgresBlogRepository>>,
    pub review_service: Arc<ReviewService<PostgresReviewRepository, PostgresBlogRepository>>,
    pub tag_service: Arc<TagService<PostgresTagRepository, PostgresBlogRepository>>,
    pub authenticator: Arc<Authenticator>,
    pub access_guard: Arc<TokenGuard>,
    pub refresh_guard: Arc<TokenGuard>,
}

pub fn create_router(state: AppState) -> Router {
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
        .route("/api/v1/auth/signup", post(signup))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/refresh_token", get(refresh_token))
        .route("/api/v1/auth/change_password", post(change_password))
        .route("/api/v1/auth/me", get(me))
        .route("/api/v1/blogs", get(list_blogs).post(create_blog))
        .route("/api/v1/blogs/user_blogs", get(user_blogs))
        .route(
            "/api/v1/blogs/:blog_slug",
            get(get_blog).put(update_blog).delete(delete_blog),
        )
        .route("/api/v1/reviews", get(list_reviews))
        .route("/api/v1/reviews/blogs/:blog_slug", post(create_review))
        .route(
            "/api/v1/reviews/:review_id",
            get(get_review).delete(delete_review),
        )
        .route("/api/v1/tags", get(list_tags).post(create_tag))
        .route("/api/v1/tags/blogs/:blog_slug", post(add_tags_to_blog))
        .route(
            "/api/v1/tags/:tag_id",
            get(get_tag).put(update_tag).delete(delete_tag),
        )
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
