use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::count_likes::count_likes;
use super::handlers::create_token::create_token;
use super::handlers::create_user::create_user;
use super::handlers::fallback::method_not_allowed;
use super::handlers::fallback::not_found;
use super::handlers::fallback::panic_response;
use super::handlers::get_profile::get_profile;
use super::handlers::like_photo::like_photo;
use super::handlers::status::status;
use super::handlers::unlike_photo::unlike_photo;
use super::middleware::authenticate;
use crate::domain::like::ports::LikeServicePort;
use crate::domain::token::ports::TokenServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub token_service: Arc<dyn TokenServicePort>,
    pub like_service: Arc<dyn LikeServicePort>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    token_service: Arc<dyn TokenServicePort>,
    like_service: Arc<dyn LikeServicePort>,
) -> Router {
    let state = AppState {
        user_service,
        token_service,
        like_service,
    };

    // These routes never read Authorization
    let public_routes = Router::new()
        .route("/api/status", get(status))
        .route("/api/users", post(create_user))
        .route("/api/tokens/authentication", post(create_token));

    // Every route below sees a bound Identity; handlers decide whether
    // Anonymous is acceptable.
    let identity_routes = Router::new()
        .route("/api/users/profile", get(get_profile))
        .route(
            "/api/photos/:photo_id/like",
            post(like_photo).delete(unlike_photo),
        )
        .route("/api/photos/:photo_id/likes", get(count_likes))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
                headers = ?request.headers(),
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
        .merge(identity_routes)
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(trace_layer)
        // Outermost so bearer tokens are already masked when the span records headers
        .layer(SetSensitiveRequestHeadersLayer::new([header::AUTHORIZATION]))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
