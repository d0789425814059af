use std::convert::Infallible;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::token::models::TokenScope;
use crate::domain::token::ports::TokenServicePort;
use crate::domain::user::models::Identity;
use crate::domain::user::models::User;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Middleware that binds an `Identity` to every request.
///
/// Requests without credentials proceed as `Identity::Anonymous`. Requests
/// that present credentials must present a valid authentication token, or
/// they are rejected before any handler runs.
pub async fn authenticate(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let presented = match bearer_token(req.headers()) {
        Ok(token) => token.map(str::to_owned),
        Err(e) => {
            tracing::debug!("Malformed Authorization header");
            return vary_on_authorization(e.into_response());
        }
    };

    let identity = match presented {
        None => Identity::Anonymous,
        Some(token) => match state
            .token_service
            .resolve_token(&TokenScope::AUTHENTICATION, &token)
            .await
        {
            Ok(user) => Identity::User(user),
            Err(e) => {
                tracing::warn!("Token rejected: {}", e);
                return vary_on_authorization(ApiError::from(e).into_response());
            }
        },
    };

    req.extensions_mut().insert(identity);

    vary_on_authorization(next.run(req).await)
}

/// Extract a bearer token from the `Authorization` header.
///
/// Returns `Ok(None)` when no credentials were presented. Anything other than
/// `Bearer <token>` with a well-formed token is `InvalidToken`.
fn bearer_token(headers: &HeaderMap) -> Result<Option<&str>, ApiError> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };

    let value = value.to_str().map_err(|_| ApiError::InvalidToken)?;
    if value.is_empty() {
        return Ok(None);
    }

    match value.split_once(' ') {
        Some(("Bearer", token)) if auth::token::is_well_formed(token) => Ok(Some(token)),
        _ => Err(ApiError::InvalidToken),
    }
}

fn vary_on_authorization(mut response: Response) -> Response {
    response
        .headers_mut()
        .append(header::VARY, HeaderValue::from_static("Authorization"));
    response
}

/// The identity bound by `authenticate`; `Anonymous` on routes it does not cover.
#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<Identity>()
            .cloned()
            .unwrap_or(Identity::Anonymous))
    }
}

/// Extractor for handlers that require a signed-in caller.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<Identity>() {
            Some(Identity::User(user)) => Ok(AuthenticatedUser(user.clone())),
            _ => Err(ApiError::InvalidToken),
        }
    }
}
