use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::token::errors::TokenError;
use crate::domain::token::models::IssuedToken;
use crate::domain::token::models::LoginCommand;
use crate::domain::token::ports::TokenServicePort;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::router::AppState;

/// Exchange email and password for an authentication token.
pub async fn create_token(
    State(state): State<AppState>,
    Json(body): Json<CreateTokenRequest>,
) -> Result<ApiSuccess<CreateTokenResponseData>, ApiError> {
    // A malformed email cannot belong to anyone; answer as for an unknown one
    let email =
        EmailAddress::new(body.email).map_err(|_| ApiError::from(TokenError::InvalidCredentials))?;

    state
        .token_service
        .authenticate(LoginCommand::new(email, body.password))
        .await
        .map_err(ApiError::from)
        .map(|issued| ApiSuccess::new(StatusCode::CREATED, issued.into()))
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTokenRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTokenResponseData {
    pub token: String,
    pub scope: String,
    pub expiry: DateTime<Utc>,
}

impl From<IssuedToken> for CreateTokenResponseData {
    fn from(issued: IssuedToken) -> Self {
        Self {
            token: issued.token,
            scope: issued.scope.as_str().to_string(),
            expiry: issued.expiry,
        }
    }
}
