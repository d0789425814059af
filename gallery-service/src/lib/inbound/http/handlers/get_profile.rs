use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::UserResponseData;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Profile of the caller, as resolved from their bearer token.
pub async fn get_profile(
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    Ok(ApiSuccess::new(StatusCode::OK, (&user).into()))
}
