use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use crate::domain::like::errors::LikeError;
use crate::domain::like::models::PhotoId;
use crate::domain::like::ports::LikeServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Withdraw the caller's like. Repeating the request is harmless.
pub async fn unlike_photo(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(photo_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let photo_id = PhotoId::from_string(&photo_id).map_err(LikeError::from)?;

    state
        .like_service
        .unlike_photo(&user.id, photo_id)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
