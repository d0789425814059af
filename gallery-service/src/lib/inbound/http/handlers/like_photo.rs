use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::like::errors::LikeError;
use crate::domain::like::models::Like;
use crate::domain::like::models::PhotoId;
use crate::domain::like::ports::LikeServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn like_photo(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(photo_id): Path<String>,
) -> Result<ApiSuccess<LikeResponseData>, ApiError> {
    let photo_id = PhotoId::from_string(&photo_id).map_err(LikeError::from)?;

    state
        .like_service
        .like_photo(&user.id, photo_id)
        .await
        .map_err(ApiError::from)
        .map(|ref like| ApiSuccess::new(StatusCode::CREATED, like.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LikeResponseData {
    pub id: String,
    pub photo_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Like> for LikeResponseData {
    fn from(like: &Like) -> Self {
        Self {
            id: like.id.to_string(),
            photo_id: like.photo_id.to_string(),
            user_id: like.user_id.to_string(),
            created_at: like.created_at,
        }
    }
}
