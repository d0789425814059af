use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::like::errors::LikeError;
use crate::domain::like::models::LikeSummary;
use crate::domain::like::models::PhotoId;
use crate::domain::like::ports::LikeServicePort;
use crate::domain::user::models::Identity;
use crate::inbound::http::router::AppState;

/// Public like tally; `liked` is only ever true for an authenticated caller.
pub async fn count_likes(
    State(state): State<AppState>,
    identity: Identity,
    Path(photo_id): Path<String>,
) -> Result<ApiSuccess<LikeSummaryResponseData>, ApiError> {
    let photo_id = PhotoId::from_string(&photo_id).map_err(LikeError::from)?;
    let viewer = identity.user().map(|user| user.id);

    state
        .like_service
        .like_summary(photo_id, viewer)
        .await
        .map_err(ApiError::from)
        .map(|ref summary| ApiSuccess::new(StatusCode::OK, summary.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LikeSummaryResponseData {
    pub photo_id: String,
    pub count: i64,
    pub liked: bool,
}

impl From<&LikeSummary> for LikeSummaryResponseData {
    fn from(summary: &LikeSummary) -> Self {
        Self {
            photo_id: summary.photo_id.to_string(),
            count: summary.count,
            liked: summary.liked,
        }
    }
}
