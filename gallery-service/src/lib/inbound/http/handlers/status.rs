use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;

pub async fn status() -> Result<ApiSuccess<StatusResponseData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        StatusResponseData {
            status: "available",
            version: env!("CARGO_PKG_VERSION"),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResponseData {
    pub status: &'static str,
    pub version: &'static str,
}
