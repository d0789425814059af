use async_trait::async_trait;

use crate::domain::like::errors::LikeError;
use crate::domain::like::models::Like;
use crate::domain::like::models::LikeSummary;
use crate::domain::like::models::PhotoId;
use crate::domain::user::models::UserId;

/// Port for like operations.
#[async_trait]
pub trait LikeServicePort: Send + Sync + 'static {
    /// Record that a user likes a photo.
    ///
    /// # Errors
    /// * `AlreadyLiked` - The user already likes this photo
    /// * `Storage` - Database operation failed or timed out
    async fn like_photo(&self, user_id: &UserId, photo_id: PhotoId) -> Result<Like, LikeError>;

    /// Withdraw a like. Succeeds whether or not the like existed.
    async fn unlike_photo(&self, user_id: &UserId, photo_id: PhotoId) -> Result<(), LikeError>;

    /// Count likes on a photo; `liked` reflects `viewer` when one is given.
    async fn like_summary(
        &self,
        photo_id: PhotoId,
        viewer: Option<UserId>,
    ) -> Result<LikeSummary, LikeError>;
}

/// Persistence operations for likes.
#[async_trait]
pub trait LikeRepository: Send + Sync + 'static {
    /// Insert a like unless one already exists for the same photo and user.
    ///
    /// The check and insert are a single atomic statement.
    ///
    /// # Errors
    /// * `AlreadyLiked` - An equivalent like already exists
    /// * `Storage` - Database operation failed or timed out
    async fn create(&self, like: Like) -> Result<Like, LikeError>;

    /// Delete a like.
    ///
    /// # Returns
    /// Whether a row was removed
    async fn delete(&self, photo_id: PhotoId, user_id: &UserId) -> Result<bool, LikeError>;

    async fn count(&self, photo_id: PhotoId) -> Result<i64, LikeError>;

    async fn exists(&self, photo_id: PhotoId, user_id: &UserId) -> Result<bool, LikeError>;
}
