use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::like::errors::LikeError;
use crate::domain::like::models::Like;
use crate::domain::like::models::LikeSummary;
use crate::domain::like::models::PhotoId;
use crate::domain::like::ports::LikeRepository;
use crate::domain::like::ports::LikeServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for like operations.
pub struct LikeService<LR>
where
    LR: LikeRepository,
{
    repository: Arc<LR>,
}

impl<LR> LikeService<LR>
where
    LR: LikeRepository,
{
    pub fn new(repository: Arc<LR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<LR> LikeServicePort for LikeService<LR>
where
    LR: LikeRepository,
{
    async fn like_photo(&self, user_id: &UserId, photo_id: PhotoId) -> Result<Like, LikeError> {
        let like = self.repository.create(Like::new(photo_id, *user_id)).await?;

        tracing::debug!(
            like_id = %like.id,
            photo_id = %like.photo_id,
            user_id = %like.user_id,
            "Photo liked"
        );

        Ok(like)
    }

    async fn unlike_photo(&self, user_id: &UserId, photo_id: PhotoId) -> Result<(), LikeError> {
        let removed = self.repository.delete(photo_id, user_id).await?;

        tracing::debug!(%photo_id, %user_id, removed, "Photo unliked");

        Ok(())
    }

    async fn like_summary(
        &self,
        photo_id: PhotoId,
        viewer: Option<UserId>,
    ) -> Result<LikeSummary, LikeError> {
        let count = self.repository.count(photo_id).await?;
        let liked = match viewer {
            Some(user_id) => self.repository.exists(photo_id, &user_id).await?,
            None => false,
        };

        Ok(LikeSummary {
            photo_id,
            count,
            liked,
        })
    }
}
