use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::like::errors::PhotoIdError;
use crate::domain::user::models::UserId;

/// A user's like on a photo.
///
/// At most one exists per (photo, user) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub id: LikeId,
    pub photo_id: PhotoId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Like {
    pub fn new(photo_id: PhotoId, user_id: UserId) -> Self {
        Self {
            id: LikeId::new(),
            photo_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}

/// Like unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LikeId(pub Uuid);

impl LikeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LikeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LikeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of a photo owned by the photo subsystem.
///
/// Likes reference photos by id only; the photo itself lives elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhotoId(pub Uuid);

impl PhotoId {
    /// Parse a photo ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, PhotoIdError> {
        Uuid::parse_str(s)
            .map(PhotoId)
            .map_err(|e| PhotoIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Like tally for a photo, optionally personalised for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeSummary {
    pub photo_id: PhotoId,
    pub count: i64,
    pub liked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_id_parsing() {
        let id = Uuid::new_v4();
        assert_eq!(PhotoId::from_string(&id.to_string()), Ok(PhotoId(id)));

        assert!(matches!(
            PhotoId::from_string("not-a-uuid"),
            Err(PhotoIdError::InvalidFormat(_))
        ));
        assert!(PhotoId::from_string("").is_err());
    }

    #[test]
    fn test_new_like_has_fresh_id() {
        let photo_id = PhotoId(Uuid::new_v4());
        let user_id = UserId::new();

        let first = Like::new(photo_id, user_id);
        let second = Like::new(photo_id, user_id);

        assert_eq!(first.photo_id, second.photo_id);
        assert_eq!(first.user_id, second.user_id);
        assert_ne!(first.id, second.id);
    }
}
