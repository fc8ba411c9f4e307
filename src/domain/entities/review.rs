//! Product review domain entities

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::product::ProductId;
use super::user::UserId;

/// Unique identifier for a product review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductReviewId(pub Uuid);

impl ProductReviewId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProductReviewId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ProductReviewId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProductReviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Data needed to create a new product review
#[derive(Debug, Clone)]
pub struct NewProductReview {
    pub user_id: UserId,
    pub product_id: ProductId,
    /// Star rating, 1 to 5
    pub score: i16,
    pub content: String,
}

/// Data needed to flag a review for moderation
#[derive(Debug, Clone)]
pub struct NewFlaggedReview {
    pub product_review_id: ProductReviewId,
    pub flagged_from_ip: String,
}
