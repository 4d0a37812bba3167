//! Review data model and per-operation request schemas
//!
//! Wire field names are camelCase (`recipeId`, `createdAt` as epoch
//! milliseconds, `isRecent`) so existing clients and exported data keep
//! working.

use crate::types::{RecipeId, ReviewId, ReviewKey, Username};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Marker value shared by every review
///
/// Exists purely so all reviews land in one partition of the recency index.
/// Injected by [`Review::create`] and by the recency branch of the cursor
/// codec; never caller-settable.
pub const RECENCY_MARKER: u8 = 1;

fn recency_marker() -> u8 {
    RECENCY_MARKER
}

/// A posted review of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Recipe this review belongs to
    pub recipe_id: RecipeId,
    /// Recipe name, denormalized for display
    pub recipe_name: String,
    /// Server-generated identifier, immutable
    pub review_id: ReviewId,
    /// Owner identity
    pub author: Username,
    /// Optional image attached by the author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Rating as given by the author; range enforcement is the transport
    /// layer's business
    pub rating: f32,
    /// Review body
    pub content: String,
    /// Set exactly once at creation, never mutated
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    /// Always [`RECENCY_MARKER`]
    #[serde(default = "recency_marker")]
    pub is_recent: u8,
}

impl Review {
    /// Construct a fresh review from caller input
    ///
    /// `review_id` and `created_at` are generated here and cannot be supplied
    /// by the caller; the recency marker is injected.
    pub fn create(input: CreateReview) -> Self {
        Self {
            recipe_id: input.recipe_id,
            recipe_name: input.recipe_name,
            review_id: ReviewId::generate(),
            author: input.username,
            image_url: input.image_url,
            rating: input.rating,
            content: input.content,
            // millisecond precision, matching the wire representation
            created_at: Utc::now().trunc_subsecs(3),
            is_recent: RECENCY_MARKER,
        }
    }

    /// Primary key of this review
    pub fn key(&self) -> ReviewKey {
        ReviewKey::new(self.recipe_id.clone(), self.review_id)
    }
}

/// Input for posting a review
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateReview {
    pub recipe_id: RecipeId,
    pub recipe_name: String,
    /// Requesting identity; becomes the review's `author`
    pub username: Username,
    #[serde(default)]
    pub image_url: Option<String>,
    pub rating: f32,
    pub content: String,
}

/// Input for deleting a review
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeleteReview {
    pub recipe_id: RecipeId,
    pub review_id: ReviewId,
    /// Requesting identity
    pub username: Username,
    /// Whether the requester holds the admin capability
    #[serde(default)]
    pub is_admin: bool,
}

/// Input for fetching a single review
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GetReview {
    pub recipe_id: RecipeId,
    pub review_id: ReviewId,
}
