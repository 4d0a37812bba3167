//! Comment cascade seam
//!
//! Deleting a review also removes every comment referencing it. Comment
//! storage lives outside this crate, so the cascade is a collaborator trait.
//! The lifecycle manager runs it comments-first: if the cascade fails, the
//! review stays in place and the delete surfaces an error.

use crate::error::Result;
use crate::types::ReviewId;
use async_trait::async_trait;

/// Deletes dependent comments when their owning review goes away
#[async_trait]
pub trait CommentCascade: Send + Sync {
    /// Delete every comment referencing the review; returns how many were
    /// removed
    async fn delete_for_review(&self, review_id: &ReviewId) -> Result<usize>;
}

/// Cascade for deployments without a comment backend
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCascade;

#[async_trait]
impl CommentCascade for NoCascade {
    async fn delete_for_review(&self, _review_id: &ReviewId) -> Result<usize> {
        Ok(0)
    }
}
