//! Review lifecycle: post, delete (with comment cascade) and get-one
//!
//! A review moves `nonexistent -> active -> nonexistent`; there is no edit
//! transition. Validation and authorization always happen before any
//! mutating store call.

use crate::error::{Result, ReviewError};
use crate::review::cascade::{CommentCascade, NoCascade};
use crate::review::model::{CreateReview, DeleteReview, GetReview, Review};
use crate::store::ReviewStore;
use crate::types::ReviewKey;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Create/delete/fetch operations over the review store
pub struct ReviewManager<S> {
    store: Arc<S>,
    cascade: Arc<dyn CommentCascade>,
}

impl<S: ReviewStore> ReviewManager<S> {
    /// Create a manager with no comment backend attached
    pub fn new(store: Arc<S>) -> Self {
        Self::with_cascade(store, Arc::new(NoCascade))
    }

    /// Create a manager that cascades deletes into the given comment backend
    pub fn with_cascade(store: Arc<S>, cascade: Arc<dyn CommentCascade>) -> Self {
        Self { store, cascade }
    }

    /// Post a new review
    ///
    /// `reviewId` and `createdAt` are generated here; the caller cannot set
    /// them. Rating range and content length are the transport layer's
    /// business, not validated here.
    pub async fn create(&self, input: CreateReview) -> Result<Review> {
        debug!(recipe_id = %input.recipe_id, author = %input.username, "posting review");

        let review = Review::create(input);
        let stored = self.store.put(review).await.map_err(|err| {
            error!(%err, "storing new review failed");
            err
        })?;

        info!(review_id = %stored.review_id, "review posted");
        Ok(stored)
    }

    /// Delete a review and cascade into its comments
    ///
    /// Permitted only for the review's author or an admin. Returns the
    /// deleted item for confirmation.
    pub async fn delete(&self, request: DeleteReview) -> Result<Review> {
        if request.recipe_id.is_blank() {
            return Err(ReviewError::argument(
                "recipeId must be supplied to delete a review",
            ));
        }

        let key = ReviewKey::new(request.recipe_id.clone(), request.review_id);
        let item = self.fetch(&key).await?.ok_or_else(|| {
            ReviewError::not_found(format!("no review has ID {}", request.review_id))
        })?;

        if item.author != request.username && !request.is_admin {
            return Err(ReviewError::authorization("Cannot Delete Another Users Post"));
        }

        // comments first: a cascade failure leaves the review intact
        let removed = self.cascade.delete_for_review(&key.review_id).await?;
        if removed > 0 {
            debug!(count = removed, review_id = %key.review_id, "cascaded comment deletion");
        }

        self.store.delete(&key).await.map_err(|err| {
            error!(%err, review_id = %key.review_id, "deleting review failed");
            err
        })?;

        info!(review_id = %key.review_id, "review deleted");
        Ok(item)
    }

    /// Fetch a single review
    ///
    /// An absent record is a distinct not-found error, not a validation
    /// error.
    pub async fn get_one(&self, request: GetReview) -> Result<Review> {
        if request.recipe_id.is_blank() {
            return Err(ReviewError::argument(
                "recipeId and reviewId must both be supplied",
            ));
        }

        let key = ReviewKey::new(request.recipe_id, request.review_id);
        self.fetch(&key).await?.ok_or_else(|| {
            ReviewError::not_found(format!("no review has ID {}", key.review_id))
        })
    }

    async fn fetch(&self, key: &ReviewKey) -> Result<Option<Review>> {
        self.store.get(key).await.map_err(|err| {
            error!(%err, key = %key, "fetching review failed");
            err
        })
    }
}
