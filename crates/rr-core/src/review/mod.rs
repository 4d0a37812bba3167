//! Review domain: data model, lifecycle manager and the comment cascade seam

pub mod cascade;
pub mod manager;
pub mod model;

pub use cascade::{CommentCascade, NoCascade};
pub use manager::ReviewManager;
pub use model::{CreateReview, DeleteReview, GetReview, Review, RECENCY_MARKER};
