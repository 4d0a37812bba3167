//! Core type definitions for recipe-reviews

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// External identifier of a recipe
///
/// Assigned by the upstream recipe catalog, treated as opaque here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub String);

impl RecipeId {
    /// Create a RecipeId from a string
    pub fn new(s: impl Into<String>) -> Self {
        RecipeId(s.into())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A blank identifier is never valid
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a review
///
/// Generated server-side at creation and immutable afterwards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ReviewId(pub Uuid);

impl ReviewId {
    /// Generate a fresh ReviewId
    pub fn generate() -> Self {
        ReviewId(Uuid::new_v4())
    }

    /// Parse from a UUID string
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(ReviewId(Uuid::parse_str(s)?))
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a review author
///
/// Resolved upstream (JWT handling is outside this crate); by the time a
/// request reaches the core it is a plain username.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(pub String);

impl Username {
    /// Create a Username from a string
    pub fn new(s: impl Into<String>) -> Self {
        Username(s.into())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A blank username is never valid
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Primary key of the review table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewKey {
    pub recipe_id: RecipeId,
    pub review_id: ReviewId,
}

impl ReviewKey {
    /// Create a key from its parts
    pub fn new(recipe_id: RecipeId, review_id: ReviewId) -> Self {
        Self {
            recipe_id,
            review_id,
        }
    }
}

impl fmt::Display for ReviewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.recipe_id, self.review_id)
    }
}
