//! Error types for recipe-reviews

use thiserror::Error;

/// Main error type for recipe-reviews
///
/// Every fallible operation in the service resolves to one of these four
/// kinds, so callers can render "bad request", "not found", "forbidden" and
/// "server error" distinctly.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// Malformed or out-of-range caller input
    #[error("Invalid argument: {0}")]
    Argument(String),

    /// Referenced review does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller is not allowed to perform the operation
    #[error("Not authorized: {0}")]
    Authorization(String),

    /// Store call failure, original cause preserved
    #[error("Store error: {context}")]
    Store {
        context: String,
        #[source]
        source: anyhow::Error,
    },
}

impl ReviewError {
    /// Build an [`ReviewError::Argument`] error
    pub fn argument(message: impl Into<String>) -> Self {
        ReviewError::Argument(message.into())
    }

    /// Build a [`ReviewError::NotFound`] error
    pub fn not_found(message: impl Into<String>) -> Self {
        ReviewError::NotFound(message.into())
    }

    /// Build an [`ReviewError::Authorization`] error
    pub fn authorization(message: impl Into<String>) -> Self {
        ReviewError::Authorization(message.into())
    }

    /// Wrap a store-level failure, keeping the original cause
    pub fn store(context: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        ReviewError::Store {
            context: context.into(),
            source: source.into(),
        }
    }
}

/// Result type alias for recipe-reviews
pub type Result<T> = std::result::Result<T, ReviewError>;
