//! Cursor codec
//!
//! Pagination cursors are composite keys whose required fields depend on the
//! index that produced them. A raw cursor from a caller is validated against
//! the resolved strategy before it gets anywhere near the store; a partial
//! cursor is rejected outright, never repaired.

use crate::error::{Result, ReviewError};
use crate::query::strategy::IndexStrategy;
use crate::review::model::RECENCY_MARKER;
use crate::types::{RecipeId, ReviewId, Username};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Caller-supplied `ExclusiveStartKey`, every field optional
///
/// Presence is tracked with `Option` rather than truthiness, so a zero epoch
/// `createdAt` is present, not missing. A present-but-blank string field
/// counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawCursor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<RecipeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_id: Option<ReviewId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Username>,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    /// Echoed back by recency-index pages; ignored on input, the codec
    /// injects the marker itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_recent: Option<u8>,
}

/// A validated exclusive start key for one index strategy
#[derive(Debug, Clone, PartialEq)]
pub enum StartKey {
    ByRecipe {
        recipe_id: RecipeId,
        review_id: ReviewId,
        created_at: DateTime<Utc>,
    },
    ByAuthor {
        author: Username,
        created_at: DateTime<Utc>,
        recipe_id: RecipeId,
        review_id: ReviewId,
    },
    /// Recency marker is implicit in the variant, never taken from input
    Recency {
        recipe_id: RecipeId,
        review_id: ReviewId,
        created_at: DateTime<Utc>,
    },
}

impl StartKey {
    /// Validate a raw cursor against the resolved strategy
    ///
    /// Accepted only if every field the strategy requires is present; on
    /// rejection the error names the attempted index and each missing field.
    pub fn validate(strategy: IndexStrategy, raw: &RawCursor) -> Result<StartKey> {
        let recipe_id = raw.recipe_id.as_ref().filter(|id| !id.is_blank()).cloned();
        let author = raw.author.as_ref().filter(|a| !a.is_blank()).cloned();

        let key = match strategy {
            IndexStrategy::ByRecipe => match (recipe_id, raw.review_id, raw.created_at) {
                (Some(recipe_id), Some(review_id), Some(created_at)) => Some(StartKey::ByRecipe {
                    recipe_id,
                    review_id,
                    created_at,
                }),
                _ => None,
            },
            IndexStrategy::ByAuthor => {
                match (author, raw.created_at, recipe_id, raw.review_id) {
                    (Some(author), Some(created_at), Some(recipe_id), Some(review_id)) => {
                        Some(StartKey::ByAuthor {
                            author,
                            created_at,
                            recipe_id,
                            review_id,
                        })
                    }
                    _ => None,
                }
            }
            IndexStrategy::Recency => match (recipe_id, raw.review_id, raw.created_at) {
                (Some(recipe_id), Some(review_id), Some(created_at)) => Some(StartKey::Recency {
                    recipe_id,
                    review_id,
                    created_at,
                }),
                _ => None,
            },
        };

        key.ok_or_else(|| {
            ReviewError::argument(format!(
                "ExclusiveStartKey is missing required fields for querying {}: {}",
                strategy,
                missing_fields(strategy, raw).join(", ")
            ))
        })
    }

    /// Creation time component of the key
    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            StartKey::ByRecipe { created_at, .. }
            | StartKey::ByAuthor { created_at, .. }
            | StartKey::Recency { created_at, .. } => *created_at,
        }
    }

    /// Review id component of the key (ordering tiebreak)
    pub fn review_id(&self) -> ReviewId {
        match self {
            StartKey::ByRecipe { review_id, .. }
            | StartKey::ByAuthor { review_id, .. }
            | StartKey::Recency { review_id, .. } => *review_id,
        }
    }

    /// Flatten back to the wire shape callers resend
    pub fn to_raw(&self) -> RawCursor {
        match self {
            StartKey::ByRecipe {
                recipe_id,
                review_id,
                created_at,
            } => RawCursor {
                recipe_id: Some(recipe_id.clone()),
                review_id: Some(*review_id),
                created_at: Some(*created_at),
                ..RawCursor::default()
            },
            StartKey::ByAuthor {
                author,
                created_at,
                recipe_id,
                review_id,
            } => RawCursor {
                recipe_id: Some(recipe_id.clone()),
                review_id: Some(*review_id),
                author: Some(author.clone()),
                created_at: Some(*created_at),
                is_recent: None,
            },
            StartKey::Recency {
                recipe_id,
                review_id,
                created_at,
            } => RawCursor {
                recipe_id: Some(recipe_id.clone()),
                review_id: Some(*review_id),
                created_at: Some(*created_at),
                is_recent: Some(RECENCY_MARKER),
                ..RawCursor::default()
            },
        }
    }
}

/// Names of the required fields a raw cursor failed to supply
fn missing_fields(strategy: IndexStrategy, raw: &RawCursor) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if raw.recipe_id.as_ref().filter(|id| !id.is_blank()).is_none() {
        missing.push("recipeId");
    }
    if raw.review_id.is_none() {
        missing.push("reviewId");
    }
    if strategy == IndexStrategy::ByAuthor
        && raw.author.as_ref().filter(|a| !a.is_blank()).is_none()
    {
        missing.push("author");
    }
    if raw.created_at.is_none() {
        missing.push("createdAt");
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn full_cursor() -> RawCursor {
        RawCursor {
            recipe_id: Some(RecipeId::new("52772")),
            review_id: Some(ReviewId::generate()),
            author: Some(Username::new("alice")),
            created_at: Some(Utc::now()),
            is_recent: None,
        }
    }

    #[test]
    fn test_full_cursor_accepted_for_every_strategy() {
        let raw = full_cursor();
        for strategy in [
            IndexStrategy::ByRecipe,
            IndexStrategy::ByAuthor,
            IndexStrategy::Recency,
        ] {
            assert!(StartKey::validate(strategy, &raw).is_ok(), "{strategy}");
        }
    }

    #[test]
    fn test_recipe_cursor_missing_field_rejected() {
        let raw = RawCursor {
            review_id: None,
            ..full_cursor()
        };
        let err = StartKey::validate(IndexStrategy::ByRecipe, &raw).unwrap_err();
        assert!(matches!(err, ReviewError::Argument(_)));
        let message = err.to_string();
        assert!(message.contains("by recipe ID"));
        assert!(message.contains("reviewId"));
        assert!(!message.contains("createdAt"));
    }

    #[test]
    fn test_author_cursor_requires_all_four_fields() {
        let raw = RawCursor {
            author: None,
            created_at: None,
            ..full_cursor()
        };
        let err = StartKey::validate(IndexStrategy::ByAuthor, &raw).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("author"));
        assert!(message.contains("createdAt"));
    }

    #[test]
    fn test_recency_cursor_does_not_require_marker() {
        let raw = RawCursor {
            author: None,
            is_recent: None,
            ..full_cursor()
        };
        let key = StartKey::validate(IndexStrategy::Recency, &raw).unwrap();
        assert!(matches!(key, StartKey::Recency { .. }));
        // the marker reappears on the way out
        assert_eq!(key.to_raw().is_recent, Some(RECENCY_MARKER));
    }

    #[test]
    fn test_author_not_required_for_recipe_index() {
        let raw = RawCursor {
            author: None,
            ..full_cursor()
        };
        assert!(StartKey::validate(IndexStrategy::ByRecipe, &raw).is_ok());
    }

    #[test]
    fn test_blank_string_counts_as_missing() {
        let raw = RawCursor {
            recipe_id: Some(RecipeId::new("  ")),
            ..full_cursor()
        };
        let err = StartKey::validate(IndexStrategy::ByRecipe, &raw).unwrap_err();
        assert!(err.to_string().contains("recipeId"));
    }

    #[test]
    fn test_zero_epoch_timestamp_is_present() {
        // a legitimate zero value must not be mistaken for absence
        let raw = RawCursor {
            created_at: Some(Utc.timestamp_millis_opt(0).unwrap()),
            ..full_cursor()
        };
        let key = StartKey::validate(IndexStrategy::ByRecipe, &raw).unwrap();
        assert_eq!(key.created_at().timestamp_millis(), 0);
    }

    #[test]
    fn test_empty_cursor_names_every_missing_field() {
        let err = StartKey::validate(IndexStrategy::ByRecipe, &RawCursor::default()).unwrap_err();
        let message = err.to_string();
        for field in ["recipeId", "reviewId", "createdAt"] {
            assert!(message.contains(field), "missing {field} in: {message}");
        }
    }

    #[test]
    fn test_raw_cursor_wire_round_trip() {
        let key = StartKey::validate(IndexStrategy::ByAuthor, &full_cursor()).unwrap();
        let raw = key.to_raw();

        let json = serde_json::to_value(&raw).unwrap();
        assert!(json["createdAt"].is_i64());

        let back: RawCursor = serde_json::from_value(json).unwrap();
        // millisecond precision survives the round trip
        assert_eq!(
            back.created_at.map(|t| t.timestamp_millis()),
            raw.created_at.map(|t| t.timestamp_millis())
        );
        assert_eq!(back.recipe_id, raw.recipe_id);
        assert_eq!(back.review_id, raw.review_id);
    }
}
