//! Store abstraction
//!
//! The review table and its three secondary indexes live behind this trait.
//! The underlying store is the sole authority on ordering within a partition
//! and on producing the `LastEvaluatedKey` that becomes the next cursor;
//! callers here never re-sort or re-filter.

use crate::error::Result;
use crate::query::cursor::{RawCursor, StartKey};
use crate::query::strategy::IndexPartition;
use crate::review::model::Review;
use crate::types::ReviewKey;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One paginated read against a secondary index
#[derive(Debug, Clone)]
pub struct IndexQuery {
    /// Which partition of which index to read
    pub partition: IndexPartition,
    /// Maximum number of items to return, already validated by the engine
    pub limit: u32,
    /// Resume strictly after this key, if set
    pub exclusive_start_key: Option<StartKey>,
}

/// A page of reviews plus the key to resume from, if more remain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryPage {
    pub items: Vec<Review>,
    #[serde(
        default,
        rename = "LastEvaluatedKey",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_evaluated_key: Option<RawCursor>,
}

impl QueryPage {
    /// An empty final page
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            last_evaluated_key: None,
        }
    }

    /// Whether another page can be fetched
    pub fn has_more(&self) -> bool {
        self.last_evaluated_key.is_some()
    }
}

/// Key-value store holding the single review table
///
/// Every method is a suspension point; implementations must not require the
/// caller to hold any lock across the await.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Fetch a single review by primary key
    async fn get(&self, key: &ReviewKey) -> Result<Option<Review>>;

    /// Write a review, returning the stored item
    async fn put(&self, review: Review) -> Result<Review>;

    /// Remove a review by primary key
    async fn delete(&self, key: &ReviewKey) -> Result<()>;

    /// One paginated read against a secondary index
    async fn query_index(&self, query: IndexQuery) -> Result<QueryPage>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page() {
        let page = QueryPage::empty();
        assert!(page.items.is_empty());
        assert!(!page.has_more());
    }

    #[test]
    fn test_page_serialization_omits_absent_cursor() {
        let page = QueryPage::empty();
        let json = serde_json::to_value(&page).unwrap();
        assert!(json.get("LastEvaluatedKey").is_none());

        let page = QueryPage {
            items: Vec::new(),
            last_evaluated_key: Some(RawCursor::default()),
        };
        let json = serde_json::to_value(&page).unwrap();
        assert!(json.get("LastEvaluatedKey").is_some());
    }
}
