//! In-memory review table with the three secondary indexes
//!
//! The reference `ReviewStore` backend. One primary table plus three ordered
//! indexes, each keyed by partition value, creation time and review ID (the
//! tiebreak for identical timestamps). The store owns ordering within a
//! partition and produces the `LastEvaluatedKey` for each page.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rr_core::query::{IndexPartition, RawCursor, StartKey};
use rr_core::review::{Review, RECENCY_MARKER};
use rr_core::store::{IndexQuery, QueryPage, ReviewStore};
use rr_core::{Result, ReviewError, ReviewId, ReviewKey};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;
use tracing::trace;
use uuid::Uuid;

/// Scan direction within an index partition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanOrder {
    OldestFirst,
    NewestFirst,
}

/// Sort key of an index entry: partition value, creation time, tiebreak
type IndexEntry = (String, DateTime<Utc>, ReviewId);

#[derive(Default)]
struct Tables {
    items: HashMap<ReviewKey, Review>,
    by_recipe: BTreeMap<IndexEntry, ReviewKey>,
    by_author: BTreeMap<IndexEntry, ReviewKey>,
    by_recent: BTreeMap<IndexEntry, ReviewKey>,
}

impl Tables {
    fn link(&mut self, review: &Review) {
        let key = review.key();
        let (at, id) = (review.created_at, review.review_id);
        self.by_recipe
            .insert((review.recipe_id.to_string(), at, id), key.clone());
        self.by_author
            .insert((review.author.to_string(), at, id), key.clone());
        self.by_recent
            .insert((RECENCY_MARKER.to_string(), at, id), key);
    }

    fn unlink(&mut self, review: &Review) {
        let (at, id) = (review.created_at, review.review_id);
        self.by_recipe
            .remove(&(review.recipe_id.to_string(), at, id));
        self.by_author
            .remove(&(review.author.to_string(), at, id));
        self.by_recent.remove(&(RECENCY_MARKER.to_string(), at, id));
    }
}

/// In-memory single-table store
pub struct MemoryStore {
    tables: RwLock<Tables>,
    order: ScanOrder,
}

impl MemoryStore {
    /// Create an empty store scanning newest-first
    pub fn new() -> Self {
        Self::with_order(ScanOrder::NewestFirst)
    }

    /// Create an empty store with the given scan direction
    pub fn with_order(order: ScanOrder) -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            order,
        }
    }

    /// Number of reviews in the table
    pub fn len(&self) -> usize {
        self.tables.read().map(|t| t.items.len()).unwrap_or(0)
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn lookup(&self, key: &ReviewKey) -> Result<Option<Review>> {
        Ok(self.read()?.items.get(key).cloned())
    }

    pub(crate) fn insert(&self, review: Review) -> Result<Review> {
        let mut tables = self.write()?;
        // replacing a key means replacing its index entries too
        if let Some(previous) = tables.items.remove(&review.key()) {
            tables.unlink(&previous);
        }
        tables.link(&review);
        tables.items.insert(review.key(), review.clone());
        Ok(review)
    }

    pub(crate) fn remove(&self, key: &ReviewKey) -> Result<()> {
        let mut tables = self.write()?;
        if let Some(review) = tables.items.remove(key) {
            tables.unlink(&review);
        }
        Ok(())
    }

    pub(crate) fn scan(&self, query: &IndexQuery) -> Result<QueryPage> {
        let tables = self.read()?;
        let partition_value = query.partition.key_value();
        let index = match &query.partition {
            IndexPartition::Recipe(_) => &tables.by_recipe,
            IndexPartition::Author(_) => &tables.by_author,
            IndexPartition::Recent => &tables.by_recent,
        };

        let lower: IndexEntry = (
            partition_value.clone(),
            DateTime::<Utc>::MIN_UTC,
            ReviewId(Uuid::nil()),
        );
        let upper: IndexEntry = (
            partition_value,
            DateTime::<Utc>::MAX_UTC,
            ReviewId(Uuid::max()),
        );

        let mut keys: Vec<(IndexEntry, ReviewKey)> = index
            .range(lower..=upper)
            .map(|(entry, key)| (entry.clone(), key.clone()))
            .collect();
        if self.order == ScanOrder::NewestFirst {
            keys.reverse();
        }

        // resume strictly after the supplied key's position in scan order,
        // even if the exact item has since been deleted
        let start = match &query.exclusive_start_key {
            Some(start_key) => {
                let probe = (start_key.created_at(), start_key.review_id());
                keys.iter()
                    .position(|(entry, _)| self.follows(entry, probe))
                    .unwrap_or(keys.len())
            }
            None => 0,
        };

        let limit = query.limit as usize;
        let page: Vec<Review> = keys[start..]
            .iter()
            .take(limit)
            .filter_map(|(_, key)| tables.items.get(key).cloned())
            .collect();
        let more_remain = keys.len() > start + limit;

        let last_evaluated_key = match (more_remain, page.last()) {
            (true, Some(last)) => Some(page_cursor(&query.partition, last)),
            _ => None,
        };

        trace!(
            partition = %query.partition.key_value(),
            returned = page.len(),
            more = more_remain,
            "index scan"
        );
        Ok(QueryPage {
            items: page,
            last_evaluated_key,
        })
    }

    fn follows(&self, entry: &IndexEntry, probe: (DateTime<Utc>, ReviewId)) -> bool {
        let sort = (entry.1, entry.2);
        match self.order {
            ScanOrder::OldestFirst => sort > probe,
            ScanOrder::NewestFirst => sort < probe,
        }
    }

    pub(crate) fn snapshot(&self) -> Result<Vec<Review>> {
        let tables = self.read()?;
        let mut reviews: Vec<Review> = tables.items.values().cloned().collect();
        reviews.sort_by_key(|r| (r.created_at, r.review_id));
        Ok(reviews)
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| ReviewError::store("review table", anyhow::anyhow!("lock poisoned")))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| ReviewError::store("review table", anyhow::anyhow!("lock poisoned")))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the `LastEvaluatedKey` for a page ending at `last`
///
/// Carries exactly the fields the producing index requires, so it validates
/// cleanly when resent; recency pages echo the marker like the original
/// table did.
fn page_cursor(partition: &IndexPartition, last: &Review) -> RawCursor {
    let base = RawCursor {
        recipe_id: Some(last.recipe_id.clone()),
        review_id: Some(last.review_id),
        created_at: Some(last.created_at),
        ..RawCursor::default()
    };
    match partition {
        IndexPartition::Recipe(_) => base,
        IndexPartition::Author(_) => RawCursor {
            author: Some(last.author.clone()),
            ..base
        },
        IndexPartition::Recent => RawCursor {
            is_recent: Some(RECENCY_MARKER),
            ..base
        },
    }
}

#[async_trait]
impl ReviewStore for MemoryStore {
    async fn get(&self, key: &ReviewKey) -> Result<Option<Review>> {
        self.lookup(key)
    }

    async fn put(&self, review: Review) -> Result<Review> {
        self.insert(review)
    }

    async fn delete(&self, key: &ReviewKey) -> Result<()> {
        self.remove(key)
    }

    async fn query_index(&self, query: IndexQuery) -> Result<QueryPage> {
        self.scan(&query)
    }
}
