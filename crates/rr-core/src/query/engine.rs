//! Query engine
//!
//! Orchestrates index selection, cursor validation and limit enforcement,
//! then issues exactly one paginated read against the store. All validation
//! failures surface before any store access.

use crate::error::{Result, ReviewError};
use crate::query::cursor::StartKey;
use crate::query::request::QueryRequest;
use crate::query::strategy::IndexPartition;
use crate::store::{IndexQuery, QueryPage, ReviewStore};
use std::sync::Arc;
use tracing::{debug, error};

/// Hard ceiling on page size; also the default when the caller does not ask
pub const MAX_LIMIT: i64 = 50;

/// Routes query requests to the right index and returns stable pages
pub struct QueryEngine<S> {
    store: Arc<S>,
}

impl<S: ReviewStore> QueryEngine<S> {
    /// Create an engine over the given store
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Fetch one page of reviews
    ///
    /// Returns the store's items and `LastEvaluatedKey` verbatim; no
    /// re-sorting, re-filtering or count adjustment happens here.
    pub async fn query(&self, request: &QueryRequest) -> Result<QueryPage> {
        let limit = resolve_limit(request.limit)?;
        let partition = IndexPartition::select(request);
        let strategy = partition.strategy();

        let exclusive_start_key = match &request.exclusive_start_key {
            Some(raw) => Some(StartKey::validate(strategy, raw)?),
            None => None,
        };

        debug!(
            index = strategy.index_name(),
            limit,
            resumed = exclusive_start_key.is_some(),
            "querying reviews"
        );

        self.store
            .query_index(IndexQuery {
                partition,
                limit,
                exclusive_start_key,
            })
            .await
            .map_err(|err| {
                error!(index = strategy.index_name(), %err, "index query failed");
                err
            })
    }
}

/// Resolve the effective page size
///
/// Absent means [`MAX_LIMIT`]; anything outside `[1, MAX_LIMIT]` is rejected
/// before the store is touched.
fn resolve_limit(limit: Option<i64>) -> Result<u32> {
    match limit {
        None => Ok(MAX_LIMIT as u32),
        Some(n) if n <= 0 || n > MAX_LIMIT => Err(ReviewError::argument(format!(
            "Argument 'Limit' is outside of allowed range. Range is 1 to {MAX_LIMIT}."
        ))),
        Some(n) => Ok(n as u32),
    }
}
