//! Index selection
//!
//! Three access patterns exist over the review table, each keyed by a
//! different partition attribute. Selection is a total, pure function of
//! which filters a request carries.

use crate::query::request::QueryRequest;
use crate::review::model::RECENCY_MARKER;
use crate::types::{RecipeId, Username};
use std::fmt;
use tracing::warn;

/// One of the three access patterns over the review table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexStrategy {
    /// Reviews of one recipe, ordered by creation time
    ByRecipe,
    /// Reviews by one author, ordered by creation time
    ByAuthor,
    /// All reviews, ordered by creation time (shared recency partition)
    Recency,
}

impl IndexStrategy {
    /// Pick the strategy for a request
    ///
    /// Priority: recipe filter, then author filter, then recency. When both
    /// filters are supplied the recipe filter wins and the author filter is
    /// ignored (with a warning).
    pub fn select(request: &QueryRequest) -> Self {
        IndexPartition::select(request).strategy()
    }

    /// Name of the secondary index this strategy reads
    pub fn index_name(&self) -> &'static str {
        match self {
            IndexStrategy::ByRecipe => "recipeId-createdAt-index",
            IndexStrategy::ByAuthor => "author-createdAt-index",
            IndexStrategy::Recency => "isRecent-createdAt-index",
        }
    }
}

impl fmt::Display for IndexStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexStrategy::ByRecipe => write!(f, "by recipe ID"),
            IndexStrategy::ByAuthor => write!(f, "by author"),
            IndexStrategy::Recency => write!(f, "recent reviews"),
        }
    }
}

/// The partition a single index read runs against
///
/// Carries the partition key value alongside the chosen strategy, so the
/// engine never has to re-extract it from the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexPartition {
    /// All reviews of one recipe
    Recipe(RecipeId),
    /// All reviews by one author
    Author(Username),
    /// The shared recency partition; every review carries the marker
    Recent,
}

impl IndexPartition {
    /// Select the partition for a request
    pub fn select(request: &QueryRequest) -> Self {
        match (request.recipe_filter(), request.author_filter()) {
            (Some(recipe_id), author) => {
                if author.is_some() {
                    warn!(
                        recipe_id = %recipe_id,
                        "both recipeId and author supplied; recipeId takes precedence"
                    );
                }
                IndexPartition::Recipe(recipe_id.clone())
            }
            (None, Some(author)) => IndexPartition::Author(author.clone()),
            (None, None) => IndexPartition::Recent,
        }
    }

    /// The strategy this partition belongs to
    pub fn strategy(&self) -> IndexStrategy {
        match self {
            IndexPartition::Recipe(_) => IndexStrategy::ByRecipe,
            IndexPartition::Author(_) => IndexStrategy::ByAuthor,
            IndexPartition::Recent => IndexStrategy::Recency,
        }
    }

    /// Partition key value as stored in the index
    pub fn key_value(&self) -> String {
        match self {
            IndexPartition::Recipe(id) => id.to_string(),
            IndexPartition::Author(author) => author.to_string(),
            IndexPartition::Recent => RECENCY_MARKER.to_string(),
        }
    }
}
