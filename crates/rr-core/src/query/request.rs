//! Query request schema
//!
//! One explicit struct per operation instead of a loose parameter bag; unknown
//! fields are rejected at deserialization.

use crate::query::cursor::RawCursor;
use crate::types::{RecipeId, Username};
use serde::{Deserialize, Serialize};

/// A request for one page of reviews
///
/// At most one of `recipe_id`/`author` is meaningful as a filter; with
/// neither present the recency index is read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct QueryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<RecipeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Username>,
    /// Requested page size; validated against `[1, MAX_LIMIT]` by the engine
    #[serde(default, rename = "Limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Where the previous page left off
    #[serde(
        default,
        rename = "ExclusiveStartKey",
        skip_serializing_if = "Option::is_none"
    )]
    pub exclusive_start_key: Option<RawCursor>,
}

impl QueryRequest {
    /// Page of most recent reviews across all recipes
    pub fn recent() -> Self {
        Self::default()
    }

    /// Page of reviews for one recipe
    pub fn for_recipe(recipe_id: RecipeId) -> Self {
        Self {
            recipe_id: Some(recipe_id),
            ..Self::default()
        }
    }

    /// Page of reviews by one author
    pub fn for_author(author: Username) -> Self {
        Self {
            author: Some(author),
            ..Self::default()
        }
    }

    /// Set the requested page size
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Resume after a previous page
    pub fn with_start_key(mut self, cursor: RawCursor) -> Self {
        self.exclusive_start_key = Some(cursor);
        self
    }

    /// The recipe filter, if present and usable
    pub fn recipe_filter(&self) -> Option<&RecipeId> {
        self.recipe_id.as_ref().filter(|id| !id.is_blank())
    }

    /// The author filter, if present and usable
    pub fn author_filter(&self) -> Option<&Username> {
        self.author.as_ref().filter(|a| !a.is_blank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let request = QueryRequest::for_recipe(RecipeId::new("52772")).with_limit(10);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["recipeId"], "52772");
        assert_eq!(json["Limit"], 10);
        assert!(json.get("author").is_none());
        assert!(json.get("ExclusiveStartKey").is_none());
    }

    #[test]
    fn test_deserialize_empty_request() {
        let request: QueryRequest = serde_json::from_str("{}").unwrap();
        assert!(request.recipe_id.is_none());
        assert!(request.author.is_none());
        assert!(request.limit.is_none());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result = serde_json::from_str::<QueryRequest>(r#"{"recipeID":"52772"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_filter_is_unusable() {
        let request = QueryRequest::for_recipe(RecipeId::new("  "));
        assert!(request.recipe_filter().is_none());

        let request = QueryRequest::for_author(Username::new(""));
        assert!(request.author_filter().is_none());
    }
}
