//! JSON-file-backed review store
//!
//! Wraps [`MemoryStore`] with snapshot persistence: the whole table is
//! loaded at open and rewritten after every mutation, using a temp-file
//! rename so a crash mid-write never leaves a torn snapshot. Good for the
//! operator CLI and small deployments; not a durability story.

use crate::memory::{MemoryStore, ScanOrder};
use async_trait::async_trait;
use rr_core::review::Review;
use rr_core::store::{IndexQuery, QueryPage, ReviewStore};
use rr_core::{Result, ReviewError, ReviewKey};
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File-backed review store
pub struct FileStore {
    inner: MemoryStore,
    path: PathBuf,
}

impl FileStore {
    /// Open a store at the given path, loading any existing snapshot
    pub fn open(path: impl Into<PathBuf>, order: ScanOrder) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ReviewError::store("creating store directory", e))?;
        }

        let inner = MemoryStore::with_order(order);
        if path.exists() {
            let file = fs::File::open(&path)
                .map_err(|e| ReviewError::store("opening store snapshot", e))?;
            let reviews: Vec<Review> = serde_json::from_reader(BufReader::new(file))
                .map_err(|e| ReviewError::store("parsing store snapshot", e))?;
            let count = reviews.len();
            for review in reviews {
                inner.insert(review)?;
            }
            info!(count, path = %path.display(), "loaded review snapshot");
        }

        Ok(Self { inner, path })
    }

    /// Default snapshot location in the platform data directory
    pub fn default_location() -> PathBuf {
        directories::ProjectDirs::from("com", "recipe-reviews", "recipe-reviews")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".recipe-reviews")
            })
            .join("reviews.json")
    }

    /// Path of the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "reviews.json".to_string());
        self.path.with_file_name(format!(".{name}.tmp"))
    }

    /// Rewrite the snapshot atomically (write to temp, then rename)
    fn persist(&self) -> Result<()> {
        let reviews = self.inner.snapshot()?;
        let temp_path = self.temp_path();

        let temp_file = fs::File::create(&temp_path)
            .map_err(|e| ReviewError::store("creating temp snapshot", e))?;
        let mut writer = BufWriter::new(temp_file);
        serde_json::to_writer_pretty(&mut writer, &reviews)
            .map_err(|e| ReviewError::store("writing snapshot", e))?;
        writer
            .flush()
            .map_err(|e| ReviewError::store("flushing snapshot", e))?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            ReviewError::store("renaming snapshot into place", e)
        })?;

        debug!(count = reviews.len(), path = %self.path.display(), "snapshot persisted");
        Ok(())
    }
}

#[async_trait]
impl ReviewStore for FileStore {
    async fn get(&self, key: &ReviewKey) -> Result<Option<Review>> {
        self.inner.lookup(key)
    }

    async fn put(&self, review: Review) -> Result<Review> {
        let stored = self.inner.insert(review)?;
        self.persist()?;
        Ok(stored)
    }

    async fn delete(&self, key: &ReviewKey) -> Result<()> {
        self.inner.remove(key)?;
        self.persist()
    }

    async fn query_index(&self, query: IndexQuery) -> Result<QueryPage> {
        self.inner.scan(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rr_core::query::IndexPartition;
    use rr_core::review::CreateReview;
    use rr_core::{RecipeId, Username};
    use tempfile::TempDir;

    fn store_path(dir: &TempDir) -> PathBuf {
        dir.path().join("reviews.json")
    }

    fn review(recipe: &str, author: &str) -> Review {
        Review::create(CreateReview {
            recipe_id: RecipeId::new(recipe),
            recipe_name: format!("Recipe {recipe}"),
            username: Username::new(author),
            image_url: None,
            rating: 4.5,
            content: "tasty".to_string(),
        })
    }

    #[tokio::test]
    async fn test_open_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/dir/reviews.json");
        let store = FileStore::open(&path, ScanOrder::NewestFirst).unwrap();
        assert!(store.path().parent().unwrap().exists());
    }

    #[tokio::test]
    async fn test_reviews_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let r = review("52772", "alice");
        let key = r.key();

        {
            let store = FileStore::open(store_path(&dir), ScanOrder::NewestFirst).unwrap();
            store.put(r.clone()).await.unwrap();
        }

        let store = FileStore::open(store_path(&dir), ScanOrder::NewestFirst).unwrap();
        assert_eq!(store.get(&key).await.unwrap(), Some(r));
    }

    #[tokio::test]
    async fn test_delete_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let r = review("52772", "alice");
        let key = r.key();

        {
            let store = FileStore::open(store_path(&dir), ScanOrder::NewestFirst).unwrap();
            store.put(r).await.unwrap();
            store.delete(&key).await.unwrap();
        }

        let store = FileStore::open(store_path(&dir), ScanOrder::NewestFirst).unwrap();
        assert_eq!(store.get(&key).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(store_path(&dir), ScanOrder::NewestFirst).unwrap();
        store.put(review("52772", "alice")).await.unwrap();

        assert!(store.path().exists());
        assert!(!store.temp_path().exists());
    }

    #[tokio::test]
    async fn test_index_queries_work_after_reload() {
        let dir = TempDir::new().unwrap();
        {
            let store = FileStore::open(store_path(&dir), ScanOrder::NewestFirst).unwrap();
            for author in ["alice", "bob", "alice"] {
                store.put(review("52772", author)).await.unwrap();
            }
        }

        let store = FileStore::open(store_path(&dir), ScanOrder::NewestFirst).unwrap();
        let page = store
            .query_index(IndexQuery {
                partition: IndexPartition::Author(Username::new("alice")),
                limit: 10,
                exclusive_start_key: None,
            })
            .await
            .unwrap();
        assert_eq!(page.items.len(), 2);
    }

    #[test]
    fn test_default_location_is_under_a_data_dir() {
        let path = FileStore::default_location();
        assert!(path.to_string_lossy().ends_with("reviews.json"));
    }
}
