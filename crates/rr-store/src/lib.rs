//! rr-store - Store backends for recipe-reviews
//!
//! Implementations of the `ReviewStore` trait from `rr-core`: an in-memory
//! single-table store with the three secondary indexes, and a JSON-file
//! backed store that persists the table across runs.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::{MemoryStore, ScanOrder};
