//! Query routing: index selection, cursor validation and page retrieval

pub mod cursor;
pub mod engine;
pub mod request;
pub mod strategy;

pub use cursor::{RawCursor, StartKey};
pub use engine::{QueryEngine, MAX_LIMIT};
pub use request::QueryRequest;
pub use strategy::{IndexPartition, IndexStrategy};
