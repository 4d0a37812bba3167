//! rr-core - Core library for recipe-reviews
//!
//! This crate provides the core business logic of the review-posting service:
//! query routing over the three secondary indexes, cursor validation, page
//! limit enforcement, and the review lifecycle (post, fetch, delete with
//! comment cascade). Storage backends live in `rr-store`.

pub mod config;
pub mod error;
pub mod query;
pub mod review;
pub mod store;
pub mod types;

pub use error::{ReviewError, Result};
pub use types::*;
