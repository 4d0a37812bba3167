//! Get command
//!
//! Show a single review by recipe and review ID.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use rr_core::review::{GetReview, ReviewManager};
use rr_core::{RecipeId, ReviewId};
use rr_store::FileStore;
use std::sync::Arc;

/// Arguments for the get command
#[derive(Debug, Args)]
pub struct GetArgs {
    /// Recipe ID
    pub recipe: String,

    /// Review ID
    pub review: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the get command
pub async fn execute(store: Arc<FileStore>, args: GetArgs) -> Result<()> {
    let manager = ReviewManager::new(store);

    let review_id = ReviewId::parse(&args.review).context("invalid review ID")?;
    let review = manager
        .get_one(GetReview {
            recipe_id: RecipeId::new(args.recipe),
            review_id,
        })
        .await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&review)?);
        return Ok(());
    }

    println!("{} ({})", review.recipe_name.bold(), review.recipe_id);
    println!(
        "{} by {} on {}",
        format!("{:.1}", review.rating).yellow(),
        review.author.to_string().cyan(),
        review.created_at.format("%Y-%m-%d %H:%M")
    );
    if let Some(url) = &review.image_url {
        println!("{}", url.dimmed());
    }
    println!("{}", review.content);
    Ok(())
}
