//! Post command
//!
//! Post a new review to the local store.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use rr_core::review::{CreateReview, ReviewManager};
use rr_core::{RecipeId, Username};
use rr_store::FileStore;
use std::sync::Arc;

/// Arguments for the post command
#[derive(Debug, Args)]
pub struct PostArgs {
    /// Recipe ID the review belongs to
    #[arg(long)]
    pub recipe: String,

    /// Recipe name, for display
    #[arg(long)]
    pub recipe_name: String,

    /// Posting identity
    #[arg(long = "as")]
    pub username: String,

    /// Rating for the recipe
    #[arg(long)]
    pub rating: f32,

    /// Review body
    pub content: String,

    /// Optional image URL
    #[arg(long)]
    pub image_url: Option<String>,

    /// Output the stored review as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the post command
pub async fn execute(store: Arc<FileStore>, args: PostArgs) -> Result<()> {
    let manager = ReviewManager::new(store);

    let review = manager
        .create(CreateReview {
            recipe_id: RecipeId::new(args.recipe),
            recipe_name: args.recipe_name,
            username: Username::new(args.username),
            image_url: args.image_url,
            rating: args.rating,
            content: args.content,
        })
        .await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&review)?);
    } else {
        println!(
            "{} review {} posted by {}",
            "✓".green(),
            review.review_id,
            review.author.to_string().cyan()
        );
    }
    Ok(())
}
