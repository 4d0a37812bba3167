//! Delete command
//!
//! Delete a review. Only the author (or an admin) may delete it; dependent
//! comments go with it when a comment backend is attached.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use rr_core::review::{DeleteReview, ReviewManager};
use rr_core::{RecipeId, ReviewId, Username};
use rr_store::FileStore;
use std::sync::Arc;

/// Arguments for the delete command
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Recipe ID
    pub recipe: String,

    /// Review ID
    pub review: String,

    /// Requesting identity
    #[arg(long = "as")]
    pub username: String,

    /// Act with the admin capability
    #[arg(long)]
    pub admin: bool,
}

/// Execute the delete command
pub async fn execute(store: Arc<FileStore>, args: DeleteArgs) -> Result<()> {
    let manager = ReviewManager::new(store);

    let review_id = ReviewId::parse(&args.review).context("invalid review ID")?;
    let deleted = manager
        .delete(DeleteReview {
            recipe_id: RecipeId::new(args.recipe),
            review_id,
            username: Username::new(args.username),
            is_admin: args.admin,
        })
        .await?;

    println!(
        "{} deleted review {} by {}",
        "✓".green(),
        deleted.review_id,
        deleted.author.to_string().cyan()
    );
    Ok(())
}
