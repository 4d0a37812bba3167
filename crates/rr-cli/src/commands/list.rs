//! List command
//!
//! Page through reviews by recipe, author or recency. The next-page cursor
//! is printed as JSON so a follow-up call can resume with `--cursor`.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use rr_core::query::{QueryEngine, QueryRequest, RawCursor};
use rr_core::{RecipeId, Username};
use rr_store::FileStore;
use std::sync::Arc;

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Filter by recipe ID
    #[arg(long)]
    pub recipe: Option<String>,

    /// Filter by author
    #[arg(long)]
    pub author: Option<String>,

    /// Page size, 1 to 50
    #[arg(long, short)]
    pub limit: Option<i64>,

    /// Resume from a cursor printed by a previous call (JSON)
    #[arg(long)]
    pub cursor: Option<String>,

    /// Output the page as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the list command
pub async fn execute(store: Arc<FileStore>, args: ListArgs) -> Result<()> {
    let engine = QueryEngine::new(store);

    let mut request = QueryRequest {
        recipe_id: args.recipe.map(RecipeId::new),
        author: args.author.map(Username::new),
        limit: args.limit,
        ..QueryRequest::default()
    };
    if let Some(cursor) = &args.cursor {
        let raw: RawCursor = serde_json::from_str(cursor).context("parsing --cursor")?;
        request.exclusive_start_key = Some(raw);
    }

    let page = engine.query(&request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    if page.items.is_empty() {
        println!("{}", "no reviews found".dimmed());
    }
    for review in &page.items {
        println!(
            "{}  {}  {}  {}",
            review
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .dimmed(),
            review.author.to_string().cyan(),
            format!("{:.1}", review.rating).yellow(),
            review.content
        );
    }
    if let Some(cursor) = &page.last_evaluated_key {
        println!(
            "\n{} --cursor '{}'",
            "next page:".bold(),
            serde_json::to_string(cursor)?
        );
    }
    Ok(())
}
