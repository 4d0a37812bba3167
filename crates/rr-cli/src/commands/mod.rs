//! CLI commands module

pub mod delete;
pub mod get;
pub mod list;
pub mod post;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rr_core::config::Config;
use rr_store::{FileStore, ScanOrder};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// rr - recipe review service
#[derive(Debug, Parser)]
#[command(name = "rr")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Review snapshot path (overrides configuration)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Post a review
    Post(post::PostArgs),

    /// List reviews by recipe, author or recency
    List(list::ListArgs),

    /// Show a single review
    Get(get::GetArgs),

    /// Delete a review
    Delete(delete::DeleteArgs),
}

/// Run the CLI application
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let path = cli
        .store
        .or_else(|| config.store.path.clone())
        .unwrap_or_else(FileStore::default_location);
    let order = if config.store.newest_first {
        ScanOrder::NewestFirst
    } else {
        ScanOrder::OldestFirst
    };
    let store = Arc::new(FileStore::open(path, order).context("opening review store")?);

    // Dispatch to command handler
    match cli.command {
        Commands::Post(args) => post::execute(store, args).await,
        Commands::List(args) => list::execute(store, args).await,
        Commands::Get(args) => get::execute(store, args).await,
        Commands::Delete(args) => delete::execute(store, args).await,
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
