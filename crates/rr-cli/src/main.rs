//! rr - recipe-reviews CLI
//!
//! Operate a local review store from the terminal.
//!
//! ## Quick Start
//!
//! ```bash
//! # Post a review
//! rr post --recipe 52772 --recipe-name "Teriyaki Chicken" --as alice --rating 5 "great"
//!
//! # Page through a recipe's reviews
//! rr list --recipe 52772 --limit 10
//!
//! # Delete your own review
//! rr delete 52772 <review-id> --as alice
//! ```

mod commands;

#[tokio::main]
async fn main() {
    if let Err(err) = commands::run().await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
