use clap::{Parser, Subcommand};

/// Command-line front end for the books views.
#[derive(Debug, Parser)]
#[command(name = "bookshelf", version, about = "Browse and create books, or run the counter demo")]
pub struct Cli {
    /// Override the books API base URL (takes precedence over config and BOOKSHELF_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every book with its detail link
    Books,
    /// Create a book and print where the app would redirect
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
    },
    /// Run the counter demo and print the rendered page
    Counter {
        /// Number of times to press "increase count"
        #[arg(long, default_value_t = 0)]
        increase: u32,
        /// Press "reset count" after increasing
        #[arg(long)]
        reset: bool,
        /// Number of times to press "add sprinkles"
        #[arg(long, default_value_t = 0)]
        sprinkles: u32,
    },
}
