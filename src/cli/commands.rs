use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quotesync", about = "Quote collection with remote sync")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a quote (replaces an existing quote with the same text)
    Add {
        text: String,
        category: String,
        /// Also send the quote to the remote source
        #[arg(long)]
        publish: bool,
    },
    /// Show a random quote
    Random {
        /// Category to pick from ("all" for every category); remembered for next time
        #[arg(long)]
        category: Option<String>,
    },
    /// List quotes
    List {
        /// Category to filter by ("all" for every category); remembered for next time
        #[arg(long)]
        category: Option<String>,
    },
    /// List categories in order of first appearance
    Categories,
    /// Import quotes from a JSON file
    Import {
        path: PathBuf,
    },
    /// Export quotes as JSON (to stdout when no path is given)
    Export {
        path: Option<PathBuf>,
    },
    /// Fetch the remote set once and merge it in
    Sync,
    /// Sync periodically until interrupted
    Watch {
        /// Seconds between rounds (defaults to QUOTESYNC_SYNC_INTERVAL_SECS)
        #[arg(long)]
        interval: Option<u64>,
        /// Stop after this many rounds
        #[arg(long)]
        rounds: Option<u32>,
    },
}
