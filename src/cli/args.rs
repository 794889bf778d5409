use crate::config::Settings;

use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

/// Book catalog service with a concurrent reading simulator.
#[derive(Debug, Parser)]
#[command(name = "books")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Defaults to `serve` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve,

    /// Search books by (part of) their title.
    Search {
        /// Text to look for in book titles.
        name: String,
    },

    /// Simulate reading several books at the same time.
    Simulate {
        /// Book ids. Tokens that are not integers are skipped with a warning.
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        book_ids: Vec<String>,
    },
}

/// Flags that override the `BOOKS_*` environment variables.
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// JSON file with the catalog (array of books).
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// HTTP listen address.
    #[arg(long, global = true)]
    pub bind: Option<SocketAddr>,

    /// Simulated reading time per book, in milliseconds.
    #[arg(long, global = true)]
    pub reading_ms: Option<u64>,

    /// Maximum number of simulation tasks running at once.
    #[arg(long, global = true)]
    pub max_concurrency: Option<NonZeroUsize>,
}

impl GlobalArgs {
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(catalog) = &self.catalog {
            settings.catalog_path = Some(catalog.clone());
        }
        if let Some(bind) = self.bind {
            settings.bind_addr = bind;
        }
        if let Some(ms) = self.reading_ms {
            settings.reading_duration = Duration::from_millis(ms);
        }
        if let Some(max) = self.max_concurrency {
            settings.max_concurrency = Some(max);
        }
        settings
    }
}
