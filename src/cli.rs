//! CLI argument parsing for crelate.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use crelate::UNCATEGORIZED;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "crelate",
    about = "Work with contacts, notes and tags in Crelate CRM",
    version,
    after_help = "Logs are written to: ~/.local/share/crelate/logs/crelate.log"
)]
pub struct Cli {
    /// Crelate API key (default: $CRELATE_API_KEY or the config file)
    #[arg(short = 'k', long, global = true)]
    pub api_key: Option<String>,

    /// API root URL (default: https://app.crelate.com/api3)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Path to the config file (default: ~/.config/crelate/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check whether an API key is configured
    Status,

    /// List contacts that carry a tag
    Contacts {
        /// Tag name
        tag: String,
    },

    /// Show a contact by ID
    Get {
        /// Contact ID
        id: String,
    },

    /// Create a note on a contact
    Note {
        /// Contact ID
        id: String,

        /// Note text
        body: String,

        /// Timestamp for the note (RFC 3339)
        #[arg(short, long)]
        when: Option<DateTime<Utc>>,
    },

    /// Remove a tag from a contact
    Untag {
        /// Contact ID
        id: String,

        /// Tag title to remove
        tag: String,

        /// Tag category ID
        #[arg(long, default_value = UNCATEGORIZED)]
        category: String,
    },
}
