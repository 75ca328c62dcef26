//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lifereview")]
#[command(about = "Daily and weekly life reviews with domain score tracking", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new review journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set (editor, window_days, created)
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Create a review from the template if needed and open it
    Open {
        /// Review kind (daily, weekly)
        #[arg(default_value = "daily")]
        kind: String,

        /// Date the review covers, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Create the file without launching the editor
        #[arg(long)]
        no_edit: bool,
    },

    /// Print one parsed review
    Show {
        /// Review kind (daily, weekly)
        kind: String,

        /// Date the review covers, YYYY-MM-DD (any day of the week for weekly)
        date: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List review files, newest first
    List {
        /// List weekly reviews instead of daily ones
        #[arg(short, long)]
        weekly: bool,

        /// Start date (inclusive), YYYY-MM-DD
        #[arg(long)]
        from: Option<String>,

        /// End date (inclusive), YYYY-MM-DD
        #[arg(long)]
        to: Option<String>,

        /// Maximum number of entries to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Average domain scores over a window of daily reviews
    Scores {
        /// Start date (inclusive), YYYY-MM-DD
        #[arg(long)]
        from: Option<String>,

        /// End date (inclusive), YYYY-MM-DD (default: today)
        #[arg(long)]
        to: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show energy levels over a window of daily reviews
    Energy {
        /// Start date (inclusive), YYYY-MM-DD
        #[arg(long)]
        from: Option<String>,

        /// End date (inclusive), YYYY-MM-DD (default: today)
        #[arg(long)]
        to: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or edit the life map
    Lifemap {
        #[command(subcommand)]
        action: LifemapAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum LifemapAction {
    /// Print the life map table
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set one domain's score and, optionally, its assessment
    Set {
        /// Domain (career, relationships, health, meaning, finances, fun)
        domain: String,

        /// Score from 0 to 10 (0 = not rated)
        score: String,

        /// Brief assessment (keeps the existing one when omitted)
        assessment: Option<String>,
    },
}
