//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Terminal mood journal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new mood tracker
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Entries shown per page in `list`
        #[arg(long, default_value_t = 10)]
        page_size: usize,
    },

    /// Record today's mood
    Log {
        /// Mood: great, good, okay, down, struggling (or 1-5)
        mood: String,

        /// Activity tag (repeatable): exercise, work, social, hobby, rest, nature
        #[arg(short, long = "activity", value_name = "TAG")]
        activities: Vec<String>,

        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Mark today as skipped
    Skip,

    /// Show today's entry
    Today,

    /// Show the weekly chart, mood distribution and summary
    Stats,

    /// List entries, newest first
    List {
        /// Time window: all, 7d, 30d, 90d (default: configured window)
        #[arg(short, long)]
        window: Option<String>,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Export all entries to a JSON file
    Export {
        /// Directory to write the export into (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete all entries
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
