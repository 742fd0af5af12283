//! Command line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gcollect - Organize movie directories with catalog metadata
#[derive(Parser, Debug)]
#[command(name = "gcollect")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (raw errors and fetched records)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Never prompt; ambiguous lookups are treated as not found
    #[arg(short, long, global = true)]
    pub silent: bool,

    /// Use the local catalog server
    #[arg(short, long, global = true)]
    pub local: bool,

    /// Skip preflight checks
    ///
    /// Without them an unreachable catalog is not fatal: every lookup comes
    /// back empty and directories get a tag-only rename.
    #[arg(long, global = true)]
    pub skip_preflight: bool,

    /// Actor cache file (overrides the configured path)
    #[arg(long, global = true, value_name = "FILE")]
    pub actor_cache: Option<PathBuf>,

    /// Tag cache file (overrides the configured path)
    #[arg(long, global = true, value_name = "FILE")]
    pub tag_cache: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Organize a single directory
    Organize {
        /// Directory to organize (default: current directory)
        #[arg(value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Rename the directory once organized
        #[arg(short, long)]
        rename: bool,
    },

    /// Organize every subdirectory of a directory
    Batch {
        /// Parent directory (default: current directory)
        #[arg(value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Dry run - show the new names without renaming
        #[arg(long)]
        dry_run: bool,
    },

    /// Show a cache entry
    Get {
        /// Entry key
        #[arg(value_name = "KEY")]
        key: String,

        /// Use the tag cache instead of the actor cache
        #[arg(long)]
        tags: bool,
    },

    /// Set a cache entry
    Set {
        /// Entry key
        #[arg(value_name = "KEY")]
        key: String,

        /// Entry value
        #[arg(value_name = "VALUE")]
        value: String,

        /// Use the tag cache instead of the actor cache
        #[arg(long)]
        tags: bool,
    },
}
