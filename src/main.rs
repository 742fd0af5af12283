//! gcollect CLI
//!
//! A command-line tool for organizing movie directories with catalog metadata.

use clap::Parser;
use gcollect::cli::{
    args::{Cli, Commands},
    commands::{cache, organize, RunSettings},
};
use gcollect::models::config;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    tracing::debug!("Params: {:?}", cli);

    let mut settings = RunSettings::from_config(
        config::load_config(),
        cli.local,
        cli.actor_cache,
        cli.tag_cache,
    );
    settings.silent = cli.silent;
    settings.skip_preflight = cli.skip_preflight;

    // Run the appropriate command
    match cli.command {
        Commands::Organize { dir, rename } => {
            let dir = resolve_dir(dir)?;
            organize::organize_one(&settings, &dir, rename).await?;
        }

        Commands::Batch { dir, dry_run } => {
            let dir = resolve_dir(dir)?;
            organize::organize_all(&settings, &dir, dry_run).await?;
        }

        Commands::Get { key, tags } => {
            cache::get(&settings, &key, tags)?;
        }

        Commands::Set { key, value, tags } => {
            cache::set(&settings, &key, &value, tags)?;
        }
    }

    Ok(())
}

/// Use the given directory or the current one.
fn resolve_dir(dir: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => Ok(std::env::current_dir()?),
    }
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("gcollect=debug")
    } else {
        EnvFilter::new("gcollect=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
