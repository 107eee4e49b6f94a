//! wikitag
//!
//! # What this program is
//! A small command-line tool that reads a Wikipedia album page, works out the
//! album's tags (artist, album, genre, label, year) and every track's tags
//! (title, number, performers), and writes them onto the album's MP3 files.
//!
//! # How a run works
//! - Load the page: fetch a URL, or read a saved HTML file.
//! - General tags: inferred from the page, or taken from a `--rules` file.
//! - Track tags: one per row of the page's track listing.
//! - Each track is written to `<dir>/<album artist> - <title>.mp3` if that file exists.
//!
//! # Logging
//! `RUST_LOG` wins when set; otherwise `wikitag=info`, or `wikitag=debug` with `--verbose`.

mod core;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::types::RunConfig;

/// Command-line arguments for wikitag
#[derive(Parser, Debug)]
#[command(name = "wikitag")]
#[command(about = "Tag an album's MP3 files from its Wikipedia page")]
#[command(version)]
struct Cli {
    /// Wikipedia album page URL, or a path to a saved copy of it
    source: String,

    /// Six-line file with artist, album, genre, label, year and debug flag.
    /// Skips inferring the general tags from the page.
    #[arg(short, long)]
    rules: Option<PathBuf>,

    /// Folder holding the "<artist> - <title>.mp3" files
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Build and log the tags without writing any file
    #[arg(long)]
    dry_run: bool,

    /// Log every written tag
    #[arg(long)]
    debug: bool,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "wikitag=debug"
    } else {
        "wikitag=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let document = crate::core::fetch::load_document(&cli.source)
        .with_context(|| format!("failed to load {}", cli.source))?;

    let album = crate::core::build_album(&document, cli.rules.as_deref())
        .context("failed to extract album metadata")?;

    let config = RunConfig {
        music_dir: cli.dir,
        debug: cli.debug,
        dry_run: cli.dry_run,
    };
    if config.dry_run {
        info!(general = ?album.general, "dry run");
    }

    let report = crate::core::apply_album(&album, &config).context("failed to write tags")?;

    info!(
        written = report.written,
        missing = report.missing.len(),
        "done"
    );
    Ok(())
}
