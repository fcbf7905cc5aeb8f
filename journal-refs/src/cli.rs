// src/cli.rs
use anyhow::{Context as _, Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::core::scanner::process_directory;
use crate::models::ProcessOptions;
use crate::utils::{normalize_extension, print_summary};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to process (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Extension of the documents to process
    #[arg(short, long, default_value = "md")]
    pub extension: String,

    /// Report what would change without writing or renaming anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Keep processing the remaining documents after a failure
    #[arg(short, long)]
    pub keep_going: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    #[must_use]
    pub fn to_options(&self) -> ProcessOptions {
        ProcessOptions {
            directory: self.directory.clone(),
            extension: normalize_extension(&self.extension),
            dry_run: self.dry_run,
            keep_going: self.keep_going,
        }
    }
}

/// Runs one pass over the directory named in `args` and prints a summary.
///
/// # Errors
///
/// Returns an error if processing aborts, or if `--keep-going` was given and
/// at least one document failed.
pub fn run(args: Args) -> Result<()> {
    let options = args.to_options();
    if options.extension.is_empty() {
        bail!("Extension must not be empty");
    }

    let stats = process_directory(&options).with_context(|| {
        format!(
            "Failed to process directory: {}",
            options.directory.display()
        )
    })?;
    print_summary(&stats, options.dry_run);

    if stats.has_failures() {
        bail!("{} document(s) failed", stats.failed);
    }
    Ok(())
}
