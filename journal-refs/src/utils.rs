// src/utils.rs
use crate::models::RunStats;
use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};

pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == extension)
}

/// Accepts `md` as well as `.md` on the command line.
pub fn normalize_extension(extension: &str) -> String {
    extension.trim().trim_start_matches('.').to_owned()
}

pub fn absolute_dir(dir: &Path) -> Result<PathBuf> {
    if dir.is_absolute() {
        Ok(dir.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(dir))
    }
}

pub fn print_summary(stats: &RunStats, dry_run: bool) {
    if dry_run {
        println!("Dry run, no files were changed");
    }
    println!("Documents: {}", stats.documents);
    println!("Rewritten: {}", stats.rewritten);
    println!("References converted: {}", stats.references);
    println!("Renamed: {}", stats.renamed);
    println!("Skipped: {}", stats.skipped);
    if stats.has_failures() {
        println!("Failed: {}", stats.failed);
    }
}
