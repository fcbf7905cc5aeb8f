// src/core/scanner.rs
use anyhow::{Context as _, Result, bail};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::core::ignore::{Patterns, load_ignore_patterns};
use crate::core::renamer::{ensure_vacant, rename_file, renamed_path};
use crate::core::rewriter::{pending_references, rewrite_content};
use crate::models::{FileOutcome, ProcessOptions, RunStats};
use crate::utils::{absolute_dir, has_extension, is_hidden};

/// Documents selected for processing.
#[derive(Debug, Default)]
pub struct DocumentList {
    pub paths: Vec<PathBuf>,
    /// Documents that matched an ignore pattern.
    pub ignored: u64,
}

/// Lists the documents directly inside `dir` with the given extension.
///
/// Subdirectories are not entered, hidden files are skipped, and documents
/// matching `ignore_patterns` are counted but not returned. Paths are sorted by
/// file name.
///
/// # Arguments
///
/// * `dir` - The directory to scan
/// * `extension` - The extension to select, without the leading dot
/// * `ignore_patterns` - Patterns naming documents to leave alone
///
/// # Errors
///
/// This function may return an error if:
/// * The directory does not exist or cannot be read
/// * File system operations fail during traversal
pub fn find_documents(
    dir: &Path,
    extension: &str,
    ignore_patterns: &Patterns,
) -> Result<DocumentList> {
    let mut documents = DocumentList::default();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
    {
        let entry = entry.with_context(|| format!("Failed to scan directory: {}", dir.display()))?;
        if !entry.file_type().is_file() || !has_extension(entry.path(), extension) {
            continue;
        }

        if ignore_patterns.matches(entry.path()) {
            debug!(path = %entry.path().display(), "ignored");
            documents.ignored = documents.ignored.saturating_add(1);
            continue;
        }

        documents.paths.push(entry.into_path());
    }

    Ok(documents)
}

/// Rewrites the date references of one document, then renames it.
///
/// The content is always handled before the name, so a failed rename leaves
/// converted content under the old name.
///
/// # Errors
///
/// This function may return an error if:
/// * `path` is not a regular file or does not have the expected extension
/// * The file cannot be read or written
/// * The new name is already taken or the rename fails
pub fn process_document(path: &Path, options: &ProcessOptions) -> Result<FileOutcome> {
    let metadata =
        fs::metadata(path).with_context(|| format!("Failed to stat file: {}", path.display()))?;
    if !metadata.is_file() {
        bail!("Not a regular file: {}", path.display());
    }
    if !has_extension(path, &options.extension) {
        bail!(
            "Expected a .{} document: {}",
            options.extension,
            path.display()
        );
    }

    if options.dry_run {
        let references = pending_references(path)?;
        let renamed_to = renamed_path(path);
        if let Some(new_path) = &renamed_to {
            ensure_vacant(path, new_path)?;
            println!("Would rename {} to {}", path.display(), new_path.display());
        }
        if references > 0 {
            println!("Would convert {references} date reference(s)");
        }
        return Ok(FileOutcome {
            path: path.to_path_buf(),
            references,
            renamed_to,
        });
    }

    let references = rewrite_content(path)?;
    let new_path = rename_file(path)?;
    let renamed_to = (new_path != path).then_some(new_path);

    Ok(FileOutcome {
        path: path.to_path_buf(),
        references,
        renamed_to,
    })
}

fn claim_destination(claimed: &mut HashSet<PathBuf>, outcome: &FileOutcome) -> Result<()> {
    if let Some(new_path) = &outcome.renamed_to {
        if !claimed.insert(new_path.clone()) {
            bail!(
                "Cannot rename {} to {}: destination already exists",
                outcome.path.display(),
                new_path.display()
            );
        }
    }
    Ok(())
}

/// Processes every document directly inside the configured directory.
///
/// By default the first failure aborts the run. With `keep_going` set, a
/// failing document is reported, counted in [`RunStats::failed`], and the
/// remaining documents are still processed.
///
/// # Arguments
///
/// * `options` - Directory, extension filter and run mode
///
/// # Returns
///
/// * `Ok(RunStats)` - Totals for the run
///
/// # Errors
///
/// This function may return an error if:
/// * The directory cannot be scanned
/// * The ignore file cannot be read or parsed
/// * Any document fails and `keep_going` is not set
pub fn process_directory(options: &ProcessOptions) -> Result<RunStats> {
    let dir = absolute_dir(&options.directory)?;
    let ignore_patterns = load_ignore_patterns(&dir)?;
    let documents = find_documents(&dir, &options.extension, &ignore_patterns)?;

    let mut stats = RunStats::new();
    stats.skipped = documents.ignored;
    // Destinations a dry run has already promised; the real run would find them taken.
    let mut claimed = HashSet::new();

    let total = documents.paths.len();
    info!(dir = %dir.display(), total, "processing documents");

    for (index, path) in documents.paths.iter().enumerate() {
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        println!("[{}/{total}] {name}", index.saturating_add(1));

        let result = process_document(path, options).and_then(|outcome| {
            if options.dry_run {
                claim_destination(&mut claimed, &outcome)?;
            }
            Ok(outcome)
        });

        match result {
            Ok(outcome) => stats.record(&outcome),
            Err(err) if options.keep_going => {
                eprintln!("Error: {err:#}");
                stats.record_failure();
            }
            Err(err) => {
                return Err(err.context(format!("Failed to process {}", path.display())));
            }
        }
    }

    Ok(stats)
}
