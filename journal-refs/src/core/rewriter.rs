// src/core/rewriter.rs
use anyhow::{Context as _, Result};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::core::transform::{count_date_references, transform_dates};

fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Rewrites the date references in a document in place.
///
/// The whole file is read and released before anything is written, and the
/// file is only written when at least one reference was converted.
///
/// # Arguments
///
/// * `path` - The document to rewrite
///
/// # Returns
///
/// * `Ok(usize)` - The number of date references converted
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read, or is not valid UTF-8 text
/// * The rewritten content cannot be written back
pub fn rewrite_content(path: &Path) -> Result<usize> {
    let content = read_document(path)?;
    let converted = count_date_references(&content);

    match transform_dates(&content) {
        Cow::Borrowed(_) => {
            debug!(path = %path.display(), "no date references");
        }
        Cow::Owned(rewritten) => {
            fs::write(path, rewritten)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            debug!(path = %path.display(), converted, "rewrote date references");
        }
    }

    Ok(converted)
}

/// Counts the date references [`rewrite_content`] would convert, without writing.
///
/// # Errors
///
/// Returns an error if the file cannot be read as UTF-8 text.
pub fn pending_references(path: &Path) -> Result<usize> {
    let content = read_document(path)?;
    Ok(count_date_references(&content))
}
