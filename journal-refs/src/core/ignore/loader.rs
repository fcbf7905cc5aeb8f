// src/core/ignore/loader.rs
use crate::core::ignore::Patterns;
use anyhow::{Context as _, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const IGNORE_FILE_NAME: &str = ".journalrefsignore";

/// Finds the nearest .journalrefsignore, looking in `dir` first and then in
/// each of its parents.
#[must_use]
pub fn find_ignore_file(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .map(|ancestor| ancestor.join(IGNORE_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Loads the patterns of the nearest .journalrefsignore file.
///
/// # Returns
///
/// * `Ok(Patterns)` - The loaded patterns, empty when no ignore file exists
///
/// # Errors
///
/// This function may return an error if:
/// * The ignore file exists but cannot be read
/// * A line contains invalid pattern syntax
pub fn load_ignore_patterns(dir: &Path) -> Result<Patterns> {
    let mut patterns = Patterns::new();
    let Some(ignore_file) = find_ignore_file(dir) else {
        return Ok(patterns);
    };

    let content = fs::read_to_string(&ignore_file)
        .with_context(|| format!("Failed to read ignore file: {}", ignore_file.display()))?;
    for line in content.lines() {
        patterns
            .add_pattern(line)
            .with_context(|| format!("In ignore file: {}", ignore_file.display()))?;
    }

    debug!(file = %ignore_file.display(), "loaded ignore patterns");
    Ok(patterns)
}
