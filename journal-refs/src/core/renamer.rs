// src/core/renamer.rs
use anyhow::{Context as _, Result, bail};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::transform::transform_file_name;

/// Computes where [`rename_file`] would move `path`.
///
/// Only the base name is transformed; the directory part is kept as is. Both
/// `Jan 1st, 2020.md` and `[[Jan 1st, 2020]].md` are recognised.
/// Returns `None` when the name contains no date reference or is not UTF-8.
#[must_use]
pub fn renamed_path(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    match transform_file_name(name) {
        Cow::Borrowed(_) => None,
        Cow::Owned(new_name) => Some(path.with_file_name(new_name)),
    }
}

/// Fails when something already exists at `new_path`, dangling symlinks included.
///
/// # Errors
///
/// Returns an error naming both paths if the destination is taken.
pub fn ensure_vacant(path: &Path, new_path: &Path) -> Result<()> {
    if fs::symlink_metadata(new_path).is_ok() {
        bail!(
            "Cannot rename {} to {}: destination already exists",
            path.display(),
            new_path.display()
        );
    }
    Ok(())
}

/// Renames a document whose file name contains a date reference.
///
/// `Jan 1st, 2020.md` becomes `2020-01-01.md` in the same directory. A notice
/// is printed for every rename performed.
///
/// # Arguments
///
/// * `path` - The document to rename
///
/// # Returns
///
/// * `Ok(PathBuf)` - The new path, or `path` itself when the name is unchanged
///
/// # Errors
///
/// This function may return an error if:
/// * A file already exists under the new name (it is never overwritten)
/// * The underlying rename fails
pub fn rename_file(path: &Path) -> Result<PathBuf> {
    let Some(new_path) = renamed_path(path) else {
        return Ok(path.to_path_buf());
    };

    ensure_vacant(path, &new_path)?;

    println!("Renaming {} to {}", path.display(), new_path.display());
    fs::rename(path, &new_path).with_context(|| {
        format!(
            "Failed to rename {} to {}",
            path.display(),
            new_path.display()
        )
    })?;

    Ok(new_path)
}
