// src/core/ignore.rs
mod loader;

pub use loader::{IGNORE_FILE_NAME, find_ignore_file, load_ignore_patterns};

use anyhow::{Context as _, Result, bail};
use glob::Pattern;
use std::path::Path;

#[derive(Debug, Default)]
pub struct Patterns {
    /// Compiled patterns in file order, each paired with whether it is a
    /// negation (`!pattern`) that re-includes documents ignored earlier.
    patterns: Vec<(Pattern, bool)>,
}

impl Patterns {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Adds one line of an ignore file.
    ///
    /// Blank lines and `#` comments are skipped, a leading `!` negates the
    /// pattern, and a single brace group such as `*.{tmp,bak}` expands into one
    /// pattern per alternative.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The pattern contains invalid glob syntax
    /// * A brace group is not closed
    pub fn add_pattern(&mut self, line: &str) -> Result<()> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let (pattern, is_negation) = line
            .strip_prefix('!')
            .map_or((line, false), |stripped| (stripped, true));

        for expanded in expand_braces(pattern)? {
            let compiled = Pattern::new(&expanded)
                .with_context(|| format!("Invalid ignore pattern: {expanded}"))?;
            self.patterns.push((compiled, is_negation));
        }
        Ok(())
    }

    /// Checks whether a document should be skipped.
    ///
    /// Patterns are matched against the file name. The last matching pattern
    /// decides, so `!keep.md` after `*.md` re-includes `keep.md`.
    pub fn matches(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        let Some(name) = path.file_name().map(|f| f.to_string_lossy()) else {
            return false;
        };

        self.patterns
            .iter()
            .rev()
            .find(|(pattern, _)| pattern.matches(&name))
            .is_some_and(|(_, is_negation)| !is_negation)
    }
}

fn expand_braces(pattern: &str) -> Result<Vec<String>> {
    let Some((prefix, suffix)) = pattern.split_once('{') else {
        return Ok(vec![pattern.to_owned()]);
    };
    let Some((alternatives, rest)) = suffix.split_once('}') else {
        bail!("Invalid ignore pattern: missing closing brace in {pattern}");
    };

    Ok(alternatives
        .split(',')
        .map(str::trim)
        .map(|alt| format!("{prefix}{alt}{rest}"))
        .collect())
}
