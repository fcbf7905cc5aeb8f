// src/models.rs
use std::path::PathBuf;

/// What to process and how.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub directory: PathBuf,
    /// Extension without the leading dot, e.g. `md`.
    pub extension: String,
    pub dry_run: bool,
    pub keep_going: bool,
}

impl ProcessOptions {
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            extension: String::from("md"),
            dry_run: false,
            keep_going: false,
        }
    }
}

/// Result of processing one document.
#[derive(Debug, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub references: usize,
    pub renamed_to: Option<PathBuf>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub documents: u64,
    pub rewritten: u64,
    pub references: u64,
    pub renamed: u64,
    pub skipped: u64,
    pub failed: u64,
}

impl RunStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            documents: 0,
            rewritten: 0,
            references: 0,
            renamed: 0,
            skipped: 0,
            failed: 0,
        }
    }

    pub fn record(&mut self, outcome: &FileOutcome) {
        self.documents = self.documents.saturating_add(1);
        if outcome.references > 0 {
            self.rewritten = self.rewritten.saturating_add(1);
            let references = u64::try_from(outcome.references).unwrap_or(u64::MAX);
            self.references = self.references.saturating_add(references);
        }
        if outcome.renamed_to.is_some() {
            self.renamed = self.renamed.saturating_add(1);
        }
    }

    pub fn record_failure(&mut self) {
        self.documents = self.documents.saturating_add(1);
        self.failed = self.failed.saturating_add(1);
    }

    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
