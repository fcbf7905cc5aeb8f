// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use cli::{Args, run};
pub use crate::core::ignore::{IGNORE_FILE_NAME, Patterns, load_ignore_patterns};
pub use crate::core::renamer::{rename_file, renamed_path};
pub use crate::core::rewriter::{pending_references, rewrite_content};
pub use crate::core::scanner::{DocumentList, find_documents, process_directory, process_document};
pub use crate::core::transform::{count_date_references, transform_dates, transform_file_name};
pub use models::{FileOutcome, ProcessOptions, RunStats};
