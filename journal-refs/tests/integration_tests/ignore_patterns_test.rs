// tests/integration_tests/ignore_patterns_test.rs
use super::common::{create_ignore_file, read, setup_test_directory};
use anyhow::Result;
use journal_refs::{ProcessOptions, load_ignore_patterns, process_directory};

#[test]
fn test_ignored_documents_are_untouched() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_ignore_file(temp_dir.path(), &["# keep templates verbatim", "templates.md"])?;

    let stats = process_directory(&ProcessOptions::new(temp_dir.path()))?;

    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.documents, 4);
    assert_eq!(
        read(temp_dir.path(), "templates.md")?,
        "template: [[Jul 4th, 2000]]"
    );
    assert_eq!(read(temp_dir.path(), "notes.md")?, "Meeting on [[2022-03-05]]");
    Ok(())
}

#[test]
fn test_negated_pattern_reincludes() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_ignore_file(temp_dir.path(), &["*.md", "!notes.md"])?;

    let stats = process_directory(&ProcessOptions::new(temp_dir.path()))?;

    assert_eq!(stats.documents, 1);
    assert_eq!(stats.skipped, 4);
    assert_eq!(read(temp_dir.path(), "notes.md")?, "Meeting on [[2022-03-05]]");
    assert!(temp_dir.path().join("Jan 1st, 2020.md").is_file());
    Ok(())
}

#[test]
fn test_empty_ignore_file() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_ignore_file(temp_dir.path(), &[])?;

    let patterns = load_ignore_patterns(temp_dir.path())?;
    assert!(patterns.is_empty());
    Ok(())
}

#[test]
fn test_ignore_file_itself_is_not_a_document() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_ignore_file(temp_dir.path(), &["templates.md"])?;
    let options = ProcessOptions {
        extension: String::from("journalrefsignore"),
        ..ProcessOptions::new(temp_dir.path())
    };

    let stats = process_directory(&options)?;

    assert_eq!(stats.documents, 0, "Hidden files are never processed");
    Ok(())
}
