// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn create_ignore_file(dir: &Path, patterns: &[&str]) -> Result<()> {
    let content = patterns.join("\n");
    create_test_file(dir, journal_refs::IGNORE_FILE_NAME, &content)
}

pub fn read(dir: &Path, name: &str) -> Result<String> {
    Ok(fs::read_to_string(dir.join(name))?)
}

/// A Logseq-style pages directory with journal links in various shapes.
pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(temp_dir.path(), "notes.md", "Meeting on [[Mar 5th, 2022]]")?;

    create_test_file(
        temp_dir.path(),
        "project.md",
        "- Kickoff [[Jan 1st, 2020]]\n- Review [[Feb 2nd, 2021]]\n- Done [[2021-03-01]]\n",
    )?;

    create_test_file(
        temp_dir.path(),
        "malformed.md",
        "[Oct 31st, 2020] [[Oct 31st 2020]] [[October 31st, 2020]]",
    )?;

    create_test_file(temp_dir.path(), "Jan 1st, 2020.md", "- New year [[Dec 31st, 2019]]")?;

    create_test_file(temp_dir.path(), "templates.md", "template: [[Jul 4th, 2000]]")?;

    create_test_file(temp_dir.path(), "journals/Feb 3rd, 2021.md", "[[Feb 3rd, 2021]]")?;

    create_test_file(temp_dir.path(), "readme.txt", "[[Aug 8th, 2008]]")?;

    Ok(temp_dir)
}
