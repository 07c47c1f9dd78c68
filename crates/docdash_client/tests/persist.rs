use std::fs;

use docdash_client::{ensure_state_dir, AtomicFileWriter, PersistError};
use tempfile::TempDir;

#[test]
fn creates_missing_state_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("state");
    assert!(!new_dir.exists());
    ensure_state_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("preferences.ron", "(dark_mode: true)").unwrap();
    assert_eq!(first.file_name().unwrap(), "preferences.ron");
    assert_eq!(fs::read_to_string(&first).unwrap(), "(dark_mode: true)");

    let second = writer.write("preferences.ron", "(dark_mode: false)").unwrap();
    assert_eq!(first, second);
    assert_eq!(
        writer.read("preferences.ron").unwrap().as_deref(),
        Some("(dark_mode: false)")
    );
}

#[test]
fn reading_missing_file_is_none() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().join("never-created"));
    assert_eq!(writer.read("preferences.ron").unwrap(), None);
}

#[test]
fn state_dir_that_is_a_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    let result = writer.write("preferences.ron", "data");
    assert!(matches!(result, Err(PersistError::StateDir(_))));
    assert!(!file_path.with_file_name("preferences.ron").exists());
}
