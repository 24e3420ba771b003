/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use subtext::errors::AppError;
use subtext::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "exists.txt", "test content")?;

    assert!(FileManager::file_exists(&test_file));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that read_to_string returns file content correctly
#[test]
fn test_read_to_string_withValidFile_shouldReturnContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "content.txt", "some text\n")?;

    let content = FileManager::read_to_string(&test_file).unwrap();
    assert_eq!(content, "some text\n");

    Ok(())
}

/// Test that a missing path maps to the NotFound error kind
#[test]
fn test_read_to_string_withMissingFile_shouldReturnNotFound() {
    let result = FileManager::read_to_string("no/such/file.txt");
    match result {
        Err(AppError::NotFound(path)) => assert_eq!(path, "no/such/file.txt"),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

/// Test that unreadable content maps to the ReadFailure error kind
#[test]
fn test_read_to_string_withInvalidUtf8_shouldReturnReadFailure() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("binary.txt");
    std::fs::write(&path, [0xff, 0xfe, 0x00, 0x9f])?;

    let result = FileManager::read_to_string(&path);
    assert!(matches!(result, Err(AppError::ReadFailure(_))));

    Ok(())
}
