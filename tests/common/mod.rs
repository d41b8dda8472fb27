/*!
 * Common test utilities for the subrip test suite
 */

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use subrip::Timecode;
use tempfile::TempDir;

/// Two cues, the second without a trailing blank line
pub const TWO_CUES: &str = "1\n00:00:01,000 --> 00:00:02,000\nHello, World!\n\n2\n00:00:03,000 --> 00:00:04,000\nGoodbye, World!";

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample subtitle file for testing
pub fn create_test_subtitle(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, TWO_CUES)
}

/// Shorthand timecode constructor
pub fn tc(hour: u32, minute: u32, second: u32, millisecond: u32) -> Timecode {
    Timecode { hour, minute, second, millisecond }
}

/// Helper to get the absolute path to a test resource
pub fn test_resource_path(relative_path: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("resources");
    path.push(relative_path);
    path
}
