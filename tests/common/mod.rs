/*!
 * Common test utilities shared across the test suite
 */

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

/// A small, well-formed SRT document with three caption blocks
pub fn sample_document() -> String {
    "1\n\
     00:00:10,000 --> 00:00:12,500\n\
     First caption\n\
     \n\
     2\n\
     00:00:15,000 --> 00:00:17,000\n\
     Second caption\n\
     with two lines\n\
     \n\
     3\n\
     00:01:00,250 --> 00:01:03,750\n\
     Third caption\n"
        .to_string()
}

/// Write an SRT document into a fresh temporary directory.
///
/// Returns the directory guard together with the file path; the directory is
/// removed when the guard drops.
pub fn write_temp_srt(file_name: &str, content: &str) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join(file_name);
    fs::write(&path, content)?;
    Ok((dir, path))
}
