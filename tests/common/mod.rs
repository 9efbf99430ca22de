/*!
 * Common test utilities for the ccremover test suite
 */

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Subtitle content with captions: a caption-only block, a mixed block and a mismatched-bracket line
pub const CAPTIONED_SUBTITLE: &str = "1
00:00:01,000 --> 00:00:02,000
[wind howling]

2
00:00:03,000 --> 00:00:04,000
(sighs)
Hello there

3
00:00:05,000 --> 00:00:06,000
General Kenobi!
[mismatched)

4
00:00:07,000 --> 00:00:08,000
You are a bold one.
";

/// Expected output of cleaning `CAPTIONED_SUBTITLE`
pub const CAPTIONED_SUBTITLE_CLEANED: &str = "1
00:00:03,000 --> 00:00:04,000
Hello there

2
00:00:05,000 --> 00:00:06,000
General Kenobi!

3
00:00:07,000 --> 00:00:08,000
You are a bold one.

";

/// Subtitle content without any caption line
pub const PLAIN_SUBTITLE: &str = "1
00:00:01,000 --> 00:00:04,000
This is a test subtitle.

2
00:00:05,000 --> 00:00:09,000
It contains multiple entries.
";

/// Initialize test logging once; repeated calls are ignored
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
