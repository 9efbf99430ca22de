use anyhow::{Result, Context};
use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use log::warn;
use tempfile::NamedTempFile;
use walkdir::WalkDir;

// @module: File and directory utilities

/// Explicit inputs after expansion and classification
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedInputs {
    /// Subtitle files to process, sorted and de-duplicated
    pub files: Vec<PathBuf>,

    /// Existing paths that are not subtitle files
    pub skipped: Vec<PathBuf>,

    /// Paths that do not exist
    pub missing: Vec<PathBuf>,
}

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> io::Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    // @generates: Output path for a cleaned subtitle, keeping the input file name
    pub fn generate_output_path<P1: AsRef<Path>, P2: AsRef<Path>>(
        input_file: P1,
        output_dir: P2,
    ) -> PathBuf {
        let file_name = input_file
            .as_ref()
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| "output.srt".into());

        output_dir.as_ref().join(file_name)
    }

    /// Check whether a path has one of the given extensions (case-insensitive, without dot)
    pub fn has_extension<P: AsRef<Path>>(path: P, extensions: &[String]) -> bool {
        path.as_ref()
            .extension()
            .map(|ext| ext.to_string_lossy())
            .is_some_and(|ext| {
                extensions
                    .iter()
                    .any(|wanted| ext.eq_ignore_ascii_case(wanted.trim_start_matches('.')))
            })
    }

    /// Find files with one of the given extensions in a directory.
    ///
    /// Entries below `dir` that cannot be read (permissions, symlink loops) are
    /// logged and skipped; only a failure to read `dir` itself is an error.
    pub fn find_files<P: AsRef<Path>>(dir: P, extensions: &[String], recursive: bool) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let walker = WalkDir::new(dir.as_ref()).follow_links(true);
        let walker = if recursive { walker } else { walker.max_depth(1) };

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(e).context("Failed to read directory");
                }
                Err(e) => {
                    warn!("Skipping unreadable directory entry: {}", e);
                    continue;
                }
            };
            let path = entry.path();

            if path.is_file() && Self::has_extension(path, extensions) {
                result.push(path.to_path_buf());
            }
        }

        Ok(result)
    }

    /// Sort explicit inputs into subtitle files to process, non-subtitle files
    /// and paths that do not exist.
    ///
    /// Directories are expanded with [`FileManager::find_files`]. The file list is
    /// sorted and de-duplicated.
    pub fn collect_inputs(
        inputs: &[PathBuf],
        extensions: &[String],
        recursive: bool,
    ) -> Result<CollectedInputs> {
        let mut files = BTreeSet::new();
        let mut collected = CollectedInputs::default();

        for input in inputs {
            if Self::dir_exists(input) {
                let found = Self::find_files(input, extensions, recursive)
                    .with_context(|| format!("Failed to scan directory: {}", input.display()))?;
                files.extend(found);
            } else if !input.exists() {
                collected.missing.push(input.clone());
            } else if Self::has_extension(input, extensions) {
                files.insert(input.clone());
            } else {
                collected.skipped.push(input.clone());
            }
        }

        collected.files = files.into_iter().collect();
        Ok(collected)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> io::Result<String> {
        fs::read_to_string(path)
    }

    /// Write a string to a file.
    ///
    /// The content goes to a temporary file next to the destination which is then
    /// renamed over it, so the destination is either fully written or untouched.
    pub fn write_atomic<P: AsRef<Path>>(path: P, content: &str) -> io::Result<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        Self::ensure_dir(parent)?;

        let mut temp = NamedTempFile::new_in(parent)?;
        temp.write_all(content.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}
