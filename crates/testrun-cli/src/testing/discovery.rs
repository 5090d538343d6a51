//! Test discovery - find test files in a directory tree

use crate::config::RunnerConfig;
use crate::error::{RunnerError, RunnerResult};
use std::fs;
use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

/// A discovered test file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFile {
    /// Path used to launch the file
    pub path: PathBuf,
    /// Path relative to the traversal root, for display
    pub relative: PathBuf,
}

/// Test files found under a root, in traversal order
#[derive(Debug, Default)]
pub struct TestSuite {
    /// All discovered test files
    pub files: Vec<TestFile>,
    /// Directories that could not be read (their contents were skipped)
    pub warnings: Vec<RunnerError>,
}

impl TestSuite {
    /// Discover all test files under `config.root`
    ///
    /// Traversal is depth-first in directory listing order. Directories named
    /// `config.excluded_dir` are pruned below the root. Symbolic links are not
    /// followed. Only a missing or non-directory root is an error.
    pub fn discover(config: &RunnerConfig) -> RunnerResult<Self> {
        let metadata = fs::metadata(&config.root).map_err(|source| RunnerError::RootNotFound {
            path: config.root.clone(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(RunnerError::RootNotDirectory(config.root.clone()));
        }

        let mut suite = TestSuite::default();

        let walker = WalkDir::new(&config.root)
            .into_iter()
            .filter_entry(|entry| !is_excluded(config, entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) => {
                    let path = source
                        .path()
                        .map(|p| p.to_path_buf())
                        .unwrap_or_else(|| config.root.clone());
                    tracing::warn!(path = %path.display(), error = %source, "skipping unreadable directory");
                    suite
                        .warnings
                        .push(RunnerError::DirectoryRead { path, source });
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            // Names that are not valid UTF-8 still match on their lossy form
            if config.is_test_file_name(&entry.file_name().to_string_lossy()) {
                let path = entry.into_path();
                tracing::debug!(file = %path.display(), "discovered test file");
                suite.files.push(TestFile {
                    relative: config.display_path(&path),
                    path,
                });
            }
        }

        Ok(suite)
    }

    /// Check if suite has any test files
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Get count of test files
    pub fn len(&self) -> usize {
        self.files.len()
    }
}

/// Excluded directories are pruned everywhere except at the root itself
fn is_excluded(config: &RunnerConfig, entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && config.is_excluded_dir_name(&entry.file_name().to_string_lossy())
}
