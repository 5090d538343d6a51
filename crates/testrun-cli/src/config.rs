//! Run configuration
//!
//! Everything the runner needs is fixed once at startup and never read from
//! files or the environment. The defaults describe a JavaScript project:
//! `*.test.js` files under `tests/`, run with `node`, skipping `node_modules`.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Default traversal root
pub const DEFAULT_ROOT: &str = "tests";
/// Default test-file suffix
pub const DEFAULT_SUFFIX: &str = ".test.js";
/// Default dependency-cache directory pruned from traversal
pub const DEFAULT_EXCLUDED_DIR: &str = "node_modules";
/// Default program that launches a test file
pub const DEFAULT_RUNTIME: &str = "node";

/// Where a child's output goes, chosen once for the whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Buffer stdout and stderr; surfaced only on failure
    #[default]
    Capture,
    /// Child shares the runner's stdout and stderr
    Inherit,
}

impl OutputMode {
    /// Select the mode from the `--verbose` flag
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            OutputMode::Inherit
        } else {
            OutputMode::Capture
        }
    }

    pub fn is_verbose(self) -> bool {
        self == OutputMode::Inherit
    }

    /// Wire the child's standard streams for this mode
    pub fn configure(self, cmd: &mut Command) {
        match self {
            OutputMode::Capture => {
                cmd.stdout(Stdio::piped())
                    .stderr(Stdio::piped())
                    .stdin(Stdio::null());
            }
            OutputMode::Inherit => {
                cmd.stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .stdin(Stdio::inherit());
            }
        }
    }
}

/// Immutable settings for one run
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Directory to search for test files
    pub root: PathBuf,
    /// File-name suffix identifying a test file (e.g., ".test.js")
    pub suffix: String,
    /// Directory name never descended into
    pub excluded_dir: String,
    /// Program invoked with the test file as its only argument
    pub runtime: String,
    /// Output handling for every child
    pub output: OutputMode,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}

impl RunnerConfig {
    /// Create a configuration rooted at `root` with the default conventions
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            suffix: DEFAULT_SUFFIX.to_string(),
            excluded_dir: DEFAULT_EXCLUDED_DIR.to_string(),
            runtime: DEFAULT_RUNTIME.to_string(),
            output: OutputMode::default(),
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_excluded_dir(mut self, name: impl Into<String>) -> Self {
        self.excluded_dir = name.into();
        self
    }

    pub fn with_runtime(mut self, runtime: impl Into<String>) -> Self {
        self.runtime = runtime.into();
        self
    }

    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    /// Check whether a file name follows the test naming convention
    pub fn is_test_file_name(&self, name: &str) -> bool {
        name.ends_with(&self.suffix)
    }

    /// Check whether a directory name is pruned from traversal
    pub fn is_excluded_dir_name(&self, name: &str) -> bool {
        name == self.excluded_dir
    }

    /// Path of `file` as shown in the report
    pub fn display_path(&self, file: &Path) -> PathBuf {
        file.strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| file.to_path_buf())
    }
}
