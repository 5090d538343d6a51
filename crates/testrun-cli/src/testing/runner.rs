//! Test runner - execute discovered test files one at a time

use crate::config::{OutputMode, RunnerConfig};
use crate::error::RunnerError;
use crate::testing::discovery::{TestFile, TestSuite};
use std::io;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Result of running a single test file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    /// File path relative to the traversal root
    pub file: PathBuf,
    /// Whether the process exited with status 0
    pub success: bool,
    /// Captured output, or a description of the failure
    pub output: String,
}

impl TestResult {
    pub fn pass(file: PathBuf, output: String) -> Self {
        Self {
            file,
            success: true,
            output,
        }
    }

    pub fn fail(file: PathBuf, output: String) -> Self {
        Self {
            file,
            success: false,
            output,
        }
    }

    /// Check if this result is a pass
    pub fn is_pass(&self) -> bool {
        self.success
    }

    /// Check if this result is a failure
    pub fn is_fail(&self) -> bool {
        !self.success
    }

    /// First line of a failure's output, shown inline in the report
    pub fn excerpt(&self) -> Option<&str> {
        if self.success || self.output.is_empty() {
            return None;
        }
        self.output.lines().next()
    }
}

/// Launches each test file as `<runtime> <file>` and waits for it
pub struct TestRunner {
    runtime: String,
    output: OutputMode,
}

impl TestRunner {
    /// Create a runner using the configured runtime and output mode
    pub fn new(config: &RunnerConfig) -> Self {
        Self {
            runtime: config.runtime.clone(),
            output: config.output,
        }
    }

    /// Run every file in the suite in discovery order
    ///
    /// `before_each` is called just before each child is spawned; an error
    /// from it stops the run. Otherwise exactly one result is produced per file.
    pub fn run<F>(&self, suite: &TestSuite, mut before_each: F) -> io::Result<Vec<TestResult>>
    where
        F: FnMut(&TestFile) -> io::Result<()>,
    {
        let mut results = Vec::with_capacity(suite.len());
        for file in &suite.files {
            before_each(file)?;
            results.push(self.run_single_test(file));
        }
        Ok(results)
    }

    /// Run a single test file to completion
    pub fn run_single_test(&self, file: &TestFile) -> TestResult {
        let mut cmd = Command::new(&self.runtime);
        cmd.arg(&file.path);
        self.output.configure(&mut cmd);

        tracing::debug!(runtime = %self.runtime, file = %file.path.display(), "spawning test");

        match cmd.output() {
            Ok(output) if output.status.success() => {
                tracing::debug!(file = %file.relative.display(), "test passed");
                TestResult::pass(
                    file.relative.clone(),
                    String::from_utf8_lossy(&output.stdout).into_owned(),
                )
            }
            Ok(output) => {
                tracing::debug!(file = %file.relative.display(), status = %output.status, "test failed");
                TestResult::fail(file.relative.clone(), failure_output(&output))
            }
            Err(source) => {
                let err = RunnerError::Spawn {
                    program: self.runtime.clone(),
                    file: file.path.clone(),
                    source,
                };
                tracing::debug!(error = %err, "test could not be launched");
                TestResult::fail(file.relative.clone(), err.to_string())
            }
        }
    }
}

/// Prefer stdout, then stderr, then the exit status itself
fn failure_output(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.trim().is_empty() {
        return stdout.into_owned();
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        return stderr.into_owned();
    }

    format!("Test process failed ({})", output.status)
}
