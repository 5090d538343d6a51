//! Error taxonomy for discovery and execution
//!
//! Only the root errors are fatal. Directory read errors become warnings and
//! spawn errors become failed results; neither stops the run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while discovering or launching test files
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Test root not found: {}", path.display())]
    RootNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Test root is not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("Could not read directory {}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to launch `{program} {}`: {source}", file.display())]
    Spawn {
        program: String,
        file: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for runner operations
pub type RunnerResult<T> = Result<T, RunnerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_error_message_names_command() {
        let err = RunnerError::Spawn {
            program: "node".to_string(),
            file: PathBuf::from("tests/a.test.js"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };

        let message = err.to_string();
        assert!(message.starts_with("Failed to launch `node tests/a.test.js`"));
        assert!(message.contains("No such file or directory"));
    }

    #[test]
    fn test_root_not_directory_message() {
        let err = RunnerError::RootNotDirectory(PathBuf::from("tests/run.js"));
        assert_eq!(err.to_string(), "Test root is not a directory: tests/run.js");
    }
}
