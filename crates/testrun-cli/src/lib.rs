//! Run every `*.test.js` file under a directory as its own process
//!
//! Test files are discovered by name, executed one at a time with the
//! configured runtime, and reported with a pass/fail summary. The exit code of
//! each child is the only signal interpreted.
//!
//! # Example
//!
//! ```no_run
//! use testrun::commands::test;
//! use testrun::config::RunnerConfig;
//! use testrun::testing::TestReporter;
//!
//! let config = RunnerConfig::new("tests");
//! let mut reporter = TestReporter::stdout(false);
//! let outcome = test::run(&config, &mut reporter).unwrap();
//! std::process::exit(outcome.exit_code().into());
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod testing;

pub use config::{OutputMode, RunnerConfig};
pub use error::{RunnerError, RunnerResult};
