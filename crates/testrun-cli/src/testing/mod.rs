//! Test file runner infrastructure
//!
//! Discovery walks a directory tree for files following the naming
//! convention, the runner launches each one as its own process, and the
//! reporter prints the per-file results and summary.

pub mod discovery;
pub mod reporter;
pub mod runner;

pub use discovery::{TestFile, TestSuite};
pub use reporter::{RunSummary, TestReporter};
pub use runner::{TestResult, TestRunner};
