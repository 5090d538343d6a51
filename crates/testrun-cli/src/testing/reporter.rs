//! Test reporter - display discovery and results

use crate::error::RunnerError;
use crate::testing::discovery::TestFile;
use crate::testing::runner::TestResult;
use colored::*;
use std::io::{self, Stdout, Write};

const BANNER_RULE: &str = "========================================";
const SUMMARY_RULE: &str = "----------------------------------------";

/// Pass/fail counts derived from a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn from_results(results: &[TestResult]) -> Self {
        let passed = results.iter().filter(|r| r.is_pass()).count();
        Self {
            total: results.len(),
            passed,
            failed: results.len() - passed,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Writes the human-readable report
pub struct TestReporter<W: Write = Stdout> {
    out: W,
    /// Announce each file before it runs
    verbose: bool,
}

impl TestReporter<Stdout> {
    /// Reporter writing to standard output
    pub fn stdout(verbose: bool) -> Self {
        Self::new(io::stdout(), verbose)
    }
}

impl<W: Write> TestReporter<W> {
    pub fn new(out: W, verbose: bool) -> Self {
        Self { out, verbose }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the opening banner
    pub fn header(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.banner("         Running Test Suite")?;
        writeln!(self.out)
    }

    /// Print a non-fatal discovery problem
    pub fn warning(&mut self, warning: &RunnerError) -> io::Result<()> {
        writeln!(self.out, "{}", format!("Warning: {warning}").yellow())
    }

    /// Print the hint shown when nothing matched
    pub fn no_tests(&mut self, suffix: &str) -> io::Result<()> {
        writeln!(self.out, "{}", "No test files found.".yellow())?;
        writeln!(self.out, "Test files should be named *{suffix}")?;
        writeln!(self.out)?;
        writeln!(self.out, "Create your first test in tests/unit/example{suffix}")
    }

    /// Print the number of discovered files
    pub fn found(&mut self, count: usize) -> io::Result<()> {
        writeln!(self.out, "Found {count} test file(s)")?;
        writeln!(self.out)
    }

    /// Announce a file about to run (verbose only)
    pub fn running(&mut self, file: &TestFile) -> io::Result<()> {
        if !self.verbose {
            return Ok(());
        }
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}",
            format!("Running: {}", file.relative.display()).bold()
        )?;
        // Child output goes straight to the terminal, so ours must land first
        self.out.flush()
    }

    /// Print per-file results and the summary block
    pub fn report(&mut self, results: &[TestResult]) -> io::Result<RunSummary> {
        writeln!(self.out)?;
        self.banner("              Results")?;
        writeln!(self.out)?;

        for result in results {
            self.print_test_result(result)?;
        }

        let summary = RunSummary::from_results(results);
        self.print_summary(&summary)?;
        self.out.flush()?;
        Ok(summary)
    }

    fn banner(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "{}", BANNER_RULE.bold())?;
        writeln!(self.out, "{}", title.bold())?;
        writeln!(self.out, "{}", BANNER_RULE.bold())
    }

    fn print_test_result(&mut self, result: &TestResult) -> io::Result<()> {
        let file = result.file.display();
        if result.is_pass() {
            return writeln!(self.out, "{}", format!("✓ {file}").green());
        }

        writeln!(self.out, "{}", format!("✗ {file}").red())?;
        if let Some(line) = result.excerpt() {
            writeln!(self.out, "{}", format!("  Error: {line}").red())?;
        }
        Ok(())
    }

    fn print_summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        let failed = format!("Failed: {}", summary.failed);
        writeln!(self.out)?;
        writeln!(self.out, "{SUMMARY_RULE}")?;
        writeln!(
            self.out,
            "{} | {} | {}",
            format!("Total: {}", summary.total).bold(),
            format!("Passed: {}", summary.passed).green(),
            if summary.failed > 0 {
                failed.red()
            } else {
                failed.green()
            }
        )?;
        writeln!(self.out, "{SUMMARY_RULE}")?;
        writeln!(self.out)
    }
}
