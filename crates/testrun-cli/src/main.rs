use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use testrun::commands;
use testrun::config::{OutputMode, RunnerConfig, DEFAULT_ROOT};
use testrun::logging;
use testrun::testing::TestReporter;

/// Run every test file in a directory tree.
///
/// Finds files named `*.test.js` under DIR (skipping `node_modules`), runs
/// each one with `node` in its own process, one after another, and prints a
/// pass/fail summary. Exits with 1 if any test file exited non-zero.
///
/// EXAMPLES:
///     testrun                  Run all tests under ./tests
///     testrun --verbose        Stream each test's output live
///     testrun spec             Run all tests under ./spec
///
/// ENVIRONMENT VARIABLES:
///     RUST_LOG          Enable runner diagnostics on stderr (e.g. testrun=debug)
#[derive(Parser)]
#[command(name = "testrun")]
#[command(version)]
struct Cli {
    /// Directory to search for test files
    #[arg(default_value = DEFAULT_ROOT)]
    dir: PathBuf,
    /// Let test output through live instead of capturing it
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    logging::init_tracing();
    let cli = Cli::parse();

    let config = RunnerConfig::new(cli.dir).with_output(OutputMode::from_verbose(cli.verbose));
    let mut reporter = TestReporter::stdout(cli.verbose);

    let outcome = commands::test::run(&config, &mut reporter)?;
    Ok(ExitCode::from(outcome.exit_code()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_flag_position_independent() {
        let before = Cli::try_parse_from(["testrun", "--verbose", "spec"]).unwrap();
        let after = Cli::try_parse_from(["testrun", "spec", "--verbose"]).unwrap();
        assert!(before.verbose && after.verbose);
        assert_eq!(before.dir, after.dir);
    }

    #[test]
    fn test_short_verbose_is_not_accepted() {
        assert!(Cli::try_parse_from(["testrun", "-v"]).is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["testrun"]).unwrap();
        assert!(!cli.verbose);
        assert_eq!(cli.dir, PathBuf::from("tests"));
    }
}
