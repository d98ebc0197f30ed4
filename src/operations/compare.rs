//! Comparing live command output against baselines
//!
//! Both sides are trimmed of leading and trailing whitespace before an exact
//! comparison. Mismatches are reported as a unified diff from the baseline
//! (`expected_output`) to the live output (`output`).

use crate::cli::CheckArgs;
use crate::config::Settings;
use crate::error::GoldenError;
use crate::operations::baseline::read_baseline;
use crate::operations::exec::capture_text;
use crate::operations::loader::{CommandSpec, load_commands, select_command};
use crate::system::System;
use anyhow::Result;
use similar::TextDiff;
use tracing::{error, info};

/// Diff label for the baseline side
pub const EXPECTED_LABEL: &str = "expected_output";

/// Diff label for the live side
pub const ACTUAL_LABEL: &str = "output";

/// Result of comparing one command against its baseline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    Passed,
    Failed { diff: String },
}

/// Outcome of one test in an aggregated run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestOutcome {
    Passed,
    Failed { diff: String },
    /// The comparison could not be made (command or baseline error)
    Errored { message: String },
}

/// Per-test outcome of an aggregated run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestReport {
    pub index: usize,
    pub outcome: TestOutcome,
}

/// Outcomes of every test in an aggregated run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub reports: Vec<TestReport>,
}

impl CheckReport {
    /// Number of passing tests
    #[must_use]
    pub fn passed(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| r.outcome == TestOutcome::Passed)
            .count()
    }

    /// Number of failing or errored tests
    #[must_use]
    pub fn failed(&self) -> usize {
        self.reports.len() - self.passed()
    }

    /// Whether every test passed
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Compare trimmed `expected` and `actual` text
#[must_use]
pub fn compare_output(expected: &str, actual: &str) -> TestResult {
    let expected = expected.trim();
    let actual = actual.trim();
    if expected == actual {
        return TestResult::Passed;
    }
    TestResult::Failed {
        diff: unified_diff(expected, actual),
    }
}

/// Render a line-based unified diff with three lines of context
#[must_use]
pub fn unified_diff(expected: &str, actual: &str) -> String {
    let expected = line_terminated(expected);
    let actual = line_terminated(actual);
    TextDiff::from_lines(expected.as_str(), actual.as_str())
        .unified_diff()
        .context_radius(3)
        .header(EXPECTED_LABEL, ACTUAL_LABEL)
        .to_string()
}

// Every line carries its newline so the diff never needs
// "no newline at end of file" markers.
fn line_terminated(text: &str) -> String {
    if text.is_empty() || text.ends_with('\n') {
        return text.to_owned();
    }
    format!("{text}\n")
}

/// Run one command and compare it against its baseline
///
/// # Errors
///
/// Returns an error if the command fails or its baseline is missing or unreadable.
pub fn check_one(system: &dyn System, settings: &Settings, spec: &CommandSpec) -> Result<TestResult> {
    let actual = capture_text(spec, &settings.root)?;
    let expected = read_baseline(system, &settings.baseline_dir, spec.index())?;
    Ok(compare_output(&expected, &actual))
}

/// Check a single test, printing its diff on mismatch
///
/// # Errors
///
/// Returns a [`GoldenError::Mismatch`] if the output differs, or the
/// command/baseline error that prevented the comparison.
pub fn check_selected(system: &dyn System, settings: &Settings, spec: &CommandSpec) -> Result<()> {
    match check_one(system, settings, spec)? {
        TestResult::Passed => {
            println!("Passed test {}", spec.label());
            Ok(())
        }
        TestResult::Failed { diff } => {
            print!("{diff}");
            Err(GoldenError::mismatch(spec.index(), diff).into())
        }
    }
}

/// Check tests in order, halting at the first failure
///
/// # Errors
///
/// Returns the first mismatch or command/baseline error.
pub fn check_fail_fast(
    system: &dyn System,
    settings: &Settings,
    commands: &[CommandSpec],
) -> Result<()> {
    for spec in commands {
        check_selected(system, settings, spec)?;
    }
    Ok(())
}

/// Check every test in order, collecting outcomes instead of stopping
///
/// Diffs and errors are reported as they occur.
#[must_use]
pub fn check_all(system: &dyn System, settings: &Settings, commands: &[CommandSpec]) -> CheckReport {
    let reports = commands
        .iter()
        .map(|spec| {
            let outcome = match check_one(system, settings, spec) {
                Ok(TestResult::Passed) => {
                    println!("Passed test {}", spec.label());
                    TestOutcome::Passed
                }
                Ok(TestResult::Failed { diff }) => {
                    println!("Failed test {}", spec.label());
                    print!("{diff}");
                    TestOutcome::Failed { diff }
                }
                Err(err) => {
                    println!("Failed test {}", spec.label());
                    error!("{:#}", err);
                    TestOutcome::Errored {
                        message: format!("{err:#}"),
                    }
                }
            };
            TestReport {
                index: spec.index(),
                outcome,
            }
        })
        .collect();

    CheckReport { reports }
}

/// Entry point for `goldcheck check`
///
/// # Errors
///
/// Returns an error if the command file cannot be loaded, the selected test
/// does not exist, or any checked test fails.
pub fn run(system: &dyn System, settings: &Settings, args: &CheckArgs) -> Result<()> {
    let commands = load_commands(system, &settings.commands_file)?;

    if let Some(id) = args.id {
        let spec = select_command(&commands, id)?;
        return check_selected(system, settings, spec);
    }

    if settings.fail_fast {
        check_fail_fast(system, settings, &commands)?;
        info!("All {} test(s) passed", commands.len());
        return Ok(());
    }

    let report = check_all(system, settings, &commands);
    println!("{} passed, {} failed", report.passed(), report.failed());

    if !report.is_success() {
        return Err(GoldenError::TestsFailed {
            failed: report.failed(),
            total: report.reports.len(),
        }
        .into());
    }

    Ok(())
}
