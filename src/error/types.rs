//! Custom error types with exit codes

use std::path::Path;
use thiserror::Error;

/// Main error type for goldcheck operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GoldenError {
    /// Configuration Error - missing or invalid configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Load Error - the command file is missing or unreadable
    #[error("Load error: {message}")]
    Load { message: String },

    /// Spawn Error - a command under test could not be started
    #[error("Spawn error: test {index:02}: {message}")]
    Spawn { index: usize, message: String },

    /// Child Process Error - a command under test exited unsuccessfully
    #[error("Command error: test {index:02}: {message}")]
    ChildProcess { index: usize, message: String },

    /// Baseline Missing Error - no baseline file exists for a test
    #[error("Baseline missing: test {index:02} has no baseline at {path}")]
    BaselineMissing { index: usize, path: String },

    /// Mismatch Error - live output differs from the baseline
    #[error("Mismatch: output of test {index:02} does not match its baseline")]
    Mismatch { index: usize, diff: String },

    /// Filesystem Error - file operation failed
    #[error("Filesystem error: {message}")]
    Filesystem { message: String },

    /// Unknown Test - a selected test id does not name a command
    #[error("Unknown test {id}: the command file defines {available} test(s)")]
    UnknownTest { id: usize, available: usize },

    /// One or more tests failed in an aggregated run
    #[error("{failed} of {total} test(s) failed")]
    TestsFailed { failed: usize, total: usize },

    /// One or more baselines could not be recorded
    #[error("{failed} of {total} baseline(s) could not be recorded")]
    RecordFailed { failed: usize, total: usize },
}

impl GoldenError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Configuration { .. } | Self::UnknownTest { .. } => 1,
            Self::Load { .. } => 2,
            Self::Spawn { .. } => 3,
            Self::ChildProcess { .. } => 4,
            Self::BaselineMissing { .. } => 5,
            Self::Mismatch { .. } => 6,
            Self::Filesystem { .. } => 7,
            Self::TestsFailed { .. } => 8,
            Self::RecordFailed { .. } => 9,
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a load error
    #[inline]
    pub fn load<S: Into<String>>(message: S) -> Self {
        Self::Load {
            message: message.into(),
        }
    }

    /// Create a spawn error for the test at `index`
    #[inline]
    pub fn spawn<S: Into<String>>(index: usize, message: S) -> Self {
        Self::Spawn {
            index,
            message: message.into(),
        }
    }

    /// Create a child process error for the test at `index`
    #[inline]
    pub fn child_process<S: Into<String>>(index: usize, message: S) -> Self {
        Self::ChildProcess {
            index,
            message: message.into(),
        }
    }

    /// Create a baseline missing error
    #[inline]
    pub fn baseline_missing(index: usize, path: &Path) -> Self {
        Self::BaselineMissing {
            index,
            path: path.display().to_string(),
        }
    }

    /// Create a mismatch error carrying the rendered diff
    #[inline]
    pub fn mismatch<S: Into<String>>(index: usize, diff: S) -> Self {
        Self::Mismatch {
            index,
            diff: diff.into(),
        }
    }

    /// Create a filesystem error
    #[inline]
    pub fn filesystem<S: Into<String>>(message: S) -> Self {
        Self::Filesystem {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_failure_kind() {
        let errors = [
            GoldenError::load("missing"),
            GoldenError::spawn(1, "not found"),
            GoldenError::child_process(1, "exit 1"),
            GoldenError::baseline_missing(1, Path::new("test01.dat")),
            GoldenError::mismatch(1, "-a\n+b\n"),
            GoldenError::filesystem("denied"),
            GoldenError::TestsFailed { failed: 1, total: 2 },
            GoldenError::RecordFailed { failed: 1, total: 2 },
        ];

        let mut codes: Vec<i32> = errors.iter().map(GoldenError::exit_code).collect();
        codes.dedup();
        assert_eq!(codes, vec![2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(GoldenError::configuration("bad").exit_code(), 1);
    }

    #[test]
    fn test_messages_use_padded_index() {
        let err = GoldenError::baseline_missing(3, Path::new("out/test03.dat"));
        assert_eq!(
            err.to_string(),
            "Baseline missing: test 03 has no baseline at out/test03.dat"
        );
    }
}
