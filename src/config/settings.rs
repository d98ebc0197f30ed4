//! Resolved run settings
//!
//! Values come from the command line first, then the configuration file,
//! then built-in defaults.

use crate::cli::Args;
use crate::config::validation::validate_jobs;
use crate::config::{Config, DEFAULT_COMMANDS_FILE, DEFAULT_CONFIG_FILE};
use crate::error::GoldenError;
use crate::system::System;
use anyhow::Result;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything a record, check or list run needs to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Suite directory; commands under test run here
    pub root: PathBuf,
    /// Command file
    pub commands_file: PathBuf,
    /// Directory holding the baselines
    pub baseline_dir: PathBuf,
    /// Recording workers
    pub jobs: usize,
    /// Stop checking at the first failure
    pub fail_fast: bool,
}

impl Settings {
    /// Default settings for a suite rooted at `root`
    #[must_use]
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            commands_file: root.join(DEFAULT_COMMANDS_FILE),
            baseline_dir: root.clone(),
            root,
            jobs: default_jobs(),
            fail_fast: false,
        }
    }

    /// Resolve settings from command-line arguments and the configuration file
    ///
    /// # Errors
    ///
    /// Returns a [`GoldenError::Configuration`] if:
    /// - The suite directory does not exist
    /// - An explicitly requested configuration file is missing or invalid
    /// - The default configuration file exists but is invalid
    /// - The worker count is zero
    pub fn resolve(system: &dyn System, args: &Args) -> Result<Self> {
        let current_dir = system.current_dir().map_err(|e| {
            GoldenError::configuration(format!("Cannot determine current directory: {e}"))
        })?;
        let root = args
            .directory
            .as_ref()
            .map_or_else(|| current_dir.clone(), |dir| current_dir.join(dir));

        if !system.is_dir(&root) {
            return Err(GoldenError::configuration(format!(
                "Suite directory does not exist: {}",
                root.display()
            ))
            .into());
        }

        let config = match args.config.as_ref() {
            Some(path) => Config::load_from_file(system, &root.join(path))?,
            None => {
                let default_path = root.join(DEFAULT_CONFIG_FILE);
                if system.is_file(&default_path) {
                    debug!("Using configuration file {}", default_path.display());
                    Config::load_from_file(system, &default_path)?
                } else {
                    Config::default()
                }
            }
        };

        Self::merge(root, args, config)
    }

    fn merge(root: PathBuf, args: &Args, config: Config) -> Result<Self> {
        let mut settings = Self::new(&root);

        if let Some(commands) = args.commands.as_ref().or(config.commands.as_ref()) {
            settings.commands_file = root.join(commands);
        }

        if let Some(baseline_dir) = args.baseline_dir.as_ref().or(config.baseline_dir.as_ref()) {
            settings.baseline_dir = root.join(baseline_dir);
        }

        if let Some(jobs) = args.jobs_override().or(config.jobs) {
            validate_jobs(jobs)?;
            settings.jobs = jobs;
        }

        settings.fail_fast = args.fail_fast_override() || config.fail_fast.unwrap_or(false);

        Ok(settings)
    }
}

/// Worker count used when none is configured
#[must_use]
pub fn default_jobs() -> usize {
    std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::system::MockSystem;
    use clap::Parser as _;

    fn args(argv: &[&str]) -> Args {
        let mut full = vec!["goldcheck"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_defaults_without_config_file() {
        let system = MockSystem::new()
            .with_dir("/work/suite")
            .unwrap()
            .with_current_dir("/work")
            .unwrap();

        let settings = Settings::resolve(&system, &args(&["-C", "suite", "check"])).unwrap();
        assert_eq!(settings.root, PathBuf::from("/work/suite"));
        assert_eq!(
            settings.commands_file,
            PathBuf::from("/work/suite/test_commands.txt")
        );
        assert_eq!(settings.baseline_dir, PathBuf::from("/work/suite"));
        assert!(!settings.fail_fast);
        assert!(settings.jobs >= 1);
    }

    #[test]
    fn test_config_file_then_cli_overrides() {
        let system = MockSystem::new()
            .with_file(
                "/suite/goldcheck.yaml",
                b"commands: cmds.txt\nbaselineDir: golden\njobs: 2\nfailFast: true\n",
            )
            .unwrap()
            .with_current_dir("/suite")
            .unwrap();

        let from_config = Settings::resolve(&system, &args(&["record"])).unwrap();
        assert_eq!(from_config.commands_file, PathBuf::from("/suite/cmds.txt"));
        assert_eq!(from_config.baseline_dir, PathBuf::from("/suite/golden"));
        assert_eq!(from_config.jobs, 2);
        assert!(from_config.fail_fast);

        let overridden = Settings::resolve(
            &system,
            &args(&["record", "-j", "5", "--baseline-dir", "/abs/golden"]),
        )
        .unwrap();
        assert_eq!(overridden.jobs, 5);
        assert_eq!(overridden.baseline_dir, PathBuf::from("/abs/golden"));
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let system = MockSystem::new().with_dir("/suite").unwrap();
        let err = Settings::resolve(&system, &args(&["-C", "/suite", "--config", "other.yaml", "list"]))
            .unwrap_err();
        assert!(err.to_string().contains("Configuration file not found"));
    }

    #[test]
    fn test_missing_suite_directory() {
        let system = MockSystem::new();
        let err = Settings::resolve(&system, &args(&["-C", "/nowhere", "check"])).unwrap_err();
        assert!(err.to_string().contains("Suite directory does not exist"));
    }

    #[test]
    fn test_zero_jobs_rejected() {
        let system = MockSystem::new();
        assert!(Settings::resolve(&system, &args(&["record", "--jobs", "0"])).is_err());
    }
}
