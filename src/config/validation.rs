//! Configuration validation logic

use crate::config::Config;
use crate::error::GoldenError;
use anyhow::Result;

/// Validate a complete configuration
///
/// # Errors
///
/// Returns a [`GoldenError::Configuration`] if:
/// - The command file path is empty
/// - The baseline directory is empty
/// - The worker count is zero
#[inline]
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(commands) = config.commands.as_deref() {
        validate_path_setting("commands", commands)?;
    }

    if let Some(baseline_dir) = config.baseline_dir.as_deref() {
        validate_path_setting("baselineDir", baseline_dir)?;
    }

    if let Some(jobs) = config.jobs {
        validate_jobs(jobs)?;
    }

    Ok(())
}

/// Validate the number of recording workers
///
/// # Errors
///
/// Returns an error if `jobs` is zero
#[inline]
pub fn validate_jobs(jobs: usize) -> Result<()> {
    if jobs == 0 {
        return Err(GoldenError::configuration("jobs must be at least 1").into());
    }
    Ok(())
}

fn validate_path_setting(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GoldenError::configuration(format!("{name} cannot be empty")).into());
    }
    Ok(())
}
