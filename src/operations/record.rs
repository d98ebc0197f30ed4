//! Baseline recording
//!
//! Commands are either recorded one at a time in file order, or spread over a
//! bounded worker pool. Each pool job owns its baseline file end-to-end and a
//! failing job never cancels its siblings. The pool call returns only after
//! every job has finished.

use crate::cli::RecordArgs;
use crate::config::Settings;
use crate::error::GoldenError;
use crate::operations::baseline::write_baseline;
use crate::operations::exec::capture_text;
use crate::operations::loader::{CommandSpec, load_commands, select_command};
use crate::system::System;
use anyhow::{Context as _, Result};
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{error, info};

/// Outcome of recording one command
#[derive(Debug)]
pub struct RecordEntry {
    pub index: usize,
    pub result: Result<PathBuf>,
}

/// Outcomes of a concurrent recording run, ordered by test index
#[derive(Debug, Default)]
pub struct RecordReport {
    pub entries: Vec<RecordEntry>,
}

impl RecordReport {
    /// Number of baselines written
    #[must_use]
    pub fn written(&self) -> usize {
        self.entries.iter().filter(|e| e.result.is_ok()).count()
    }

    /// Number of commands that could not be recorded
    #[must_use]
    pub fn failed(&self) -> usize {
        self.entries.len() - self.written()
    }
}

/// Run one command and store its untrimmed output as its baseline
///
/// # Errors
///
/// Returns an error if the command cannot be run or the baseline cannot be written.
pub fn record_one(system: &dyn System, settings: &Settings, spec: &CommandSpec) -> Result<PathBuf> {
    let output = capture_text(spec, &settings.root)?;
    let path = write_baseline(system, &settings.baseline_dir, spec.index(), &output)?;
    println!("Generated {}", spec.baseline_file_name());
    Ok(path)
}

/// Record every command in index order, stopping at the first error
///
/// # Errors
///
/// Returns the first recording error.
pub fn record_sequential(
    system: &dyn System,
    settings: &Settings,
    commands: &[CommandSpec],
) -> Result<Vec<PathBuf>> {
    commands
        .iter()
        .map(|spec| record_one(system, settings, spec))
        .collect()
}

/// Record every command on a pool of `settings.jobs` workers
///
/// Blocks until all jobs have completed. Individual failures are collected
/// into the report rather than returned.
///
/// # Errors
///
/// Returns an error only if the worker pool cannot be created.
pub fn record_concurrent(
    system: &dyn System,
    settings: &Settings,
    commands: &[CommandSpec],
) -> Result<RecordReport> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(settings.jobs.max(1))
        .thread_name(|i| format!("goldcheck-record-{i}"))
        .build()
        .context("Failed to start recording workers")?;

    let mut entries: Vec<RecordEntry> = pool.install(|| {
        commands
            .par_iter()
            .map(|spec| RecordEntry {
                index: spec.index(),
                result: record_one(system, settings, spec),
            })
            .collect()
    });
    entries.sort_by_key(|entry| entry.index);

    Ok(RecordReport { entries })
}

/// Entry point for `goldcheck record`
///
/// # Errors
///
/// Returns an error if the command file cannot be loaded, the selected test
/// does not exist, or any command could not be recorded.
pub fn run(system: &dyn System, settings: &Settings, args: &RecordArgs) -> Result<()> {
    let commands = load_commands(system, &settings.commands_file)?;

    if let Some(id) = args.id {
        let spec = select_command(&commands, id)?;
        record_one(system, settings, spec)?;
        return Ok(());
    }

    if args.sequential {
        let written = record_sequential(system, settings, &commands)?;
        info!("Recorded {} baseline(s)", written.len());
        return Ok(());
    }

    info!(
        "Recording {} baseline(s) with {} worker(s)",
        commands.len(),
        settings.jobs
    );
    let report = record_concurrent(system, settings, &commands)?;

    for entry in &report.entries {
        if let Err(err) = entry.result.as_ref() {
            error!("{:#}", err);
        }
    }

    if report.failed() > 0 {
        return Err(GoldenError::RecordFailed {
            failed: report.failed(),
            total: report.entries.len(),
        }
        .into());
    }

    info!("Recorded {} baseline(s)", report.written());
    Ok(())
}
