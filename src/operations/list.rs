//! Listing commands and their baselines

use crate::config::Settings;
use crate::operations::baseline::discover_baselines;
use crate::operations::loader::{CommandSpec, load_commands};
use crate::system::System;
use crate::utils::naming::{baseline_file_name, baseline_path};
use anyhow::Result;
use std::fmt;
use tracing::warn;

/// One command and whether its baseline exists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub command: CommandSpec,
    pub has_baseline: bool,
}

impl fmt::Display for ListEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.has_baseline { "present" } else { "missing" };
        write!(
            f,
            "{}  {}  [baseline {state}]",
            self.command.label(),
            self.command
        )
    }
}

/// Commands of a suite plus baselines no command refers to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListReport {
    pub entries: Vec<ListEntry>,
    /// Indexes of baseline files without a matching command
    pub orphans: Vec<usize>,
}

impl ListReport {
    /// Number of commands that have no baseline yet
    #[must_use]
    pub fn missing(&self) -> usize {
        self.entries.iter().filter(|e| !e.has_baseline).count()
    }
}

/// Build the listing for `commands`
///
/// # Errors
///
/// Returns an error if the baseline directory cannot be listed.
pub fn list_suite(
    system: &dyn System,
    settings: &Settings,
    commands: Vec<CommandSpec>,
) -> Result<ListReport> {
    let orphans = discover_baselines(system, &settings.baseline_dir)?
        .into_iter()
        .filter(|index| *index > commands.len())
        .collect();

    let entries = commands
        .into_iter()
        .map(|command| ListEntry {
            has_baseline: system.is_file(&baseline_path(&settings.baseline_dir, command.index())),
            command,
        })
        .collect();

    Ok(ListReport { entries, orphans })
}

/// Entry point for `goldcheck list`
///
/// # Errors
///
/// Returns an error if the command file cannot be loaded or the baseline
/// directory cannot be listed.
pub fn run(system: &dyn System, settings: &Settings) -> Result<()> {
    let commands = load_commands(system, &settings.commands_file)?;
    let report = list_suite(system, settings, commands)?;

    for entry in &report.entries {
        println!("{entry}");
    }
    for index in &report.orphans {
        println!("orphan: {}", baseline_file_name(*index));
    }

    let missing = report.missing();
    if missing > 0 {
        warn!("{missing} command(s) have no baseline");
    }
    if !report.orphans.is_empty() {
        warn!(
            "{} baseline file(s) do not belong to any command",
            report.orphans.len()
        );
    }

    Ok(())
}
