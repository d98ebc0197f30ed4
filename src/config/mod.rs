//! Configuration management module
//!
//! Handles the optional `goldcheck.yaml` file: YAML parsing, JSON schema
//! validation, and merging with command-line overrides into [`Settings`].

pub mod schema;
pub mod settings;
pub mod validation;
pub mod yaml;

use crate::system::System;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use settings::Settings;

/// Default name of the configuration file looked up in the suite directory
pub const DEFAULT_CONFIG_FILE: &str = "goldcheck.yaml";

/// Default name of the command file
pub const DEFAULT_COMMANDS_FILE: &str = "test_commands.txt";

/// Contents of a configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Path of the command file, relative to the suite directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commands: Option<String>,

    /// Directory holding the `testNN.dat` baselines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_dir: Option<String>,

    /// Number of recording workers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,

    /// Stop checking at the first failing test
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_fast: Option<bool>,
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file(system: &dyn System, path: &Path) -> anyhow::Result<Self> {
        yaml::load_config(system, path)
    }

    /// Validate configuration values
    pub fn validate(&self) -> anyhow::Result<()> {
        validation::validate_config(self)
    }
}
