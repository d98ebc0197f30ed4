//! YAML configuration loading and parsing

use crate::config::Config;
use crate::error::GoldenError;
use crate::system::System;
use anyhow::{Context as _, Result};
use serde_json::Value;
use std::path::Path;

/// Load and parse YAML configuration from file
///
/// The document is validated against the embedded JSON schema before it is
/// deserialized, so unknown keys are reported instead of silently ignored.
pub fn load_config(system: &dyn System, path: &Path) -> Result<Config> {
    if !system.is_file(path) {
        return Err(GoldenError::configuration(format!(
            "Configuration file not found: {}",
            path.display()
        ))
        .into());
    }

    let content = system.read_to_string(path).map_err(|e| {
        GoldenError::configuration(format!(
            "Failed to read configuration file {}: {e}",
            path.display()
        ))
    })?;

    parse_config(&content).with_context(|| format!("Invalid configuration in {}", path.display()))
}

/// Parse and validate configuration text
pub fn parse_config(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    let document: Value = serde_yaml::from_str(content).map_err(|e| {
        GoldenError::configuration(format!("Failed to parse YAML configuration: {e}"))
    })?;

    // A document holding only comments parses as null
    let document = if document.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        document
    };

    crate::config::schema::validate_against_schema(&document)?;

    let config: Config = serde_json::from_value(document).map_err(|e| {
        GoldenError::configuration(format!("Failed to read configuration values: {e}"))
    })?;

    config.validate()?;

    Ok(config)
}
