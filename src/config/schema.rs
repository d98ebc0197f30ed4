//! JSON Schema validation for goldcheck configuration

use crate::error::GoldenError;
use anyhow::{Result, anyhow};
use serde_json::Value;

/// Get the embedded JSON schema for goldcheck configuration
pub fn get_schema() -> Result<Value> {
    let schema_str = include_str!("../../docs/schema.json");
    serde_json::from_str(schema_str)
        .map_err(|e| anyhow!("Failed to parse embedded JSON schema: {e}"))
}

/// Validate a configuration value against the schema
pub fn validate_against_schema(config: &Value) -> Result<()> {
    let schema = get_schema()?;
    let validator = jsonschema::draft7::new(&schema)
        .map_err(|e| anyhow!("Failed to compile JSON schema: {e}"))?;

    let error_messages: Vec<String> = validator
        .iter_errors(config)
        .map(|e| format!("  - {e}"))
        .collect();

    if !error_messages.is_empty() {
        return Err(GoldenError::configuration(format!(
            "Configuration does not match the schema:\n{}",
            error_messages.join("\n")
        ))
        .into());
    }

    Ok(())
}
