//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::resolve::{DOCUMENT_JSON_NAME, DOCUMENT_YAML_NAME};
use crate::types::ProjectConfig;
use std::path::Path;

/// Name of the project configuration file at the project root.
pub const CONFIG_FILE_NAME: &str = "silicon.toml";

/// Loads and validates `silicon.toml` from a project directory.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    let config_path = project_dir.join(CONFIG_FILE_NAME);
    let content = std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
        path: config_path.clone(),
        source,
    })?;
    load_config_from_str(&content)
}

/// Parses and validates a `silicon.toml` configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.project.name.is_empty() {
        return Err(ConfigError::MissingField("project.name".to_string()));
    }
    if config.project.schema_version == 0 {
        return Err(ConfigError::Invalid {
            field: "project.schema_version".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    for (name, series) in &config.series {
        if let Some(header_name) = &series.header_name {
            if header_name.is_empty() || header_name.contains(['/', '\\']) {
                return Err(ConfigError::Invalid {
                    field: format!("series.{name}.header_name"),
                    reason: "must be a plain file name".to_string(),
                });
            }
            let reserved = [DOCUMENT_YAML_NAME, DOCUMENT_JSON_NAME];
            if reserved.iter().any(|r| header_name.eq_ignore_ascii_case(r)) {
                return Err(ConfigError::Invalid {
                    field: format!("series.{name}.header_name"),
                    reason: format!("`{header_name}` is the name of a series document"),
                });
            }
        }
    }
    Ok(())
}
