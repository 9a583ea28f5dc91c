//! Configuration file support for req2pyproject.
//!
//! Provides YAML-based configuration through `req2pyproject.config.yml`
//! files, used to fill the manifest's project header.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::conversion::domain::ProjectMetadata;
use crate::shared::error::ConvertError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "req2pyproject.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub project: Option<ProjectConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Overrides for the `[tool.poetry]` header block.
#[derive(Debug, Deserialize, Default)]
pub struct ProjectConfig {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub authors: Option<Vec<String>>,
    pub python: Option<String>,
}

impl ConfigFile {
    /// Applies the configured project fields on top of `metadata`.
    pub fn apply_to(&self, metadata: ProjectMetadata) -> ProjectMetadata {
        let Some(project) = &self.project else {
            return metadata;
        };

        let mut metadata = metadata;
        if let Some(name) = &project.name {
            metadata = metadata.with_name(name);
        }
        if let Some(version) = &project.version {
            metadata = metadata.with_version(version);
        }
        if let Some(description) = &project.description {
            metadata = metadata.with_description(description);
        }
        if let Some(authors) = &project.authors {
            metadata = metadata.with_authors(authors.clone());
        }
        if let Some(python) = &project.python {
            metadata = metadata.with_python(python);
        }
        metadata
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax and that versions are quoted strings.",
            path.display()
        )
    })?;

    validate_config(&config, path)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile, path: &Path) -> Result<()> {
    let Some(project) = &config.project else {
        return Ok(());
    };

    let required = [
        ("name", &project.name),
        ("version", &project.version),
        ("python", &project.python),
    ];
    for (field, value) in required {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(ConvertError::ConfigError {
                path: path.to_path_buf(),
                reason: format!("project.{} must not be empty", field),
                hint: format!("Remove the '{}' key to keep the default, or give it a value.", field),
            }
            .into());
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
