//! Configuration file support for npm-dep-tree.
//!
//! Provides YAML-based configuration through `npm-dep-tree.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::{ExportFormat, OutputMode};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "npm-dep-tree.config.yml";

/// Top-level configuration file schema.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub output: Option<String>,
    pub export: Option<String>,
    pub filter: Option<String>,
    pub package_manager: Option<String>,
    pub timeout_secs: Option<u64>,
    pub cache_file: Option<PathBuf>,
    pub no_cache: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty document deserializes as unit, not as an empty mapping
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.is_file() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref output) = config.output {
        output.parse::<OutputMode>().map_err(|e| {
            anyhow::anyhow!(
                "Invalid config: output: {}\n\n💡 Hint: Use 'tree' or 'json'.",
                e
            )
        })?;
    }

    if let Some(ref export) = config.export {
        export.parse::<ExportFormat>().map_err(|e| {
            anyhow::anyhow!(
                "Invalid config: export: {}\n\n💡 Hint: Use 'no', 'image' or 'svg'.",
                e
            )
        })?;
    }

    if config.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be greater than 0.\n\n\
             💡 Hint: Remove the field to use the default of 120 seconds."
        );
    }

    if let Some(ref package_manager) = config.package_manager {
        if package_manager.trim().is_empty() {
            bail!(
                "Invalid config: package_manager must not be empty.\n\n\
                 💡 Hint: Set it to an executable such as \"npm\"."
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
output: json
export: svg
filter: "react, lodash"
package_manager: pnpm
timeout_secs: 30
cache_file: /tmp/tree-cache.json
no_cache: true
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.output.as_deref(), Some("json"));
        assert_eq!(config.export.as_deref(), Some("svg"));
        assert_eq!(config.filter.as_deref(), Some("react, lodash"));
        assert_eq!(config.package_manager.as_deref(), Some("pnpm"));
        assert_eq!(config.timeout_secs, Some(30));
        assert_eq!(
            config.cache_file,
            Some(PathBuf::from("/tmp/tree-cache.json"))
        );
        assert_eq!(config.no_cache, Some(true));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILENAME);
        fs::write(&config_path, "output: json\nno_cache: false\n").unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_some());
        let config = config.unwrap();
        assert_eq!(config.output.as_deref(), Some("json"));
        assert_eq!(config.no_cache, Some(false));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_empty_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("empty.yml");
        fs::write(&config_path, "\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.output.is_none());
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_invalid_output_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "output: xml\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid config: output"));
    }

    #[test]
    fn test_invalid_export_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "export: pdf\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid config: export"));
    }

    #[test]
    fn test_zero_timeout_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "timeout_secs: 0\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("timeout_secs must be greater than 0"));
    }

    #[test]
    fn test_whitespace_only_package_manager_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "package_manager: \"   \"\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("must not be empty"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
output: tree
unknown_field: true
another_unknown: value
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("unknown_field"));
        assert!(config.unknown_fields.contains_key("another_unknown"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.output.is_none());
        assert!(config.export.is_none());
        assert!(config.filter.is_none());
        assert!(config.package_manager.is_none());
        assert!(config.timeout_secs.is_none());
        assert!(config.cache_file.is_none());
        assert!(config.no_cache.is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
