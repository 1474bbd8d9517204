//! Configuration file support for depscore.
//!
//! Provides YAML-based configuration through `depscore.config.yml` files,
//! and merges it with command-line arguments (CLI values win).

use anyhow::{bail, Context};
use depscore::adapters::outbound::network::DEFAULT_API_URL;
use depscore::application::dto::OutputFormat;
use depscore::package_scoring::domain::Grade;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::cli::Args;
use depscore::shared::Result;

pub const CONFIG_FILENAME: &str = "depscore.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub breakdown: Option<bool>,
    pub aggregate: Option<bool>,
    pub min_grade: Option<String>,
    pub api_url: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

/// Effective options after merging the config file with CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub breakdown: bool,
    pub aggregate: bool,
    pub min_grade: Option<Grade>,
    pub api_url: String,
}

impl Settings {
    /// CLI arguments override config values; flags combine with `||`
    pub fn resolve(args: &Args, config: Option<&ConfigFile>) -> Result<Self> {
        let default_config = ConfigFile::default();
        let config = config.unwrap_or(&default_config);

        let format = match args.format {
            Some(format) => format,
            None => config
                .format
                .as_deref()
                .map(parse_format)
                .transpose()?
                .unwrap_or_default(),
        };

        let min_grade = match args.min_grade {
            Some(grade) => Some(grade),
            None => config.min_grade.as_deref().map(parse_grade).transpose()?,
        };

        let api_url = args
            .api_url
            .clone()
            .or_else(|| config.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        validate_api_url(&api_url)?;

        Ok(Self {
            format,
            breakdown: args.breakdown || config.breakdown.unwrap_or(false),
            aggregate: args.aggregate || config.aggregate.unwrap_or(false),
            min_grade,
            api_url,
        })
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
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

/// Warning messages for unknown fields in the config file.
pub fn unknown_field_warnings(config: &ConfigFile) -> Vec<String> {
    config
        .unknown_fields
        .keys()
        .map(|key| format!("⚠️  Warning: Unknown config field '{}' will be ignored.", key))
        .collect()
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(format) = config.format.as_deref() {
        parse_format(format)?;
    }
    if let Some(grade) = config.min_grade.as_deref() {
        parse_grade(grade)?;
    }
    if let Some(url) = config.api_url.as_deref() {
        validate_api_url(url)?;
    }
    Ok(())
}

fn parse_format(value: &str) -> Result<OutputFormat> {
    value
        .parse()
        .map_err(|e: String| anyhow::anyhow!("format: {}", e))
}

fn parse_grade(value: &str) -> Result<Grade> {
    value
        .parse()
        .map_err(|e: String| anyhow::anyhow!("min_grade: {}", e))
}

fn validate_api_url(url: &str) -> Result<()> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        bail!(
            "api_url must start with http:// or https:// (got '{}')\n\n\
             💡 Hint: Use the base URL of the service, e.g. http://localhost:8000",
            url
        );
    }
    Ok(())
}
