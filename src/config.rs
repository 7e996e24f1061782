//! Configuration file support for depinfo.
//!
//! Provides YAML-based configuration through `depinfo.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::warn;

use depinfo::application::dto::OutputFormat;
use depinfo::dependency_info::domain::LaunchMode;
use depinfo::dependency_info::policies::{ConfigurationScope, ScopePolicy, ScopePolicyPreset};
use depinfo::shared::Result;

pub const CONFIG_FILENAME: &str = "depinfo.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub launch_mode: Option<String>,
    pub scope_policy: Option<String>,
    /// Explicit configuration-to-scope table, replacing the preset.
    pub configurations: Option<Vec<ConfigurationScope>>,
    pub local_repository: Option<PathBuf>,
    pub remote_repositories: Option<Vec<String>>,
    pub offline: Option<bool>,
    /// Extra properties for POM interpolation.
    pub system_properties: Option<BTreeMap<String, String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed `format`, if set. Validated on load.
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format
            .as_deref()
            .and_then(|s| OutputFormat::from_str(s).ok())
    }

    pub fn launch_mode(&self) -> Option<LaunchMode> {
        self.launch_mode
            .as_deref()
            .and_then(|s| LaunchMode::from_str(s).ok())
    }

    pub fn scope_policy_preset(&self) -> Option<ScopePolicyPreset> {
        self.scope_policy
            .as_deref()
            .and_then(|s| ScopePolicyPreset::from_str(s).ok())
    }

    /// The explicit `configurations` table as a policy, if one is set.
    ///
    /// # Errors
    /// Returns an error if the table is empty or repeats a configuration
    pub fn explicit_scope_policy(&self) -> Result<Option<ScopePolicy>> {
        match &self.configurations {
            Some(entries) => Ok(Some(ScopePolicy::from_entries(entries.clone())?)),
            None => Ok(None),
        }
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
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax and that scopes are one of compile, runtime, test or ignored.",
            path.display()
        )
    })?;

    validate_config(&config).with_context(|| {
        format!("Invalid config file: {}", path.display())
    })?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config next to the build model. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!("{}", e);
        }
    }

    if let Some(ref mode) = config.launch_mode {
        if let Err(e) = LaunchMode::from_str(mode) {
            bail!("{}", e);
        }
    }

    if let Some(ref preset) = config.scope_policy {
        if let Err(e) = ScopePolicyPreset::from_str(preset) {
            bail!("{}", e);
        }
        if config.configurations.is_some() {
            bail!(
                "Invalid config: 'scope_policy' and 'configurations' are mutually exclusive.\n\n\
                 💡 Hint: Use 'scope_policy' for a preset, or 'configurations' for an explicit table."
            );
        }
    }

    if config.configurations.is_some() {
        config.explicit_scope_policy()?;
    }

    if let Some(ref urls) = config.remote_repositories {
        for (i, url) in urls.iter().enumerate() {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                bail!(
                    "Invalid config: remote_repositories[{}] '{}' is not an http(s) URL.\n\n\
                     💡 Hint: Repository URLs look like \"https://repo.maven.apache.org/maven2\".",
                    i,
                    url
                );
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!("Unknown config field '{}' will be ignored.", key);
    }
}
