//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables
//! and default values through Figment.

use crate::config::{BinderyConfig, ProviderConfig};
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use bindery_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `BinderyConfig::default()`
    /// 2. TOML configuration file (if it exists)
    /// 3. Environment variables with prefix (e.g., `BINDERY_LOGGING__LEVEL`)
    pub fn load(&self) -> Result<BinderyConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(BinderyConfig::default()));

        match &self.config_path {
            Some(config_path) if config_path.exists() => {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            }
            Some(config_path) => log_config_loaded(config_path, false),
            None => {
                if let Some(default_path) = Self::find_default_config_path() {
                    figment = figment.merge(Toml::file(&default_path));
                    log_config_loaded(&default_path, true);
                }
            }
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let config: BinderyConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_config(&config)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &BinderyConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;
        std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;
        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
            dirs::home_dir()
                .map(|d| {
                    d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                        .join(DEFAULT_CONFIG_FILENAME)
                })
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|path| path.is_file())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate all configuration sections
pub fn validate_config(config: &BinderyConfig) -> Result<()> {
    validate_injector_config(config)?;
    validate_cache_config(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_injector_config(config: &BinderyConfig) -> Result<()> {
    let injector = &config.injector;
    if injector.binding_tag.trim().is_empty() {
        return Err(Error::configuration("Binding tag cannot be empty"));
    }
    if injector.transformer_tag.trim().is_empty() {
        return Err(Error::configuration("Transformer tag cannot be empty"));
    }
    if injector.binding_tag == injector.transformer_tag {
        return Err(Error::configuration(format!(
            "Binding and transformer tags must differ, both are '{}'",
            injector.binding_tag
        )));
    }
    if injector.interface_kind.trim().is_empty() {
        return Err(Error::configuration("Interface kind cannot be empty"));
    }

    let mut kinds = HashSet::new();
    for provider in &injector.providers {
        if provider.kind().trim().is_empty() {
            return Err(Error::configuration("Provider kind cannot be empty"));
        }
        if !kinds.insert(provider.kind()) {
            return Err(Error::duplicate_kind(provider.kind()));
        }
        if let ProviderConfig::Map { field, kind, .. } = provider {
            if field.trim().is_empty() {
                return Err(Error::configuration(format!(
                    "Map provider '{kind}' needs a field"
                )));
            }
        }
    }
    Ok(())
}

fn validate_cache_config(config: &BinderyConfig) -> Result<()> {
    let cache = &config.cache;
    if (cache.restore_on_start || cache.save_on_shutdown) && cache.snapshot_path.is_none() {
        return Err(Error::configuration(
            "Cache snapshot path is required to restore or save snapshots",
        ));
    }
    if (cache.restore_on_start || cache.save_on_shutdown) && !cache.shared {
        return Err(Error::configuration(
            "Cache snapshots need a shared cache (cache.shared = true)",
        ));
    }
    Ok(())
}
