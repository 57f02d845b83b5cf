//! Layered configuration loading and validation.

use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Project configuration file (lowest file precedence)
pub const PROJECT_CONFIG: &str = ".scanverify/config.yaml";

/// Project local overrides
pub const LOCAL_CONFIG: &str = ".scanverify/local.yaml";

/// Prefix for environment overrides; nested keys are split on `__`
pub const ENV_PREFIX: &str = "SCANVERIFY_";

/// GitHub caps `per_page` at 100
const MAX_PER_PAGE: u32 = 100;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required string or list is empty.
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    /// The HTTP timeout is zero.
    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    /// A page size is outside what the API accepts.
    #[error("Invalid {field}: {value}. Must be between 1 and 100")]
    InvalidPageSize { field: &'static str, value: u32 },

    /// A threshold is zero or larger than its list.
    #[error("Invalid {field}: {value}. Must be between 1 and {max}")]
    InvalidThreshold {
        field: &'static str,
        value: usize,
        max: usize,
    },

    /// Unknown log level.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown log format.
    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .scanverify/config.yaml
    /// 3. .scanverify/local.yaml (optional overrides)
    /// 4. Environment variables (SCANVERIFY_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(PROJECT_CONFIG))
            .merge(Yaml::file(LOCAL_CONFIG))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honoring environment
    /// overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.is_file() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let github = &config.github;
        if github.organization.trim().is_empty() {
            return Err(ConfigError::EmptyField("github.organization"));
        }
        if github.repository.trim().is_empty() {
            return Err(ConfigError::EmptyField("github.repository"));
        }
        if github.token_env_var.trim().is_empty() {
            return Err(ConfigError::EmptyField("github.token_env_var"));
        }
        if github.api_base.trim().is_empty() {
            return Err(ConfigError::EmptyField("github.api_base"));
        }
        if github.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(github.timeout_secs));
        }

        check_page_size("main_issue.per_page", config.main_issue.per_page)?;
        check_page_size("branches.per_page", config.branches.per_page)?;
        check_page_size("security_update.per_page", config.security_update.per_page)?;

        let main_issue = &config.main_issue;
        if main_issue.exact_title_match {
            if main_issue.title.is_empty() {
                return Err(ConfigError::EmptyField("main_issue.title"));
            }
        } else if main_issue.title_markers.is_empty() {
            return Err(ConfigError::EmptyField("main_issue.title_markers"));
        }
        if main_issue.required_labels.is_empty() {
            return Err(ConfigError::EmptyField("main_issue.required_labels"));
        }
        if !main_issue.require_all_labels {
            check_threshold(
                "main_issue.min_matching_labels",
                main_issue.min_matching_labels,
                main_issue.required_labels.len(),
            )?;
        }

        check_threshold(
            "branches.min_branches",
            config.branches.min_branches,
            config.branches.required.len(),
        )?;
        check_threshold(
            "checkpoints.min_checkpoints",
            config.checkpoints.min_checkpoints,
            config.checkpoints.keywords.len(),
        )?;

        if config.comments.required_keywords.is_empty() {
            return Err(ConfigError::EmptyField("comments.required_keywords"));
        }

        let update = &config.security_update;
        if update.required {
            if update.source_branch.is_empty() {
                return Err(ConfigError::EmptyField("security_update.source_branch"));
            }
            if update.exact_title_match {
                if update.title.is_empty() {
                    return Err(ConfigError::EmptyField("security_update.title"));
                }
            } else if update.title_markers.is_empty() {
                return Err(ConfigError::EmptyField("security_update.title_markers"));
            }
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}

fn check_page_size(field: &'static str, value: u32) -> Result<(), ConfigError> {
    if value == 0 || value > MAX_PER_PAGE {
        return Err(ConfigError::InvalidPageSize { field, value });
    }
    Ok(())
}

/// A threshold must be reachable: at least 1 and no more than the list it
/// counts against.
fn check_threshold(field: &'static str, value: usize, max: usize) -> Result<(), ConfigError> {
    if value == 0 || value > max {
        return Err(ConfigError::InvalidThreshold { field, value, max });
    }
    Ok(())
}
