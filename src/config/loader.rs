//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default site serving both the API and the listing pages.
pub const DEFAULT_BASE_URL: &str = "https://www.autoscout24.de";

/// Default article type filter (cars).
pub const DEFAULT_ARTICLE_TYPE: &str = "C";

/// Default country filter for resolution.
pub const DEFAULT_COUNTRY_CODE: &str = "de";

/// Default autocomplete debounce window in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/aisearch/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Site root for the API and listing links (e.g. "https://www.autoscout24.de").
    #[serde(default)]
    pub base_url: Option<String>,

    /// `articleType` filter sent with both requests.
    #[serde(default)]
    pub article_type: Option<String>,

    /// `countryCode` filter sent when resolving.
    #[serde(default)]
    pub country_code: Option<String>,

    /// Autocomplete debounce window in milliseconds.
    #[serde(default)]
    pub debounce_ms: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// User-Agent header for HTTP requests.
    #[serde(default)]
    pub user_agent: Option<String>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Site root.
    pub base_url: String,
    /// Article type filter.
    pub article_type: String,
    /// Country filter.
    pub country_code: String,
    /// Debounce window in milliseconds.
    pub debounce_ms: u64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// User-Agent header.
    pub user_agent: String,
}

impl ResolvedConfig {
    /// Debounce window as a `Duration`.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            article_type: DEFAULT_ARTICLE_TYPE.to_string(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            log_file_path: default_log_path(),
            user_agent: default_user_agent(),
        }
    }
}

/// `aisearch/<crate version>`.
pub fn default_user_agent() -> String {
    concat!("aisearch/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/aisearch/aisearch.log` on Linux, or the platform
/// state directory elsewhere. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("aisearch").join("aisearch.log")
    } else {
        PathBuf::from("aisearch.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/aisearch/config.toml` on Linux, the platform config
/// directory elsewhere, or `None` if it cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("aisearch").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `AISEARCH_CONFIG` environment variable
/// 3. Default path `~/.config/aisearch/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("AISEARCH_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `AISEARCH_BASE_URL`: Override site root
/// - `AISEARCH_DEBOUNCE_MS`: Override debounce window (ignored unless a number)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(base_url) = std::env::var("AISEARCH_BASE_URL") {
        config.base_url = base_url;
    }

    if let Ok(raw) = std::env::var("AISEARCH_DEBOUNCE_MS") {
        match raw.trim().parse::<u64>() {
            Ok(ms) => config.debounce_ms = ms,
            Err(_) => tracing::warn!(value = %raw, "ignoring non-numeric AISEARCH_DEBOUNCE_MS"),
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        base_url: config.base_url.unwrap_or(defaults.base_url),
        article_type: config.article_type.unwrap_or(defaults.article_type),
        country_code: config.country_code.unwrap_or(defaults.country_code),
        debounce_ms: config.debounce_ms.unwrap_or(defaults.debounce_ms),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        user_agent: config.user_agent.unwrap_or(defaults.user_agent),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    base_url_override: Option<String>,
    debounce_ms_override: Option<u64>,
) -> ResolvedConfig {
    if let Some(base_url) = base_url_override {
        config.base_url = base_url;
    }

    if let Some(debounce_ms) = debounce_ms_override {
        config.debounce_ms = debounce_ms;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
