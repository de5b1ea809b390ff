//! Configuration file loading with precedence handling.

use crate::analysis::matcher::DEFAULT_MAX_TYPOS;
use crate::analysis::pairs::DEFAULT_WINDOW;
use crate::state::viewport::{CHROME_HEIGHT, DEFAULT_BODY_HEIGHT};
use crate::state::BrowserOptions;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "CORPUS_BROWSER_CONFIG";

/// Environment variable overriding the co-occurrence window width.
pub const WINDOW_ENV: &str = "CORPUS_BROWSER_WINDOW";

/// Environment variable overriding the body height.
pub const HEIGHT_ENV: &str = "CORPUS_BROWSER_HEIGHT";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting is present but unusable.
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        /// Setting name.
        key: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/corpus-browser/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Co-occurrence window width in tokens.
    #[serde(default)]
    pub window_size: Option<usize>,

    /// Rows shown below the focused item.
    #[serde(default)]
    pub body_height: Option<usize>,

    /// Typos tolerated by the filter page.
    #[serde(default)]
    pub max_typos: Option<usize>,

    /// Disable colours.
    #[serde(default)]
    pub no_color: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Co-occurrence window width.
    pub window_size: usize,
    /// Rows shown below the focused item.
    pub body_height: usize,
    /// Typos tolerated by the filter page.
    pub max_typos: usize,
    /// Colours disabled.
    pub no_color: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW,
            body_height: DEFAULT_BODY_HEIGHT,
            max_typos: DEFAULT_MAX_TYPOS,
            no_color: false,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// The page tunables this configuration selects.
    pub fn browser_options(&self) -> BrowserOptions {
        BrowserOptions {
            body_height: self.body_height,
            window: self.window_size,
            max_typos: self.max_typos,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/corpus-browser/corpus-browser.log` on Linux,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("corpus-browser").join("corpus-browser.log")
    } else {
        PathBuf::from("corpus-browser.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

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
/// Returns `~/.config/corpus-browser/config.toml` on Linux, appropriate path
/// on other platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("corpus-browser").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CORPUS_BROWSER_CONFIG` environment variable
/// 3. Default path `~/.config/corpus-browser/config.toml`
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

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
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
        window_size: config.window_size.unwrap_or(defaults.window_size),
        body_height: config.body_height.unwrap_or(defaults.body_height),
        max_typos: config.max_typos.unwrap_or(defaults.max_typos),
        no_color: config.no_color.unwrap_or(defaults.no_color),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

fn env_usize(name: &'static str) -> Result<Option<usize>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                key: name,
                reason: format!("{:?}: {}", value, e),
            }),
        Err(_) => Ok(None),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CORPUS_BROWSER_WINDOW`: Override window size
/// - `CORPUS_BROWSER_HEIGHT`: Override body height
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if a variable is set but is not a
/// non-negative integer.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Some(window) = env_usize(WINDOW_ENV)? {
        config.window_size = window;
    }
    if let Some(height) = env_usize(HEIGHT_ENV)? {
        config.body_height = height;
    }
    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    window_override: Option<usize>,
    height_override: Option<usize>,
    typos_override: Option<usize>,
    no_color_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(window) = window_override {
        config.window_size = window;
    }

    if let Some(height) = height_override {
        config.body_height = height;
    }

    if let Some(typos) = typos_override {
        config.max_typos = typos;
    }

    if let Some(no_color) = no_color_override {
        config.no_color = no_color;
    }

    config
}

/// Reject settings the browser cannot work with.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for a zero window size, or for a body
/// height that is zero or too tall for the terminal to address.
pub fn validate(config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if config.window_size == 0 {
        return Err(ConfigError::InvalidValue {
            key: "window_size",
            reason: "must be at least 1".to_string(),
        });
    }
    if config.body_height == 0 {
        return Err(ConfigError::InvalidValue {
            key: "body_height",
            reason: "must be at least 1".to_string(),
        });
    }
    let max_body = usize::from(u16::MAX) - CHROME_HEIGHT;
    if config.body_height > max_body {
        return Err(ConfigError::InvalidValue {
            key: "body_height",
            reason: format!("must be at most {max_body}"),
        });
    }
    Ok(config)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
