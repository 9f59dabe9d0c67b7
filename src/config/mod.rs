//! Configuration for path evaluation
//!
//! Supports:
//! - TOML configuration files
//! - Environment variable overrides
//! - Multiple config file locations
//!
//! # Configuration File Locations
//!
//! Configuration files are searched in order (first found wins):
//! 1. `./shacl-path.toml` - Project-local configuration
//! 2. `~/.config/shacl-path/config.toml` - User configuration (XDG)
//!
//! # Environment Variables
//!
//! Applied by [`PathConfig::load`], [`PathConfig::from_env`] and
//! `evaluate_path`:
//!
//! - `SHACL_PATH_MAX_DEPTH` - Maximum nesting of path expression evaluation
//! - `SHACL_PATH_LOG_STATS` - Emit evaluation statistics at debug level (true/false)
//!
//! # Example Configuration
//!
//! ```toml
//! [evaluation]
//! max_depth = 128
//! log_stats = false
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default nesting limit. Each level costs a few stack frames, so this stays
/// well inside a 2 MiB thread stack in unoptimized builds.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Environment variable overriding `evaluation.max_depth`
pub const ENV_MAX_DEPTH: &str = "SHACL_PATH_MAX_DEPTH";
/// Environment variable overriding `evaluation.log_stats`
pub const ENV_LOG_STATS: &str = "SHACL_PATH_LOG_STATS";

// ============================================================================
// Configuration Schema
// ============================================================================

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PathConfig {
    /// Evaluation settings
    pub evaluation: EvaluationConfig,
}

/// Evaluation limits and diagnostics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Maximum nesting of dispatch calls before evaluation fails.
    ///
    /// Each inverse, alternative and list cell adds one level, so this also
    /// bounds the length of sequence lists.
    pub max_depth: usize,
    /// Emit a statistics summary after each evaluation
    pub log_stats: bool,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            log_stats: false,
        }
    }
}

// ============================================================================
// Configuration Loading
// ============================================================================

impl PathConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from the default locations, then apply environment
    /// variable overrides
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for path in Self::config_paths() {
            if path.exists() {
                config = Self::load_from_file(&path)?;
                break;
            }
        }

        config.apply_env_overrides();
        Ok(config)
    }

    /// Default configuration with environment variable overrides applied
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(path.to_path_buf(), e.to_string()))
    }

    /// Load configuration from a TOML string
    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::Parse(PathBuf::from("<string>"), e.to_string()))
    }

    /// Get the list of config file search paths
    pub fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("./shacl-path.toml")];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("shacl-path").join("config.toml"));
        }

        paths
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply overrides from a variable lookup; unparsable values are ignored
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup(ENV_MAX_DEPTH) {
            match val.trim().parse::<usize>() {
                Ok(depth) => self.evaluation.max_depth = depth,
                Err(_) => tracing::warn!(variable = ENV_MAX_DEPTH, value = %val, "Ignoring unparsable override"),
            }
        }

        if let Some(val) = lookup(ENV_LOG_STATS) {
            self.evaluation.log_stats = matches!(val.trim(), "true" | "1" | "yes");
        }
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Write configuration to a file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        fs::write(path, content).map_err(|e| ConfigError::Io(path.to_path_buf(), e.to_string()))
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// IO error reading/writing config file
    #[error("IO error reading {}: {1}", .0.display())]
    Io(PathBuf, String),
    /// Parse error in config file
    #[error("Parse error in {}: {1}", .0.display())]
    Parse(PathBuf, String),
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),
}

// ============================================================================
// Tests
// ============================================================================
