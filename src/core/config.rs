//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.passdata/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::detail::{DEFAULT_PLACEHOLDER, DetailOptions, MissingFieldPolicy};
use crate::core::user::{User, default_users};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PassDataConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub title: Option<String>,
    pub missing_fields: Option<MissingFieldPolicy>,
    pub placeholder: Option<String>,
}

pub const DEFAULT_TITLE: &str = "List User";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub title: String,
    pub detail: DetailOptions,
    pub users: Vec<User>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.passdata/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".passdata").join("config.toml"))
}

/// Load config from `path`, or `~/.passdata/config.toml` when `None`.
///
/// If the default file doesn't exist, generates a commented-out one and
/// returns `PassDataConfig::default()`. An explicit path that doesn't exist
/// is an I/O error.
pub fn load_config(path: Option<&Path>) -> Result<PassDataConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => {
                if !p.exists() {
                    info!("No config file found, generating default at {}", p.display());
                    generate_default_config(&p);
                    return Ok(PassDataConfig::default());
                }
                p
            }
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(PassDataConfig::default());
            }
        },
    };

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<PassDataConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# PassData Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# title = "List User"               # Or set PASSDATA_TITLE env var
# missing_fields = "reject"         # "reject" or "placeholder" (PASSDATA_MISSING_FIELDS)
# placeholder = "-"                 # Shown for absent fields when missing_fields = "placeholder"

# Replaces the built-in roster. Every field is optional.
# [[users]]
# id = 1
# name = "Nguyễn Hải Âu"
# age = 22
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PassDataConfig, cli_missing_fields: Option<MissingFieldPolicy>) -> ResolvedConfig {
    resolve_with_env(config, cli_missing_fields, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading env vars through `env` instead of the process environment.
pub fn resolve_with_env(
    config: &PassDataConfig,
    cli_missing_fields: Option<MissingFieldPolicy>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Title: env → config → default
    let title = env("PASSDATA_TITLE")
        .or_else(|| config.general.title.clone())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    // Missing-field policy: CLI → env → config → default
    let missing_fields = cli_missing_fields
        .or_else(|| env("PASSDATA_MISSING_FIELDS").and_then(|v| parse_policy(&v)))
        .or(config.general.missing_fields)
        .unwrap_or_default();

    let placeholder = config
        .general
        .placeholder
        .clone()
        .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string());

    // An empty [[users]] list means "use the built-in roster"
    let users = if config.users.is_empty() {
        default_users()
    } else {
        config.users.clone()
    };

    ResolvedConfig {
        title,
        detail: DetailOptions {
            missing_fields,
            placeholder,
        },
        users,
    }
}

fn parse_policy(value: &str) -> Option<MissingFieldPolicy> {
    match value.trim().to_ascii_lowercase().as_str() {
        "reject" => Some(MissingFieldPolicy::Reject),
        "placeholder" => Some(MissingFieldPolicy::Placeholder),
        other => {
            warn!("Ignoring unknown PASSDATA_MISSING_FIELDS value: {}", other);
            None
        }
    }
}
