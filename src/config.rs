//! Configuration for the interactive session.
//!
//! Configuration sources (highest priority first):
//! 1. Command-line flags (applied by the CLI via [`ResolvedConfig::with_overrides`])
//! 2. Environment variables (LIBCAT_CANCEL_TOKEN)
//! 3. Config file (.libcat/config.yaml)
//! 4. Defaults (cancel token "-1", id suggestions on)
//!
//! Config file discovery:
//! - Searches current directory and parents for .libcat/config.yaml
//! - Falls back to ~/.libcat/config.yaml

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the cancel token
pub const CANCEL_TOKEN_ENV: &str = "LIBCAT_CANCEL_TOKEN";

/// Input that cancels the current prompt when nothing else is configured
pub const DEFAULT_CANCEL_TOKEN: &str = "-1";

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionConfig {
    /// Input that cancels the current prompt
    pub cancel_token: Option<String>,
    /// Print a suggested identifier before asking for one
    pub suggest_ids: Option<bool>,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    /// Input that cancels the current prompt
    pub cancel_token: String,
    /// Print a suggested identifier before asking for one
    pub suggest_ids: bool,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            cancel_token: DEFAULT_CANCEL_TOKEN.to_string(),
            suggest_ids: true,
            config_file: None,
        }
    }
}

impl ResolvedConfig {
    /// Apply command-line overrides on top of the resolved values
    pub fn with_overrides(
        mut self,
        cancel_token: Option<String>,
        no_suggest: bool,
    ) -> Result<Self> {
        if let Some(token) = cancel_token {
            self.cancel_token = checked_token(&token)?;
        }
        if no_suggest {
            self.suggest_ids = false;
        }
        Ok(self)
    }
}

fn checked_token(token: &str) -> Result<String> {
    let token = token.trim();
    if token.is_empty() {
        anyhow::bail!("Cancel token cannot be empty");
    }
    Ok(token.to_string())
}

/// Find config file by searching current directory and parents, then home
fn find_config_file() -> Option<PathBuf> {
    if let Ok(mut current) = std::env::current_dir() {
        loop {
            let config_path = current.join(".libcat").join("config.yaml");
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }
    }

    let home_config = dirs::home_dir()?.join(".libcat").join("config.yaml");
    home_config.exists().then_some(home_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Merge a parsed config file and environment value over the defaults
fn resolve(
    file: Option<(PathBuf, ConfigFile)>,
    env_token: Option<String>,
) -> Result<ResolvedConfig> {
    let mut config = ResolvedConfig::default();

    if let Some((path, file)) = file {
        if let Some(token) = file.session.cancel_token {
            config.cancel_token = checked_token(&token)
                .with_context(|| format!("Invalid cancel_token in {}", path.display()))?;
        }
        if let Some(suggest) = file.session.suggest_ids {
            config.suggest_ids = suggest;
        }
        config.config_file = Some(path);
    }

    if let Some(token) = env_token {
        config.cancel_token =
            checked_token(&token).with_context(|| format!("Invalid {}", CANCEL_TOKEN_ENV))?;
    }

    Ok(config)
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let file = match find_config_file() {
        Some(path) => {
            let parsed = load_config_file(&path)?;
            Some((path, parsed))
        }
        None => None,
    };

    resolve(file, std::env::var(CANCEL_TOKEN_ENV).ok())
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}
