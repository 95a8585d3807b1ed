use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for rueda.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (RUEDA_* prefix)
/// 3. Config file (~/.config/rueda/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL or directory holding `rueda-moves.json` and `categories.json`.
    ///
    /// Can be set via:
    /// - CLI: --source https://example.org/rueda/
    /// - ENV: RUEDA_SOURCE
    /// - Config: source = "..."
    /// - Default: the current directory
    pub source: String,

    /// Per-request timeout in seconds. Unset means no timeout.
    pub request_timeout_secs: Option<u64>,

    /// Log level: trace, debug, info, warn or error.
    pub log_level: String,

    /// Whether log output is coloured.
    pub log_coloured: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: String::from("."),
            request_timeout_secs: None,
            log_level: String::from("info"),
            log_coloured: true,
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/rueda/config.toml
    /// Reads environment variables with RUEDA_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("rueda");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration, overriding the source.
    ///
    /// This is used when the --source CLI flag is provided.
    pub fn load_with_source(source: Option<String>) -> Result<Self> {
        let mut config = Self::load()?;
        if let Some(source) = source {
            config.source = source;
        }
        Ok(config)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/rueda/config.toml
/// - macOS: ~/Library/Application Support/rueda/config.toml
/// - Windows: %APPDATA%\rueda\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rueda")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Rueda Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (RUEDA_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Where the move list lives: a base URL or a local directory containing
# rueda-moves.json. The category document is read from the root of the
# source (/categories.json). End directory URLs with a slash.
#
# Can also be set via:
# - CLI: rueda --source https://example.org/rueda/ list
# - Environment: RUEDA_SOURCE=https://example.org/rueda/
source = "."

# Per-request timeout in seconds. Without it, a stalled server stalls
# loading indefinitely.
#request_timeout_secs = 30

# Logging
log_level = "info"
log_coloured = true
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
