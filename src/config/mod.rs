//! Configuration management module
//!
//! Handles loading and validation of the workspace TOML configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{LineageError, Result};

/// Environment variable prefix
const ENV_PREFIX: &str = "LINEAGECTL";

/// Main configuration struct
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Workspace connection configuration
    pub workspace: WorkspaceConfig,
}

/// Workspace connection configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkspaceConfig {
    /// Workspace base URL, e.g. https://workspace.example.com
    pub host: String,
    /// API access token
    pub token: String,
}

impl Config {
    /// Get default configuration file path (~/.config/lineagectl/config.toml)
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| LineageError::Config("Cannot get configuration directory".to_string()))?;
        Ok(config_dir.join("lineagectl").join("config.toml"))
    }

    /// Parse dotted key path (e.g., "workspace.host") into section and field
    pub fn parse_key(key: &str) -> Result<(&str, &str)> {
        let parts: Vec<&str> = key.split('.').collect();
        if parts.len() != 2 {
            return Err(LineageError::Validation(format!(
                "Invalid key format '{}'. Use format: section.field (e.g., workspace.host)",
                key
            )));
        }
        Ok((parts[0], parts[1]))
    }

    /// Get a config value as string by key path
    /// Note: workspace.token is masked; use the environment variable for scripting
    pub fn get_value(&self, key: &str) -> Result<String> {
        let (section, field) = Self::parse_key(key)?;

        match (section, field) {
            ("workspace", "host") => Ok(self.workspace.host.clone()),
            ("workspace", "token") => Ok("********".to_string()),
            _ => Err(LineageError::Validation(format!(
                "Unknown config key: {}",
                key
            ))),
        }
    }

    /// Update a single config value by key path
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let (section, field) = Self::parse_key(key)?;

        match (section, field) {
            ("workspace", "host") => {
                if !Self::is_valid_url(value) {
                    return Err(LineageError::Validation(format!("Invalid URL: {}", value)));
                }
                self.workspace.host = value.to_string();
            }
            ("workspace", "token") => {
                if value.is_empty() {
                    return Err(LineageError::Validation("Token cannot be empty".to_string()));
                }
                self.workspace.token = value.to_string();
            }
            _ => {
                return Err(LineageError::Validation(format!(
                    "Unknown config key: {}",
                    key
                )));
            }
        }
        Ok(())
    }

    /// Save config to file atomically
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LineageError::Config(format!("Failed to serialize config: {}", e)))?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(LineageError::Io)?;
            }
        }

        // Write to temp file first
        let temp_path = path.with_extension("tmp");
        std::fs::write(&temp_path, content).map_err(LineageError::Io)?;

        // Atomic rename
        std::fs::rename(&temp_path, path).map_err(LineageError::Io)?;

        Ok(())
    }

    /// Run interactive configuration setup
    pub fn interactive_setup() -> Result<Self> {
        use std::io::{self, Write};

        println!("Welcome to lineagectl! Let's set up your workspace.\n");

        /// Prompt for user input with a message
        fn prompt(message: &str) -> Result<String> {
            print!("{}", message);
            io::stdout().flush().map_err(LineageError::Io)?;
            let mut input = String::new();
            io::stdin().read_line(&mut input).map_err(LineageError::Io)?;
            Ok(input.trim().to_string())
        }

        let host = loop {
            let host = prompt("Workspace URL (https://...): ")?;
            if Self::is_valid_url(&host) {
                break host;
            }
            println!("Invalid URL format. Please try again.");
        };

        let token = loop {
            let token = prompt("API token: ")?;
            if !token.is_empty() {
                break token;
            }
            println!("Token cannot be empty. Please try again.");
        };

        let config = Config {
            workspace: WorkspaceConfig { host, token },
        };

        // Validate before returning
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file
    pub fn parse_from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LineageError::Config(format!("Failed to read configuration file: {}", e))
        })?;
        Self::parse_from_str(&content)
    }

    /// Load configuration from string
    pub fn parse_from_str(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)
            .map_err(|e| LineageError::Config(format!("Failed to parse configuration file: {}", e)))?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load default configuration
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        Self::parse_from_file(&path)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var(format!("{}_WORKSPACE_HOST", ENV_PREFIX)) {
            self.workspace.host = host;
        }
        if let Ok(token) = std::env::var(format!("{}_WORKSPACE_TOKEN", ENV_PREFIX)) {
            self.workspace.token = token;
        }
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        if self.workspace.host.is_empty() {
            return Err(LineageError::Config(
                "Workspace host cannot be empty".to_string(),
            ));
        }
        if !Self::is_valid_url(&self.workspace.host) {
            return Err(LineageError::Config(format!(
                "Invalid workspace host: {}",
                self.workspace.host
            )));
        }
        if self.workspace.token.is_empty() {
            return Err(LineageError::Config(
                "Access token cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Simple URL format validation
    fn is_valid_url(url: &str) -> bool {
        (url.starts_with("http://") || url.starts_with("https://")) && url.len() > 10
    }

    /// Generate configuration example
    pub fn example() -> String {
        r#"# lineagectl Configuration File Example
# Location: ~/.config/lineagectl/config.toml

[workspace]
host = "https://workspace.example.com"
token = "your-api-token-here"
"#
        .to_string()
    }

    /// Create configuration directory
    pub fn ensure_config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| LineageError::Config("Cannot get configuration directory".to_string()))?
            .join("lineagectl");

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| {
                LineageError::Config(format!("Failed to create configuration directory: {}", e))
            })?;
        }

        Ok(config_dir)
    }
}
