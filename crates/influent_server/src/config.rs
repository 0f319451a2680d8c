//! Server configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.
//! The influent range table is compiled in and is not part of this configuration.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid port number: {0}. Must be between 1 and 65535")]
    InvalidPort(String),

    #[error("Metrics port {0} collides with the API port")]
    MetricsPortCollision(u16),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid environment: {0}. Must be one of: development, production")]
    InvalidEnvironment(String),

    #[error("Invalid seed: {0}. Must be an unsigned 64-bit integer")]
    InvalidSeed(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Deployment environment. Production switches logging to JSON lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigError::InvalidEnvironment(s.to_string())),
        }
    }
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.is_production() {
            "production"
        } else {
            "development"
        })
    }
}

/// Environment variable names
pub mod env_vars {
    pub const HOST: &str = "INFLUENT_HOST";
    pub const PORT: &str = "INFLUENT_PORT";
    pub const LOG_LEVEL: &str = "INFLUENT_LOG_LEVEL";
    pub const ENVIRONMENT: &str = "INFLUENT_ENV";
    pub const SEED: &str = "INFLUENT_SEED";
    pub const METRICS_PORT: &str = "INFLUENT_METRICS_PORT";
}

/// Server configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Maximum level logged when `RUST_LOG` is unset
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: Level,
    /// Environment (development, production)
    #[serde(deserialize_with = "deserialize_environment")]
    pub environment: Environment,
    /// Fixed seed for a reproducible sample stream. Unset means fresh
    /// entropy per request.
    pub seed: Option<u64>,
    /// Port for the Prometheus exporter. Unset disables it.
    pub metrics_port: Option<u16>,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<Level, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_log_level(&s).map_err(serde::de::Error::custom)
}

fn parse_log_level(s: &str) -> Result<Level, ConfigError> {
    s.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidLogLevel(s.to_string()))
}

fn deserialize_environment<'de, D>(deserializer: D) -> Result<Environment, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Environment::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: Level::INFO,
            environment: Environment::Development,
            seed: None,
            metrics_port: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ServerConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Override fields from whichever variables `lookup` resolves.
    ///
    /// Only variables that are present change the configuration.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(env_vars::HOST) {
            self.host = host;
        }
        if let Some(port) = lookup(env_vars::PORT) {
            self.port = parse_port(&port)?;
        }
        if let Some(level) = lookup(env_vars::LOG_LEVEL) {
            self.log_level = parse_log_level(&level)?;
        }
        if let Some(env) = lookup(env_vars::ENVIRONMENT) {
            self.environment = Environment::from_str(&env)?;
        }
        if let Some(seed) = lookup(env_vars::SEED) {
            self.seed = Some(
                seed.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidSeed(seed.clone()))?,
            );
        }
        if let Some(port) = lookup(env_vars::METRICS_PORT) {
            self.metrics_port = Some(parse_port(&port)?);
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort(self.port.to_string()));
        }

        match self.metrics_port {
            Some(0) => Err(ConfigError::InvalidPort("0".to_string())),
            Some(p) if p == self.port => Err(ConfigError::MetricsPortCollision(p)),
            _ => Ok(()),
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(host) = &cli.host {
            self.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = parse_log_level(log_level)?;
        }
        if let Some(env) = &cli.environment {
            self.environment = Environment::from_str(env)?;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(port) = cli.metrics_port {
            self.metrics_port = Some(port);
        }
        Ok(())
    }
}

fn parse_port(s: &str) -> Result<u16, ConfigError> {
    s.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidPort(s.to_string()))
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Host address override
    pub host: Option<String>,
    /// Port override
    pub port: Option<u16>,
    /// Log level override
    pub log_level: Option<String>,
    /// Environment override
    pub environment: Option<String>,
    /// Seed override
    pub seed: Option<u64>,
    /// Metrics port override
    pub metrics_port: Option<u16>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<ServerConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<ServerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
