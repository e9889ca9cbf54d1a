//! Server configuration from environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Backend configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// JSON knowledge base to load instead of the builtin one.
    pub knowledge_base_path: Option<PathBuf>,
    /// Upper bound on `num_cards` per request.
    pub max_cards: usize,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            knowledge_base_path: None,
            max_cards: 50,
            max_body_bytes: 1024 * 1024,
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Optional env vars:
    /// - HOST: Bind address (default "0.0.0.0")
    /// - PORT: Bind port (default 3000)
    /// - KNOWLEDGE_BASE_PATH: JSON knowledge base file
    /// - MAX_CARDS: Largest accepted num_cards (default 50)
    /// - MAX_BODY_BYTES: Request body limit (default 1 MiB)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT", defaults.port)?,
            knowledge_base_path: lookup("KNOWLEDGE_BASE_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            max_cards: parse_var(&lookup, "MAX_CARDS", defaults.max_cards)?,
            max_body_bytes: parse_var(&lookup, "MAX_BODY_BYTES", defaults.max_body_bytes)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
