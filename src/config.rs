//! Configuration types.
//!
//! Everything is read from environment variables with defaults. Parsing goes
//! through a lookup closure so tests can feed values without touching the
//! process environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: IpAddr,
    /// Port to bind.
    pub port: u16,
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
    /// Allowed CORS origins. `*` allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            max_body_bytes: 64 * 1024,
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl ServerConfig {
    /// Load from `SUPPORT_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = parse_or(&lookup, "SUPPORT_HOST", defaults.host)?;
        let port = parse_or(&lookup, "SUPPORT_PORT", defaults.port)?;
        let max_body_bytes = parse_or(&lookup, "SUPPORT_MAX_BODY_BYTES", defaults.max_body_bytes)?;
        if max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                key: "SUPPORT_MAX_BODY_BYTES".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        let cors_origins = match lookup("SUPPORT_CORS_ORIGINS") {
            Some(raw) => {
                let origins: Vec<String> = raw
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                if origins.is_empty() {
                    defaults.cors_origins
                } else {
                    origins
                }
            }
            None => defaults.cors_origins,
        };

        Ok(Self {
            host,
            port,
            max_body_bytes,
            cors_origins,
        })
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether any origin is allowed.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

/// Responder configuration.
#[derive(Debug, Clone)]
pub struct ResponderConfig {
    /// Number of most recent conversation turns kept in the context transcript.
    pub max_history_turns: usize,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            max_history_turns: 10,
        }
    }
}

impl ResponderConfig {
    /// Load from `SUPPORT_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            max_history_turns: parse_or(
                &lookup,
                "SUPPORT_MAX_HISTORY_TURNS",
                defaults.max_history_turns,
            )?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("{:?}: {}", raw, e),
        }),
        None => Ok(default),
    }
}
