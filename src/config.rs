//! Server configuration parsed from environment variables.

use std::net::SocketAddr;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_MOCK_USER_ID: &str = "mock-user-id";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT '{0}': expected an integer in 1..=65535")]
    InvalidPort(String),
    #[error("invalid listen address '{0}'")]
    InvalidAddress(String),
    #[error("CORS_ORIGIN must not be empty")]
    EmptyCorsOrigin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Single browser origin allowed to call the API with credentials.
    pub cors_origin: String,
    /// User id reported for every accepted bearer token.
    pub mock_user_id: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            cors_origin: DEFAULT_CORS_ORIGIN.to_owned(),
            mock_user_id: DEFAULT_MOCK_USER_ID.to_owned(),
        }
    }
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default `3000`
    /// - `CORS_ORIGIN`: default `http://localhost:3000`
    /// - `MOCK_USER_ID`: default `mock-user-id`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `PORT` is not a valid port number or
    /// `CORS_ORIGIN` is blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup; unset keys take defaults.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = parse_port(lookup("PORT").as_deref())?;
        let cors_origin = lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_owned());
        if cors_origin.trim().is_empty() {
            return Err(ConfigError::EmptyCorsOrigin);
        }
        let mock_user_id = lookup("MOCK_USER_ID").unwrap_or_else(|| DEFAULT_MOCK_USER_ID.to_owned());

        Ok(Self { host, port, cors_origin, mock_user_id })
    }

    /// Socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAddress`] when `host` is not an IP literal.
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::InvalidAddress(raw))
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => match value.parse::<u16>() {
            Ok(port) if port > 0 => Ok(port),
            _ => Err(ConfigError::InvalidPort(value.to_owned())),
        },
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
