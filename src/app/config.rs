//! Environment-driven configuration, read once at startup.

use super::admin::AdminSecret;
use std::net::{AddrParseError, SocketAddr};
use thiserror::Error;

pub const DEFAULT_DATABASE: &str = "sqlite://guestbook.db";
pub const DEFAULT_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("invalid GUESTBOOK_ADDR {value:?}: {source}")]
  Addr {
    value: String,
    #[source]
    source: AddrParseError,
  },
  #[error("invalid GUESTBOOK_MAX_CONNECTIONS {0:?}: expected a positive integer")]
  MaxConnections(String),
}

#[derive(Debug, Clone)]
pub struct Config {
  pub database_url: String,
  pub addr: SocketAddr,
  pub max_connections: u32,
  pub admin: AdminSecret,
}

impl Config {
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Build a config from an arbitrary variable source.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
    let database_url = lookup("GUESTBOOK_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string());

    let addr_raw = lookup("GUESTBOOK_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
    let addr = addr_raw.parse().map_err(|source| ConfigError::Addr {
      value: addr_raw.clone(),
      source,
    })?;

    let max_connections = match lookup("GUESTBOOK_MAX_CONNECTIONS") {
      None => DEFAULT_MAX_CONNECTIONS,
      Some(raw) => match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => return Err(ConfigError::MaxConnections(raw)),
      },
    };

    Ok(Self {
      database_url,
      addr,
      max_connections,
      admin: AdminSecret::new(lookup("ADMIN_PASSWORD")),
    })
  }
}
