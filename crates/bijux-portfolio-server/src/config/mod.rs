// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BIND: &str = "0.0.0.0:8000";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { var: &'static str, value: String },
    Contract(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { var, value } => write!(f, "invalid value for {var}: {value:?}"),
            Self::Contract(msg) => write!(f, "startup config contract violated: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub static_dir: PathBuf,
    pub max_body_bytes: usize,
    pub log_json: bool,
    pub shutdown_drain: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log_json: true,
            shutdown_drain: Duration::ZERO,
        }
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim() {
        "1" | "true" | "TRUE" | "yes" | "YES" => Ok(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: raw.to_string(),
        }),
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
        var,
        value: raw.to_string(),
    })
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source; unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        if let Some(bind) = lookup("PORTFOLIO_BIND") {
            cfg.bind_addr = bind;
        }
        if let Some(dir) = lookup("PORTFOLIO_STATIC_DIR") {
            cfg.static_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup("PORTFOLIO_MAX_BODY_BYTES") {
            cfg.max_body_bytes = parse_number("PORTFOLIO_MAX_BODY_BYTES", &raw)?;
        }
        if let Some(raw) = lookup("PORTFOLIO_LOG_JSON") {
            cfg.log_json = parse_bool("PORTFOLIO_LOG_JSON", &raw)?;
        }
        if let Some(raw) = lookup("PORTFOLIO_SHUTDOWN_DRAIN_MS") {
            cfg.shutdown_drain =
                Duration::from_millis(parse_number("PORTFOLIO_SHUTDOWN_DRAIN_MS", &raw)?);
        }
        Ok(cfg)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_addr
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                var: "PORTFOLIO_BIND",
                value: self.bind_addr.clone(),
            })
    }
}

pub fn validate_startup_config_contract(cfg: &ServerConfig) -> Result<(), ConfigError> {
    if cfg.max_body_bytes == 0 {
        return Err(ConfigError::Contract(
            "max body bytes must be > 0".to_string(),
        ));
    }
    cfg.socket_addr()?;
    if cfg.static_dir.as_os_str().is_empty() {
        return Err(ConfigError::Contract(
            "static dir must not be empty".to_string(),
        ));
    }
    Ok(())
}
