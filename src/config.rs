//! Startup configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `RUST_PORT` | `5000` | TCP port of the HTTP server |
//! | `BIND_ADDRESS` | `0.0.0.0` | Interface the server listens on |
//! | `MENU_FILE` | `menu.json` | Menu seed file; missing means an empty menu |
//! | `ACTOR_BUFFER` | `32` | Request queue capacity of each actor |

use std::env;
use std::fmt::Display;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_address: IpAddr,
    pub port: u16,
    pub menu_file: PathBuf,
    pub actor_buffer: usize,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, e.g. a map in tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = Self {
            bind_address: try_load(&lookup, "BIND_ADDRESS", "0.0.0.0")?,
            port: try_load(&lookup, "RUST_PORT", "5000")?,
            menu_file: try_load(&lookup, "MENU_FILE", "menu.json")?,
            actor_buffer: try_load(&lookup, "ACTOR_BUFFER", "32")?,
        };
        if config.actor_buffer == 0 {
            return Err(ConfigError::Invalid {
                key: "ACTOR_BUFFER",
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.menu_file, PathBuf::from("menu.json"));
        assert_eq!(config.actor_buffer, 32);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:5000");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("RUST_PORT", "8080"),
            ("BIND_ADDRESS", "127.0.0.1"),
            ("MENU_FILE", "/etc/restaurant/menu.json"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.menu_file, PathBuf::from("/etc/restaurant/menu.json"));
    }

    #[test]
    fn test_malformed_values_are_errors() {
        let err = Config::from_lookup(lookup(&[("RUST_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "RUST_PORT", .. }));

        let err = Config::from_lookup(lookup(&[("ACTOR_BUFFER", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "ACTOR_BUFFER", .. }));
    }
}
