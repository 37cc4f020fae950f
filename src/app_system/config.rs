use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;
use crate::storage::DEFAULT_CART_KEY;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_STORAGE_DIR: &str = ".cart";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_MAILBOX_SIZE: usize = 32;

/// Runtime settings for a [`super::CartSystem`].
#[derive(Debug, Clone, PartialEq)]
pub struct CartConfig {
    pub api_url: String,
    pub storage_dir: PathBuf,
    pub storage_key: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub mailbox_size: usize,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            storage_key: DEFAULT_CART_KEY.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            mailbox_size: DEFAULT_MAILBOX_SIZE,
        }
    }
}

impl CartConfig {
    /// Reads settings from the process environment.
    ///
    /// Optional:
    /// - `CART_API_URL`: stock/catalog base URL
    /// - `CART_STORAGE_DIR`: directory holding the cart file
    /// - `CART_STORAGE_KEY`: key the cart is stored under
    /// - `CART_REQUEST_TIMEOUT_SECS`, `CART_CONNECT_TIMEOUT_SECS`
    /// - `CART_MAILBOX_SIZE`: pending requests before senders wait
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`Self::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let request_secs = parse_var(&lookup, "CART_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;
        let connect_secs = parse_var(&lookup, "CART_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS)?;
        let mailbox_size = parse_var(&lookup, "CART_MAILBOX_SIZE", DEFAULT_MAILBOX_SIZE)?;
        if mailbox_size == 0 {
            return Err(ConfigError::InvalidValue { var: "CART_MAILBOX_SIZE", value: "0".to_string() });
        }

        Ok(Self {
            api_url: lookup("CART_API_URL").unwrap_or(defaults.api_url),
            storage_dir: lookup("CART_STORAGE_DIR").map(PathBuf::from).unwrap_or(defaults.storage_dir),
            storage_key: lookup("CART_STORAGE_KEY").unwrap_or(defaults.storage_key),
            request_timeout: Duration::from_secs(request_secs),
            connect_timeout: Duration::from_secs(connect_secs),
            mailbox_size,
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => match value.trim().parse() {
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(ConfigError::InvalidValue { var, value }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = CartConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CartConfig::default());
        assert_eq!(config.storage_key, "@RocketShoes:cart");
    }

    #[test]
    fn overrides_are_applied() {
        let config = CartConfig::from_lookup(lookup_from(&[
            ("CART_API_URL", "http://shop.test"),
            ("CART_STORAGE_DIR", "/tmp/cart"),
            ("CART_REQUEST_TIMEOUT_SECS", " 3 "),
            ("CART_MAILBOX_SIZE", "4"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "http://shop.test");
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/cart"));
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.connect_timeout, Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));
        assert_eq!(config.mailbox_size, 4);
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        let err = CartConfig::from_lookup(lookup_from(&[("CART_CONNECT_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue { var: "CART_CONNECT_TIMEOUT_SECS", value: "soon".to_string() }
        );

        let err = CartConfig::from_lookup(lookup_from(&[("CART_MAILBOX_SIZE", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: "CART_MAILBOX_SIZE", .. }));
    }
}
