// config.rs
use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} is not valid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: Url,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub fetch_timeout_secs: u64,
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse("http://localhost:5000/api").expect("static URL"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            fetch_timeout_secs: 30,
            page_size: 12,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(raw) = lookup("ESTATE_API_BASE_URL") {
            config.api_base_url = Url::parse(raw.trim()).map_err(|e| ConfigError::Invalid {
                key: "ESTATE_API_BASE_URL",
                reason: e.to_string(),
            })?;
        }
        if let Some(raw) = lookup("ESTATE_BIND_ADDR") {
            config.bind_addr = parse_setting("ESTATE_BIND_ADDR", &raw)?;
        }
        if let Some(raw) = lookup("ESTATE_MAX_WORKERS") {
            config.max_workers = parse_setting("ESTATE_MAX_WORKERS", &raw)?;
        }
        if let Some(raw) = lookup("ESTATE_FETCH_TIMEOUT_SECS") {
            config.fetch_timeout_secs = parse_setting("ESTATE_FETCH_TIMEOUT_SECS", &raw)?;
        }
        if let Some(raw) = lookup("ESTATE_PAGE_SIZE") {
            config.page_size = parse_setting("ESTATE_PAGE_SIZE", &raw)?;
        }

        if config.page_size == 0 {
            return Err(ConfigError::Invalid {
                key: "ESTATE_PAGE_SIZE",
                reason: "must be at least 1".into(),
            });
        }

        Ok(config)
    }
}

fn parse_setting<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_base_url.as_str(), "http://localhost:5000/api");
        assert_eq!(config.page_size, 12);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = AppConfig::from_lookup(lookup(&[
            ("ESTATE_API_BASE_URL", "https://api.example.com/v1/"),
            ("ESTATE_BIND_ADDR", "0.0.0.0:8080"),
            ("ESTATE_PAGE_SIZE", "24"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url.host_str(), Some("api.example.com"));
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.page_size, 24);
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(AppConfig::from_lookup(lookup(&[("ESTATE_MAX_WORKERS", "many")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("ESTATE_PAGE_SIZE", "0")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("ESTATE_API_BASE_URL", "not a url")])).is_err());
    }
}
