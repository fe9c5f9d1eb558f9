//! Process configuration from environment variables.
//!
//! `.env` is loaded by `main` through dotenvy before this runs.

use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Optional; without it the startup pricing config is always used
    pub database_url: Option<String>,
    /// Optional JSON file replacing the default pricing config
    pub pricing_config_path: Option<PathBuf>,
    pub pricing_cache_ttl: Duration,
    pub currency: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, EnvError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EnvError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let currency = non_empty("CURRENCY")
            .unwrap_or_else(|| "USD".to_string())
            .to_ascii_uppercase();
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(EnvError::Invalid {
                key: "CURRENCY",
                value: currency,
                reason: "expected a three-letter currency code".to_string(),
            });
        }

        let ttl_secs: u64 = parse_or(
            non_empty("PRICING_CACHE_TTL_SECS"),
            "PRICING_CACHE_TTL_SECS",
            300,
        )?;
        if ttl_secs == 0 {
            return Err(EnvError::Invalid {
                key: "PRICING_CACHE_TTL_SECS",
                value: ttl_secs.to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Self {
            host: non_empty("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(non_empty("PORT"), "PORT", 8080)?,
            database_url: non_empty("DATABASE_URL"),
            pricing_config_path: non_empty("PRICING_CONFIG_PATH").map(PathBuf::from),
            pricing_cache_ttl: Duration::from_secs(ttl_secs),
            currency,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(raw: Option<String>, key: &'static str, default: T) -> Result<T, EnvError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match raw {
        Some(value) => value.trim().parse().map_err(|e: T::Err| EnvError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_map(pairs: &[(&str, &str)]) -> Result<AppConfig, EnvError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = from_map(&[]).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert!(config.database_url.is_none());
        assert!(config.pricing_config_path.is_none());
        assert_eq!(config.pricing_cache_ttl, Duration::from_secs(300));
        assert_eq!(config.currency, "USD");
    }

    #[test]
    fn test_overrides() {
        let config = from_map(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("DATABASE_URL", "postgres://localhost/luggage"),
            ("PRICING_CONFIG_PATH", "/etc/luggageguard/pricing.json"),
            ("PRICING_CACHE_TTL_SECS", "60"),
            ("CURRENCY", "eur"),
        ])
        .unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/luggage"));
        assert_eq!(
            config.pricing_config_path,
            Some(PathBuf::from("/etc/luggageguard/pricing.json"))
        );
        assert_eq!(config.pricing_cache_ttl, Duration::from_secs(60));
        assert_eq!(config.currency, "EUR");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = from_map(&[("DATABASE_URL", "  "), ("PORT", "")]).unwrap();
        assert!(config.database_url.is_none());
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            from_map(&[("PORT", "http")]),
            Err(EnvError::Invalid { key: "PORT", .. })
        ));
        assert!(matches!(
            from_map(&[("PRICING_CACHE_TTL_SECS", "0")]),
            Err(EnvError::Invalid { key: "PRICING_CACHE_TTL_SECS", .. })
        ));
        assert!(matches!(
            from_map(&[("CURRENCY", "dollars")]),
            Err(EnvError::Invalid { key: "CURRENCY", .. })
        ));
    }
}
