use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use validator::{Validate, ValidationError};

use crate::error::ConfigError;
use crate::services::dataset_service::MAX_PUBLISH_INTERVAL_MINUTES;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Config {
    #[validate]
    pub server: ServerConfig,
    #[validate]
    pub search: SearchSettings,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[validate(range(min = 1))]
    pub workers: usize,
}

/// Knobs of the mock search backend. The defaults mirror what the search UI
/// was built against, so changing them changes observable page sizes and totals.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_search_settings"))]
pub struct SearchSettings {
    pub default_page_size: i64,
    #[validate(range(min = 1))]
    pub min_page_size: i64,
    #[validate(range(min = 1))]
    pub max_page_size: i64,
    #[validate(range(max = 10_000))]
    pub base_total: usize,
    #[validate(range(min = 1, max = 10_000))]
    pub total_spread: usize,
    pub latency_min_ms: u64,
    pub latency_max_ms: u64,
    #[validate(range(min = 1, max = "MAX_PUBLISH_INTERVAL_MINUTES"))]
    pub publish_interval_minutes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_page_size: 8,
            min_page_size: 3,
            max_page_size: 20,
            base_total: 24,
            total_spread: 8,
            latency_min_ms: 260,
            latency_max_ms: 679,
            publish_interval_minutes: 45,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5733,
                workers: num_cpus::get(),
            },
            search: SearchSettings::default(),
            security: SecurityConfig {
                allowed_origins: vec!["*".to_string()],
            },
        }
    }
}

fn validate_search_settings(settings: &SearchSettings) -> Result<(), ValidationError> {
    if settings.min_page_size > settings.max_page_size {
        return Err(ValidationError::new("min_page_size_exceeds_max"));
    }
    if settings.latency_min_ms > settings.latency_max_ms {
        return Err(ValidationError::new("latency_min_exceeds_max"));
    }
    Ok(())
}

fn override_var<T, F>(lookup: &F, name: &'static str, target: &mut T) -> Result<(), ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(name) {
        match value.trim().parse() {
            Ok(parsed) => *target = parsed,
            Err(_) => return Err(ConfigError::InvalidVar { name, value }),
        }
    }
    Ok(())
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable source, starting from
    /// the defaults and overriding whatever the source provides.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Server configuration
        if let Some(host) = lookup("HOST") {
            config.server.host = host;
        }
        override_var(&lookup, "PORT", &mut config.server.port)?;
        override_var(&lookup, "WORKERS", &mut config.server.workers)?;

        // Search configuration
        let search = &mut config.search;
        override_var(&lookup, "SEARCH_DEFAULT_PAGE_SIZE", &mut search.default_page_size)?;
        override_var(&lookup, "SEARCH_MIN_PAGE_SIZE", &mut search.min_page_size)?;
        override_var(&lookup, "SEARCH_MAX_PAGE_SIZE", &mut search.max_page_size)?;
        override_var(&lookup, "SEARCH_BASE_TOTAL", &mut search.base_total)?;
        override_var(&lookup, "SEARCH_TOTAL_SPREAD", &mut search.total_spread)?;
        override_var(&lookup, "SEARCH_LATENCY_MIN_MS", &mut search.latency_min_ms)?;
        override_var(&lookup, "SEARCH_LATENCY_MAX_MS", &mut search.latency_max_ms)?;
        override_var(
            &lookup,
            "SEARCH_PUBLISH_INTERVAL_MINUTES",
            &mut search.publish_interval_minutes,
        )?;

        // Security configuration
        if let Some(allowed_origins) = lookup("ALLOWED_ORIGINS") {
            config.security.allowed_origins = allowed_origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_match_search_ui_contract() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.search.default_page_size, 8);
        assert_eq!(config.search.min_page_size, 3);
        assert_eq!(config.search.max_page_size, 20);
        assert_eq!(config.search.base_total, 24);
        assert_eq!(config.search.total_spread, 8);
        assert_eq!(config.security.allowed_origins, vec!["*".to_string()]);
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "9000"),
            ("SEARCH_LATENCY_MIN_MS", "0"),
            ("SEARCH_LATENCY_MAX_MS", "5"),
            ("ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.search.latency_min_ms, 0);
        assert_eq!(config.search.latency_max_ms, 5);
        assert_eq!(
            config.security.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn unparsable_value_names_the_variable() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
        match err {
            ConfigError::InvalidVar { name, value } => {
                assert_eq!(name, "PORT");
                assert_eq!(value, "not-a-port");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn inverted_latency_bounds_are_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("SEARCH_LATENCY_MIN_MS", "500"),
            ("SEARCH_LATENCY_MAX_MS", "100"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn oversized_publish_interval_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[(
            "SEARCH_PUBLISH_INTERVAL_MINUTES",
            "10000000000",
        )]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let config = Config::from_lookup(lookup_from(&[(
            "SEARCH_PUBLISH_INTERVAL_MINUTES",
            "525600",
        )]))
        .unwrap();
        assert_eq!(config.search.publish_interval_minutes, MAX_PUBLISH_INTERVAL_MINUTES);
    }

    #[test]
    fn oversized_dataset_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("SEARCH_BASE_TOTAL", "1000000")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Config::from_lookup(lookup_from(&[("SEARCH_TOTAL_SPREAD", "1000000")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn inverted_page_size_bounds_are_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("SEARCH_MIN_PAGE_SIZE", "30"),
            ("SEARCH_MAX_PAGE_SIZE", "20"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
