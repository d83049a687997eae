use std::env;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const API_BASE_VAR: &str = "KITCHEN_API_BASE_URL";
pub const API_ORIGIN_VAR: &str = "KITCHEN_API_ORIGIN";
pub const TIMEOUT_VAR: &str = "KITCHEN_HTTP_TIMEOUT_SECS";
pub const WEATHER_KEY_VAR: &str = "OPENWEATHER_API_KEY";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Backend base; an absolute URL or a path resolved against `api_origin`.
    pub api_base: String,
    pub api_origin: String,
    pub timeout: Duration,
    pub weather_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_origin: DEFAULT_API_ORIGIN.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            weather_api_key: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let timeout = match get(TIMEOUT_VAR) {
            None => defaults.timeout,
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    log::warn!("Invalid {} value '{}', using default: {}", TIMEOUT_VAR, raw, DEFAULT_TIMEOUT_SECS);
                    defaults.timeout
                }
            },
        };

        Self {
            api_base: get(API_BASE_VAR).unwrap_or(defaults.api_base),
            api_origin: get(API_ORIGIN_VAR).unwrap_or(defaults.api_origin),
            timeout,
            weather_api_key: get(WEATHER_KEY_VAR),
        }
    }

    /// The absolute backend URL requests are made against.
    pub fn api_base_url(&self) -> String {
        if self.api_base.starts_with('/') {
            format!("{}{}", self.api_origin.trim_end_matches('/'), self.api_base)
        } else {
            self.api_base.clone()
        }
    }
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.api_base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn absolute_base_is_used_as_is() {
        let config = Config::from_lookup(lookup(&[(API_BASE_VAR, "https://kitchen.example.com/Prod")]));
        assert_eq!(config.api_base_url(), "https://kitchen.example.com/Prod");
    }

    #[test]
    fn relative_base_joins_origin() {
        let config = Config::from_lookup(lookup(&[
            (API_BASE_VAR, "/v2"),
            (API_ORIGIN_VAR, "http://pi.local:9000/"),
        ]));
        assert_eq!(config.api_base_url(), "http://pi.local:9000/v2");
    }

    #[test]
    fn invalid_timeout_falls_back() {
        let config = Config::from_lookup(lookup(&[(TIMEOUT_VAR, "soon")]));
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let config = Config::from_lookup(lookup(&[(TIMEOUT_VAR, "0")]));
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let config = Config::from_lookup(lookup(&[(TIMEOUT_VAR, "3")]));
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn blank_weather_key_is_unset() {
        let config = Config::from_lookup(lookup(&[(WEATHER_KEY_VAR, "  ")]));
        assert_eq!(config.weather_api_key, None);
    }
}
