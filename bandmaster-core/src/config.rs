//! Data-layer configuration.
//!
//! Only the fetch/caching knobs are configurable. Indicator windows and
//! the decision matrix are fixed constants — changing them changes the
//! strategy, not the deployment.

use serde::{Deserialize, Serialize};

use crate::data::provider::RetryPolicy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Days of daily history requested from the price provider.
    pub history_days: u32,
    /// Per-attempt timeout for blocking provider calls.
    pub fetch_timeout_secs: u64,
    /// Attempts before a fetch is reported as unavailable.
    pub fetch_attempts: u32,
    /// How long a cached history stays fresh.
    pub cache_ttl_secs: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            history_days: 120,
            fetch_timeout_secs: 10,
            fetch_attempts: 3,
            cache_ttl_secs: 180,
        }
    }
}

impl AnalysisConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            attempts: self.fetch_attempts,
            timeout_secs: self.fetch_timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = AnalysisConfig::default();
        assert_eq!(config.history_days, 120);
        assert_eq!(config.fetch_attempts, 3);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = AnalysisConfig::from_toml_str("history_days = 250\n").unwrap();
        assert_eq!(config.history_days, 250);
        assert_eq!(config.cache_ttl_secs, 180);
    }

    #[test]
    fn full_toml_round_trip() {
        let config = AnalysisConfig {
            history_days: 60,
            fetch_timeout_secs: 5,
            fetch_attempts: 2,
            cache_ttl_secs: 60,
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(AnalysisConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(AnalysisConfig::from_toml_str("history_days = \"many\"").is_err());
    }
}
