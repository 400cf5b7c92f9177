use std::time::Duration;

use anyhow::{Context, Result};

use crate::results::renderer::RevealTimings;

const DEFAULT_API_URL: &str = "http://127.0.0.1:5001";
const DEFAULT_PROBE_TIMEOUT_MS: u64 = 3000;
const DEFAULT_LOADING_DELAY_MS: u64 = 1200;
const DEFAULT_REVEAL_DELAY_MS: u64 = 300;

/// Client configuration loaded from environment variables.
/// Every variable is optional; defaults match a local development backend.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    /// Advisory timeout for the reachability probe only.
    pub probe_timeout: Duration,
    pub loading_delay: Duration,
    pub reveal_delay: Duration,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            probe_timeout: Duration::from_millis(DEFAULT_PROBE_TIMEOUT_MS),
            loading_delay: Duration::from_millis(DEFAULT_LOADING_DELAY_MS),
            reveal_delay: Duration::from_millis(DEFAULT_REVEAL_DELAY_MS),
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_base_url: std::env::var("PREDICTION_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            probe_timeout: millis_from(
                "PROBE_TIMEOUT_MS",
                std::env::var("PROBE_TIMEOUT_MS").ok(),
                DEFAULT_PROBE_TIMEOUT_MS,
            )?,
            loading_delay: millis_from(
                "RESULTS_LOADING_DELAY_MS",
                std::env::var("RESULTS_LOADING_DELAY_MS").ok(),
                DEFAULT_LOADING_DELAY_MS,
            )?,
            reveal_delay: millis_from(
                "RESULTS_REVEAL_DELAY_MS",
                std::env::var("RESULTS_REVEAL_DELAY_MS").ok(),
                DEFAULT_REVEAL_DELAY_MS,
            )?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn reveal_timings(&self) -> RevealTimings {
        RevealTimings {
            loading: self.loading_delay,
            reveal: self.reveal_delay,
        }
    }
}

fn millis_from(key: &str, raw: Option<String>, default_ms: u64) -> Result<Duration> {
    let ms = match raw {
        Some(value) => value
            .trim()
            .parse::<u64>()
            .with_context(|| format!("{key} must be a whole number of milliseconds"))?,
        None => default_ms,
    };
    Ok(Duration::from_millis(ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_default_when_unset() {
        assert_eq!(
            millis_from("PROBE_TIMEOUT_MS", None, 3000).unwrap(),
            Duration::from_secs(3)
        );
    }

    #[test]
    fn test_millis_parses_value() {
        assert_eq!(
            millis_from("RESULTS_REVEAL_DELAY_MS", Some(" 50 ".to_string()), 300).unwrap(),
            Duration::from_millis(50)
        );
    }

    #[test]
    fn test_millis_rejects_garbage() {
        let err = millis_from("PROBE_TIMEOUT_MS", Some("soon".to_string()), 3000).unwrap_err();
        assert!(err.to_string().contains("PROBE_TIMEOUT_MS"));
    }

    #[test]
    fn test_default_timings() {
        let timings = Config::default().reveal_timings();
        assert_eq!(timings.loading, Duration::from_millis(1200));
        assert_eq!(timings.reveal, Duration::from_millis(300));
    }
}
