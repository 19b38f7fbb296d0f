use std::time::Duration;

use shared::constants::{DEFAULT_API_BASE_URL, RESET_PASSWORD_ENDPOINT};

use crate::error::ClientError;

pub const BASE_URL_VAR: &str = "RESET_API_BASE_URL";
pub const TIMEOUT_VAR: &str = "RESET_API_TIMEOUT_SECS";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self, ClientError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .map(normalize_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let timeout = match lookup(TIMEOUT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or(ClientError::InvalidConfig {
                    key: TIMEOUT_VAR,
                    value: raw,
                })?,
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self { base_url, timeout })
    }

    pub fn reset_password_url(&self) -> String {
        format!("{}{}", self.base_url, RESET_PASSWORD_ENDPOINT)
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(
            config.reset_password_url(),
            "http://127.0.0.1:3000/user/reset-password/reset-password"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let config = ClientConfig::from_lookup(lookup(&[
            (BASE_URL_VAR, "https://api.example.com/v1/"),
            (TIMEOUT_VAR, "5"),
        ]))
        .unwrap();
        assert_eq!(
            config.reset_password_url(),
            "https://api.example.com/v1/user/reset-password/reset-password"
        );
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_bad_timeout_is_rejected() {
        for bad in ["soon", "0", "-3"] {
            let err = ClientConfig::from_lookup(lookup(&[(TIMEOUT_VAR, bad)])).unwrap_err();
            assert!(matches!(err, ClientError::InvalidConfig { key: TIMEOUT_VAR, .. }));
        }
    }
}
