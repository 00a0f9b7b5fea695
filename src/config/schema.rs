//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::client::types::{RequestSpec, DEFAULT_BASE_URL, DEFAULT_SUCCESS_STATUSES};
use crate::http::request::HttpMethod;

/// Root configuration for the wallet client.
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Wallet API base URL.
    pub base_url: String,

    /// Provider access id, sent in the Authorization header.
    pub access_id: String,

    /// Provider secret key used for HMAC signing.
    pub secret_key: String,

    /// Per-attempt timeout in milliseconds.
    pub timeout_ms: u64,

    /// First backoff delay in milliseconds.
    pub backoff_initial_delay_ms: u64,

    /// HTTP statuses treated as success.
    pub success_statuses: Vec<u16>,

    /// Retry budgets per operation family.
    pub retries: RetryConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_id: String::new(),
            secret_key: String::new(),
            timeout_ms: 3000,
            backoff_initial_delay_ms: 50,
            success_statuses: DEFAULT_SUCCESS_STATUSES.to_vec(),
            retries: RetryConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn backoff_initial_delay(&self) -> Duration {
        Duration::from_millis(self.backoff_initial_delay_ms)
    }

    /// A request carrying this configuration's connection and credential settings.
    pub fn request(&self, method: HttpMethod, path: impl Into<String>, max_retries: u32) -> RequestSpec {
        RequestSpec::new(method, path)
            .base_url(self.base_url.clone())
            .credentials(self.access_id.clone(), self.secret_key.clone())
            .timeout(self.timeout())
            .backoff_initial_delay(self.backoff_initial_delay())
            .success_statuses(self.success_statuses.clone())
            .max_retries(max_retries)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("access_id", &self.access_id)
            .field("secret_key", &"<redacted>")
            .field("timeout_ms", &self.timeout_ms)
            .field("backoff_initial_delay_ms", &self.backoff_initial_delay_ms)
            .field("success_statuses", &self.success_statuses)
            .field("retries", &self.retries)
            .field("observability", &self.observability)
            .finish()
    }
}

/// Retry budgets. A budget of N allows N retries after the first attempt.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct RetryConfig {
    /// Authentication, sessions, user info and round end.
    pub default: u32,

    /// Debit, cancel debit and credit.
    pub transactions: u32,

    /// Bet, result and cancel.
    pub bets: u32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            default: 0,
            transactions: 5,
            bets: 2,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
