//! Request description and error definitions.

use std::fmt;
use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use crate::http::request::HttpMethod;
use crate::http::transport::TransportError;

pub const DEFAULT_BASE_URL: &str = "https://api.as2bet.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(3000);
pub const DEFAULT_BACKOFF_INITIAL_DELAY: Duration = Duration::from_millis(50);
pub const DEFAULT_SUCCESS_STATUSES: [u16; 2] = [200, 201];

/// One logical API call, before signing.
///
/// `path` is already rendered, query string included. `body` is ignored for
/// GET requests.
#[derive(Clone)]
pub struct RequestSpec {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
    pub base_url: String,
    pub access_id: String,
    pub secret_key: String,
    /// Deadline for a single attempt.
    pub timeout: Duration,
    /// Retries after the first attempt; 0 disables retrying.
    pub max_retries: u32,
    pub backoff_initial_delay: Duration,
    pub success_statuses: Vec<u16>,
}

impl RequestSpec {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            access_id: String::new(),
            secret_key: String::new(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: 0,
            backoff_initial_delay: DEFAULT_BACKOFF_INITIAL_DELAY,
            success_statuses: DEFAULT_SUCCESS_STATUSES.to_vec(),
        }
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn credentials(mut self, access_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        self.access_id = access_id.into();
        self.secret_key = secret_key.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn backoff_initial_delay(mut self, delay: Duration) -> Self {
        self.backoff_initial_delay = delay;
        self
    }

    pub fn success_statuses(mut self, statuses: impl Into<Vec<u16>>) -> Self {
        self.success_statuses = statuses.into();
        self
    }
}

impl fmt::Debug for RequestSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSpec")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("body", &self.body)
            .field("base_url", &self.base_url)
            .field("access_id", &self.access_id)
            .field("secret_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("backoff_initial_delay", &self.backoff_initial_delay)
            .field("success_statuses", &self.success_statuses)
            .finish()
    }
}

/// Terminal errors of a logical call.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Definitive non-success answer from the wallet service.
    #[error("{code}: {message}")]
    Application {
        code: String,
        message: String,
        status: u16,
        payload: Value,
    },

    /// Transport kept failing and no retries are left.
    #[error("request failed after {attempts} attempt(s): {source}")]
    RetryBudgetExhausted {
        attempts: u32,
        #[source]
        source: TransportError,
    },

    /// The request could not be built; nothing was sent.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The caller's shutdown signal fired mid-call.
    #[error("request cancelled after {attempts} attempt(s)")]
    Cancelled { attempts: u32 },
}

impl ClientError {
    /// Service error code, or a socket-style code for transport failures.
    pub fn code(&self) -> &str {
        match self {
            ClientError::Application { code, .. } => code.as_str(),
            ClientError::RetryBudgetExhausted { source, .. } => source.code(),
            ClientError::InvalidRequest(_) => "ERR_REQUEST",
            ClientError::Cancelled { .. } => "ECANCELED",
        }
    }

    /// Number of network attempts made before the error surfaced.
    pub fn attempts(&self) -> u32 {
        match self {
            ClientError::Application { .. } => 1,
            ClientError::RetryBudgetExhausted { attempts, .. } => *attempts,
            ClientError::InvalidRequest(_) => 0,
            ClientError::Cancelled { attempts } => *attempts,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::RetryBudgetExhausted { source, .. } if source.is_timeout())
    }
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_spec_defaults() {
        let spec = RequestSpec::new(HttpMethod::Get, "/users/1");
        assert_eq!(spec.base_url, "https://api.as2bet.com");
        assert_eq!(spec.timeout, Duration::from_millis(3000));
        assert_eq!(spec.backoff_initial_delay, Duration::from_millis(50));
        assert_eq!(spec.max_retries, 0);
        assert_eq!(spec.success_statuses, vec![200, 201]);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let spec = RequestSpec::new(HttpMethod::Get, "/").credentials("TEST", "123456Seven");
        let rendered = format!("{:?}", spec);
        assert!(rendered.contains("TEST"));
        assert!(!rendered.contains("123456Seven"));
    }

    #[test]
    fn test_error_codes() {
        let err = ClientError::Application {
            code: "ERR_DUPLICATE".into(),
            message: "Transaction already processed".into(),
            status: 409,
            payload: json!({}),
        };
        assert_eq!(err.code(), "ERR_DUPLICATE");
        assert_eq!(err.to_string(), "ERR_DUPLICATE: Transaction already processed");

        let err = ClientError::RetryBudgetExhausted {
            attempts: 3,
            source: TransportError::Timeout(Duration::from_millis(500)),
        };
        assert_eq!(err.code(), "ETIMEDOUT");
        assert_eq!(err.attempts(), 3);
        assert!(err.is_timeout());
        assert!(err.to_string().contains("after 3 attempt(s)"));
    }
}
