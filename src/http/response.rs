//! Response classification.
//!
//! # Responsibilities
//! - Parse response bodies as JSON, falling back to raw text
//! - Decide between success, application error and transport failure
//!
//! # Rules
//! - Status in the success set → `Success(payload)`
//! - Any other status → `ApplicationError`, never retried
//! - Transport failure → `TransportFailure`, always retryable

use serde_json::Value;

use crate::http::transport::TransportError;

/// Raw response as returned by a transport.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Result of a single attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(Value),
    ApplicationError {
        code: String,
        message: String,
        status: u16,
        payload: Value,
    },
    TransportFailure(TransportError),
}

/// Parse a body as JSON, or keep it as a raw string.
pub fn parse_payload(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Look up a non-null field on an object payload.
fn field<'a>(payload: &'a Value, name: &str) -> Option<&'a Value> {
    payload.get(name).filter(|v| !v.is_null())
}

/// Classify one transport result against the configured success statuses.
pub fn classify(result: Result<HttpResponse, TransportError>, success_statuses: &[u16]) -> Outcome {
    let response = match result {
        Ok(response) => response,
        Err(err) => return Outcome::TransportFailure(err),
    };

    let payload = parse_payload(&response.body);
    if success_statuses.contains(&response.status) {
        return Outcome::Success(payload);
    }

    let code = field(&payload, "code")
        .map(render)
        .unwrap_or_else(|| response.status.to_string());
    let message = field(&payload, "message")
        .map(render)
        .unwrap_or_else(|| render(&payload));

    Outcome::ApplicationError {
        code,
        message,
        status: response.status,
        payload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    const OK: &[u16] = &[200, 201];

    #[test]
    fn test_success_json() {
        let outcome = classify(Ok(HttpResponse::new(200, r#"{"balance":500}"#)), OK);
        assert_eq!(outcome, Outcome::Success(json!({"balance": 500})));

        let outcome = classify(Ok(HttpResponse::new(201, r#"{"id":"s1"}"#)), OK);
        assert_eq!(outcome, Outcome::Success(json!({"id": "s1"})));
    }

    #[test]
    fn test_success_raw_text() {
        let outcome = classify(Ok(HttpResponse::new(200, "OK then")), OK);
        assert_eq!(outcome, Outcome::Success(Value::String("OK then".into())));

        let outcome = classify(Ok(HttpResponse::new(200, "")), OK);
        assert_eq!(outcome, Outcome::Success(Value::String(String::new())));
    }

    #[test]
    fn test_success_set_is_configurable() {
        let outcome = classify(Ok(HttpResponse::new(201, "{}")), &[200]);
        assert!(matches!(outcome, Outcome::ApplicationError { status: 201, .. }));
    }

    #[test]
    fn test_application_error_fields() {
        let body = r#"{"code":"ERR_INSUFFICIENT_BALANCE","message":"Player 1 does not have balance"}"#;
        match classify(Ok(HttpResponse::new(409, body)), OK) {
            Outcome::ApplicationError { code, message, status, .. } => {
                assert_eq!(code, "ERR_INSUFFICIENT_BALANCE");
                assert_eq!(message, "Player 1 does not have balance");
                assert_eq!(status, 409);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_application_error_fallbacks() {
        match classify(Ok(HttpResponse::new(502, "Bad Gateway")), OK) {
            Outcome::ApplicationError { code, message, payload, .. } => {
                assert_eq!(code, "502");
                assert_eq!(message, "Bad Gateway");
                assert_eq!(payload, Value::String("Bad Gateway".into()));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }

        match classify(Ok(HttpResponse::new(400, r#"{"code":17,"detail":"x"}"#)), OK) {
            Outcome::ApplicationError { code, message, .. } => {
                assert_eq!(code, "17");
                assert_eq!(message, r#"{"code":17,"detail":"x"}"#);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_transport_failure_passes_through() {
        let outcome = classify(Err(TransportError::Timeout(Duration::from_millis(500))), OK);
        assert_eq!(outcome, Outcome::TransportFailure(TransportError::Timeout(Duration::from_millis(500))));
        assert!(matches!(
            classify(Ok(HttpResponse::new(500, "")), OK),
            Outcome::ApplicationError { status: 500, .. }
        ));
    }
}
