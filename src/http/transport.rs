//! Network transport.
//!
//! # Responsibilities
//! - Send one signed request and return status and body text
//! - Map client failures onto timeout / connect / I/O errors
//!
//! Transports never interpret status codes; that is the classifier's job.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::http::request::SignedRequest;
use crate::http::response::HttpResponse;

/// Failures below the HTTP layer. All of them are retryable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// No response arrived within the attempt deadline.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection could not be established (refused, DNS, TLS).
    #[error("connection failed: {0}")]
    Connect(String),

    /// Connection dropped or the body could not be read.
    #[error("transport error: {0}")]
    Io(String),
}

impl TransportError {
    /// Short error code in the style of socket errors.
    pub fn code(&self) -> &'static str {
        match self {
            TransportError::Timeout(_) => "ETIMEDOUT",
            TransportError::Connect(_) => "ECONNREFUSED",
            TransportError::Io(_) => "EIO",
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Timeout(_))
    }

    fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(timeout)
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Io(err.to_string())
        }
    }
}

/// Capability to put a signed request on the wire.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: &SignedRequest,
        timeout: Duration,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// Transport backed by a `reqwest` client with system TLS defaults.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (proxy settings, user agent).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn send(
        &self,
        request: &SignedRequest,
        timeout: Duration,
    ) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method.into(), request.url.clone())
            .headers(request.headers.clone())
            .timeout(timeout);
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(e, timeout))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::from_reqwest(e, timeout))?;

        Ok(HttpResponse { status, body })
    }
}
