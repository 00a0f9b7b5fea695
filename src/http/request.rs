//! Signed request construction.
//!
//! # Responsibilities
//! - Join the base URL with the caller-rendered path and query
//! - Serialize the JSON body once, so the signed bytes are the sent bytes
//! - Emit `Date`, `Authorization` and (with a body) `Content-Type` headers

use std::fmt;
use std::str::FromStr;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, DATE};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::client::types::{ClientError, ClientResult, RequestSpec};
use crate::signing;

/// HTTP methods accepted by the wallet API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
}

impl HttpMethod {
    /// Upper-case method name as it appears in the string to sign.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            "PATCH" => Ok(HttpMethod::Patch),
            "HEAD" => Ok(HttpMethod::Head),
            other => Err(ClientError::InvalidRequest(format!("unsupported method '{}'", other))),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Head => reqwest::Method::HEAD,
        }
    }
}

/// Wire form of a request body. GET requests never carry one.
///
/// Object keys keep the caller's insertion order.
pub fn serialize_body(method: HttpMethod, body: Option<&Value>) -> Option<String> {
    match (method, body) {
        (HttpMethod::Get, _) | (_, None) => None,
        (_, Some(value)) => Some(value.to_string()),
    }
}

/// Join a base URL and a rendered path (which may carry a query string).
///
/// The path must already be percent-encoded. A path that URL parsing would
/// rewrite (dot segments, raw spaces or non-ASCII, a fragment) is rejected,
/// since the server would see a different path than the one signed.
pub fn join_url(base_url: &str, path: &str) -> ClientResult<Url> {
    let base = base_url.trim_end_matches('/');
    let full = if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    };
    let url = Url::parse(&full)
        .map_err(|e| ClientError::InvalidRequest(format!("invalid URL '{}': {}", full, e)))?;

    if url.fragment().is_some() || !url.as_str().ends_with(path) {
        return Err(ClientError::InvalidRequest(format!(
            "path '{}' would be sent as '{}'",
            path,
            &url[url::Position::BeforePath..]
        )));
    }
    Ok(url)
}

/// A request ready for one attempt. Never reused across attempts.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl SignedRequest {
    /// Build and sign a request for `spec` using the captured `date`.
    pub fn build(spec: &RequestSpec, date: &str) -> ClientResult<Self> {
        let url = join_url(&spec.base_url, &spec.path)?;
        let body = serialize_body(spec.method, spec.body.as_ref());
        let signature = signing::sign_serialized(
            spec.method,
            &spec.path,
            body.as_deref(),
            date,
            &spec.secret_key,
        );

        let mut headers = HeaderMap::new();
        headers.insert(DATE, header_value(date)?);
        headers.insert(
            AUTHORIZATION,
            header_value(&signing::authorization_header(&spec.access_id, &signature))?,
        );
        if body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        Ok(Self {
            method: spec.method,
            url,
            headers,
            body,
        })
    }
}

fn header_value(value: &str) -> ClientResult<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| ClientError::InvalidRequest(format!("invalid header value: {}", e)))
}
