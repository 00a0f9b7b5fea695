//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the base URL, credentials, timeouts and success statuses
//!
//! Validation is a pure function returning every error found.

use thiserror::Error;
use url::Url;

use crate::config::schema::ClientConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("base_url '{0}' is not an http(s) URL")]
    InvalidBaseUrl(String),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("success status {0} is not a valid HTTP status")]
    InvalidStatus(u16),
}

pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        _ => errors.push(ValidationError::InvalidBaseUrl(config.base_url.clone())),
    }

    if config.access_id.is_empty() {
        errors.push(ValidationError::Empty("access_id"));
    }
    if config.secret_key.is_empty() {
        errors.push(ValidationError::Empty("secret_key"));
    }
    if config.timeout_ms == 0 {
        errors.push(ValidationError::Zero("timeout_ms"));
    }
    if config.success_statuses.is_empty() {
        errors.push(ValidationError::Empty("success_statuses"));
    }
    for status in &config.success_statuses {
        if !(100..=599).contains(status) {
            errors.push(ValidationError::InvalidStatus(*status));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
