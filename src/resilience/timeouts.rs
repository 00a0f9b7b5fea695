//! Per-attempt deadline enforcement.
//!
//! Wraps any transport future with a tokio timer so that a transport that
//! ignores its timeout argument still cannot stall a call.

use std::future::Future;
use std::time::Duration;

use tokio::time::timeout;

use crate::http::transport::TransportError;

/// Run `fut`, failing with `TransportError::Timeout` once `deadline` elapses.
pub async fn with_timeout<F, T>(deadline: Duration, fut: F) -> Result<T, TransportError>
where
    F: Future<Output = Result<T, TransportError>>,
{
    match timeout(deadline, fut).await {
        Ok(result) => result,
        Err(_) => Err(TransportError::Timeout(deadline)),
    }
}
