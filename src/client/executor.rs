//! Signed request execution with retries.
//!
//! # Data Flow
//! ```text
//! execute(spec)
//!     → capture Date → SignedRequest::build (fresh signature)
//!     → Transport::send, bounded by spec.timeout
//!     → classify
//!         Success          → return payload
//!         ApplicationError → return error, no retry
//!         TransportFailure → BackoffPolicy::wait → next attempt
//!                            (or RetryBudgetExhausted / Cancelled)
//! ```
//!
//! Each call owns its `BackoffState`; nothing is shared between calls, so one
//! executor can serve many concurrent calls.

use std::future::Future;
use std::time::Instant;

use chrono::Utc;
use serde_json::Value;
use tokio::sync::watch;

use crate::client::types::{ClientError, ClientResult, RequestSpec};
use crate::http::request::SignedRequest;
use crate::http::response::{classify, Outcome};
use crate::http::transport::{ReqwestTransport, Transport};
use crate::observability::metrics;
use crate::resilience::{with_timeout, BackoffPolicy, Wait};
use crate::signing;

/// Drives one logical call through sign/send/classify/backoff.
#[derive(Debug, Clone, Default)]
pub struct RequestExecutor<T = ReqwestTransport> {
    transport: T,
}

impl RequestExecutor<ReqwestTransport> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Transport> RequestExecutor<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute `spec`, retrying transport failures within its budget.
    pub async fn execute(&self, spec: &RequestSpec) -> ClientResult<Value> {
        self.run(spec, std::future::pending()).await
    }

    /// Like [`execute`](Self::execute), but gives up as soon as `shutdown`
    /// fires, whether the call is waiting on the network or on a backoff timer.
    ///
    /// A signal already triggered before the call starts cancels it before
    /// anything is sent. A coordinator dropped without triggering never cancels.
    pub async fn execute_until(
        &self,
        spec: &RequestSpec,
        mut shutdown: watch::Receiver<bool>,
    ) -> ClientResult<Value> {
        let cancelled = async move {
            if shutdown.wait_for(|triggered| *triggered).await.is_err() {
                std::future::pending::<()>().await;
            }
        };
        self.run(spec, cancelled).await
    }

    async fn run<C>(&self, spec: &RequestSpec, cancelled: C) -> ClientResult<Value>
    where
        C: Future<Output = ()>,
    {
        tokio::pin!(cancelled);

        let policy = BackoffPolicy::new(spec.max_retries, spec.backoff_initial_delay);
        let mut backoff = policy.start();
        let mut attempts = 0u32;
        let started = Instant::now();

        loop {
            attempts += 1;

            let date = signing::http_date(Utc::now());
            let request = SignedRequest::build(spec, &date)?;

            tracing::debug!(
                method = %spec.method,
                path = %spec.path,
                attempt = attempts,
                "Sending signed request"
            );

            let result = tokio::select! {
                biased;
                _ = &mut cancelled => {
                    metrics::record_request(spec.method, "cancelled", started.elapsed());
                    return Err(ClientError::Cancelled { attempts });
                }
                result = with_timeout(spec.timeout, self.transport.send(&request, spec.timeout)) => result,
            };

            match classify(result, &spec.success_statuses) {
                Outcome::Success(payload) => {
                    tracing::debug!(path = %spec.path, attempt = attempts, "Request succeeded");
                    metrics::record_request(spec.method, "success", started.elapsed());
                    return Ok(payload);
                }
                Outcome::ApplicationError {
                    code,
                    message,
                    status,
                    payload,
                } => {
                    tracing::debug!(
                        path = %spec.path,
                        status = status,
                        code = %code,
                        "Wallet service returned an error"
                    );
                    metrics::record_request(spec.method, "application_error", started.elapsed());
                    return Err(ClientError::Application {
                        code,
                        message,
                        status,
                        payload,
                    });
                }
                Outcome::TransportFailure(cause) => {
                    match policy.wait(&mut backoff, &mut cancelled).await {
                        Ok(Wait::Elapsed(delay)) => {
                            tracing::warn!(
                                path = %spec.path,
                                attempt = attempts,
                                waited_ms = delay.as_millis() as u64,
                                error = %cause,
                                "Transport failure, retrying"
                            );
                            metrics::record_retry(spec.method);
                        }
                        Ok(Wait::Cancelled) => {
                            metrics::record_request(spec.method, "cancelled", started.elapsed());
                            return Err(ClientError::Cancelled { attempts });
                        }
                        Err(exhausted) => {
                            tracing::warn!(
                                path = %spec.path,
                                attempts = attempts,
                                max_retries = exhausted.max_retries,
                                error = %cause,
                                "Retry budget exhausted"
                            );
                            metrics::record_request(spec.method, "exhausted", started.elapsed());
                            return Err(ClientError::RetryBudgetExhausted {
                                attempts,
                                source: cause,
                            });
                        }
                    }
                }
            }
        }
    }
}
