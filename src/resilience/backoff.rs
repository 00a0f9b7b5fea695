//! Fibonacci backoff with a bounded retry budget.
//!
//! With an initial delay `d` the waits are `d, d, 2d, 3d, 5d, 8d, ...`.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

/// The retry budget has been spent; no further wait is scheduled.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("retry budget of {max_retries} exhausted")]
pub struct Exhausted {
    pub max_retries: u32,
}

/// How a backoff wait ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wait {
    /// The full delay passed.
    Elapsed(Duration),
    /// The caller cancelled before the delay passed.
    Cancelled,
}

/// Backoff progress for one logical call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackoffState {
    attempt: u32,
    previous_delay: Duration,
    current_delay: Duration,
}

impl BackoffState {
    /// Retries already performed.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Delay the next retry would wait.
    pub fn current_delay(&self) -> Duration {
        self.current_delay
    }
}

/// Retry budget and delay seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffPolicy {
    max_retries: u32,
    initial_delay: Duration,
}

impl BackoffPolicy {
    pub fn new(max_retries: u32, initial_delay: Duration) -> Self {
        Self {
            max_retries,
            initial_delay,
        }
    }

    /// Fresh state, seeded as `(0, initial_delay)`.
    pub fn start(&self) -> BackoffState {
        BackoffState {
            attempt: 0,
            previous_delay: Duration::ZERO,
            current_delay: self.initial_delay,
        }
    }

    /// Advance the state and return how long to wait before the next retry.
    ///
    /// Fails without touching the state once `attempt >= max_retries`.
    pub fn next_delay(&self, state: &mut BackoffState) -> Result<Duration, Exhausted> {
        if state.attempt >= self.max_retries {
            return Err(Exhausted {
                max_retries: self.max_retries,
            });
        }

        let wait = state.current_delay;
        let advance = state.previous_delay.saturating_add(state.current_delay);
        state.previous_delay = state.current_delay;
        state.current_delay = advance;
        state.attempt += 1;

        Ok(wait)
    }

    /// Advance the state and sleep for the computed delay, unless `cancelled`
    /// completes first.
    ///
    /// Returns `Exhausted` immediately, without sleeping, once the budget is spent.
    pub async fn wait<C>(&self, state: &mut BackoffState, cancelled: C) -> Result<Wait, Exhausted>
    where
        C: Future<Output = ()>,
    {
        let delay = self.next_delay(state)?;
        tokio::select! {
            biased;
            _ = cancelled => Ok(Wait::Cancelled),
            _ = tokio::time::sleep(delay) => Ok(Wait::Elapsed(delay)),
        }
    }
}
