//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Attempt against the wallet API:
//!     → timeouts.rs (enforce the per-attempt deadline)
//!     → On transport failure: backoff.rs (next Fibonacci delay or exhausted)
//! ```
//!
//! # Constraints
//! - Every network call has a deadline
//! - Only transport failures are retried; application errors are final
//! - Backoff state belongs to exactly one logical call

pub mod backoff;
pub mod timeouts;

pub use backoff::{BackoffPolicy, BackoffState, Exhausted, Wait};
pub use timeouts::with_timeout;
