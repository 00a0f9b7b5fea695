//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Cancellation (shutdown.rs):
//!     trigger() → every subscribed execute_until call stops
//!                 (pending transport wait or backoff sleep)
//!
//! Signals (signals.rs):
//!     SIGINT/Ctrl-C → trigger()
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
