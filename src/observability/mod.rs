//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! RequestExecutor produces:
//!     → tracing events (attempts, retries, terminal outcomes)
//!     → metrics.rs (counters and latency histogram via the metrics facade)
//!
//! Binaries install:
//!     → logging.rs (tracing-subscriber with env filter)
//!     → any metrics recorder/exporter they choose
//! ```
//!
//! # Constraints
//! - Secret keys and signatures never appear in events
//! - Without an installed recorder, metric calls are no-ops

pub mod logging;
pub mod metrics;
