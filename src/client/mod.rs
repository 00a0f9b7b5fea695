//! Wallet API client subsystem.
//!
//! # Data Flow
//! ```text
//! api.rs (endpoint methods render path + body)
//!     → ClientConfig::request() → RequestSpec (types.rs)
//!     → executor.rs (sign, send, classify, back off)
//!     → Value payload or ClientError
//! ```

pub mod api;
pub mod executor;
pub mod types;

pub use api::{BetRequest, OneWalletApi, TransactionRequest};
pub use executor::RequestExecutor;
pub use types::{ClientError, ClientResult, RequestSpec};
