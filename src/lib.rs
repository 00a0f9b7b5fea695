//! Signed-request client for the OneWallet wallet/betting API.

pub mod client;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod resilience;
pub mod signing;

pub use client::{ClientError, ClientResult, OneWalletApi, RequestExecutor, RequestSpec};
pub use config::ClientConfig;
pub use http::{HttpMethod, Transport};
pub use lifecycle::Shutdown;
