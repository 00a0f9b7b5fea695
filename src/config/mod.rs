//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, ONEWALLET_SECRET_KEY override)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//!     → ClientConfig::request() stamps RequestSpecs for the executor
//! ```
//!
//! # Constraints
//! - All fields have defaults so a file may set only credentials
//! - Validation collects every error rather than stopping at the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError, SECRET_KEY_ENV_VAR};
pub use schema::{ClientConfig, ObservabilityConfig, RetryConfig};
pub use validation::{validate_config, ValidationError};
