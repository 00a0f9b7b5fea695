//! Request signing subsystem.
//!
//! # Data Flow
//! ```text
//! RequestSpec (method, path, body) + captured Date
//!     → signature.rs (canonical string, SHA1 body hash, HMAC-SHA1)
//!     → Authorization: OW {access_id}:{signature}
//! ```
//!
//! # Constraints
//! - Signing is pure; the same inputs always yield the same signature
//! - The Date header and the signed date must be the same string
//! - Secret keys are never logged

pub mod signature;

pub use signature::{authorization_header, http_date, sign, sign_serialized, string_to_sign};
