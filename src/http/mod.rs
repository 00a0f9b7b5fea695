//! HTTP request/response handling subsystem.
//!
//! # Data Flow
//! ```text
//! RequestSpec + Date
//!     → request.rs (URL join, wire body, signed headers)
//!     → transport.rs (send over the network, bounded by timeout)
//!     → response.rs (classify into Success / ApplicationError / TransportFailure)
//! ```

pub mod request;
pub mod response;
pub mod transport;

pub use request::{HttpMethod, SignedRequest};
pub use response::{classify, HttpResponse, Outcome};
pub use transport::{ReqwestTransport, Transport, TransportError};
