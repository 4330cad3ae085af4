//! Shared building blocks for the status registry workspace.
//!
//! - [`HttpStatusCode`]: a validated HTTP status value and its class
//! - [`StatusCategory`]: the five response classes, derived from the leading digit
//! - [`ErrorLocation`]: call-site capture carried by every error variant

pub mod error;
pub mod http_status;


pub use error::error_location::ErrorLocation;
pub use error::status_range::StatusRangeError;
pub use http_status::{HttpStatusCode, StatusCategory};
