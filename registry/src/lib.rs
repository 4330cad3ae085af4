//! Registry of HTTP status codes by symbolic name.
//!
//! Maps names such as `OK`, `NOT_FOUND` or `TEAPOT` to their numeric codes,
//! including vendor extensions from Nginx, Microsoft, Twitter, ArcGIS and
//! Cloudflare. Several names may share one code (`CALM` and
//! `METHOD_FAILURE` are both 420).
//!
//! ```
//! use status_registry::{get, names};
//!
//! assert_eq!(get("TEAPOT").unwrap(), 418);
//! assert_eq!(names::NOT_FOUND, 404);
//! assert!(get("NOT_A_REAL_STATUS").is_err());
//! ```
//!
//! The table is read from `status_codes.toml` at build time and is immutable
//! for the life of the process.

pub mod entry;
pub mod error;
pub mod logger;
pub mod registry;

mod table;

#[cfg(test)]
mod tests;

pub use common::{HttpStatusCode, StatusCategory};
pub use entry::{Origin, StatusEntry};
pub use error::RegistryError;
pub use registry::{
    category, contains, distinct_codes, entries, entries_for, get, is_empty, is_registered, len,
    lookup, names_for, synonyms,
};
pub use table::names;
