//! HTTP status values and their response classes.

use crate::{ErrorLocation, StatusRangeError};

use std::fmt;
use std::panic::Location;

use serde::Serialize;

/// Lowest status code a registry entry may hold.
pub const MIN_STATUS_CODE: u16 = 100;

/// Highest status code a registry entry may hold.
pub const MAX_STATUS_CODE: u16 = 599;

/// Response class, determined by the leading digit of the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    /// 1xx: request received, continuing process.
    Informational,
    /// 2xx: request received, understood and accepted.
    Success,
    /// 3xx: further action needed to complete the request.
    Redirection,
    /// 4xx: the request is malformed or cannot be fulfilled.
    ClientError,
    /// 5xx: the server failed to fulfil a valid request.
    ServerError,
}

impl StatusCategory {
    /// Category of a raw code, `None` outside 100..=599.
    pub const fn of(code: u16) -> Option<Self> {
        match code {
            100..=199 => Some(Self::Informational),
            200..=299 => Some(Self::Success),
            300..=399 => Some(Self::Redirection),
            400..=499 => Some(Self::ClientError),
            500..=599 => Some(Self::ServerError),
            _ => None,
        }
    }

    /// Human readable class name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Informational => "Informational",
            Self::Success => "Success",
            Self::Redirection => "Redirection",
            Self::ClientError => "Client Error",
            Self::ServerError => "Server Error",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// HTTP status code for error categorization.
///
/// Always holds a value in 100..=599, so the category is never ambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct HttpStatusCode(u16);

impl HttpStatusCode {
    /// Validate `code` and wrap it.
    #[track_caller]
    pub fn new(code: u16) -> Result<Self, StatusRangeError> {
        if !(MIN_STATUS_CODE..=MAX_STATUS_CODE).contains(&code) {
            return Err(StatusRangeError::OutOfRange {
                code,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(Self(code))
    }

    /// Wrap a code in a `const` context, such as a generated table row.
    ///
    /// # Panics
    ///
    /// Panics if `code` is outside 100..=599. In a `const` or `static`
    /// initializer that panic is a compile error.
    pub const fn from_const(code: u16) -> Self {
        assert!(
            code >= MIN_STATUS_CODE && code <= MAX_STATUS_CODE,
            "HTTP status code must be in 100..=599"
        );
        Self(code)
    }

    #[inline]
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn category(&self) -> StatusCategory {
        match self.0 {
            100..=199 => StatusCategory::Informational,
            200..=299 => StatusCategory::Success,
            300..=399 => StatusCategory::Redirection,
            400..=499 => StatusCategory::ClientError,
            // 500..=599: both constructors reject anything else
            _ => StatusCategory::ServerError,
        }
    }

    pub fn is_informational(&self) -> bool {
        self.category() == StatusCategory::Informational
    }

    pub fn is_success(&self) -> bool {
        self.category() == StatusCategory::Success
    }

    pub fn is_redirection(&self) -> bool {
        self.category() == StatusCategory::Redirection
    }

    /// 4xx client errors (not retryable).
    pub fn is_client_error(&self) -> bool {
        self.category() == StatusCategory::ClientError
    }

    /// 5xx server errors (potentially retryable).
    pub fn is_server_error(&self) -> bool {
        self.category() == StatusCategory::ServerError
    }

    pub fn is_error(&self) -> bool {
        self.is_client_error() || self.is_server_error()
    }

    /// Specific codes that indicate transient failures.
    pub fn is_retryable(&self) -> bool {
        matches!(self.0, 502 | 503 | 504 | 429)
    }
}

impl TryFrom<u16> for HttpStatusCode {
    type Error = StatusRangeError;

    #[track_caller]
    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::new(code)
    }
}

impl From<HttpStatusCode> for u16 {
    fn from(status: HttpStatusCode) -> Self {
        status.0
    }
}

impl fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
