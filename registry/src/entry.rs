//! A single row of the status registry.

use common::{HttpStatusCode, StatusCategory};

use std::fmt;

use serde::Serialize;
use serde::ser::SerializeStruct;

/// Who defines a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Registered with IANA or defined by an RFC.
    Iana,
    /// Widely used without a standards body or a single owning vendor.
    Unofficial,
    Nginx,
    /// IIS and Exchange extensions.
    Microsoft,
    Twitter,
    /// Esri ArcGIS for Server.
    ArcGis,
    Cloudflare,
}

impl Origin {
    /// True for codes outside the IANA registry.
    pub fn is_vendor_extension(&self) -> bool {
        !matches!(self, Origin::Iana | Origin::Unofficial)
    }
}

/// A registered status: symbolic name, numeric code and its documentation.
///
/// Entries only exist inside the static registry table, so they are always
/// handed out as `&'static StatusEntry`.
#[derive(Debug, PartialEq, Eq)]
pub struct StatusEntry {
    pub(crate) name: &'static str,
    pub(crate) status: HttpStatusCode,
    pub(crate) origin: Origin,
    pub(crate) description: &'static str,
}

impl StatusEntry {
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn code(&self) -> u16 {
        self.status.as_u16()
    }

    #[inline]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    #[inline]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Code as a typed status.
    #[inline]
    pub fn status(&self) -> HttpStatusCode {
        self.status
    }

    pub fn category(&self) -> StatusCategory {
        self.status.category()
    }
}

impl fmt::Display for StatusEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status, self.name)
    }
}

// Category is derived, so it is written out alongside the stored fields.
impl Serialize for StatusEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("StatusEntry", 5)?;
        state.serialize_field("name", self.name)?;
        state.serialize_field("code", &self.status)?;
        state.serialize_field("category", &self.category())?;
        state.serialize_field("origin", &self.origin)?;
        state.serialize_field("description", self.description)?;
        state.end()
    }
}
