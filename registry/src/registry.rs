//! Name and code lookups over the static status table.
//!
//! The table itself is a `'static` array; the indexes below are built once,
//! on first use, and never change afterwards.

use crate::entry::StatusEntry;
use crate::error::RegistryError;
use crate::table::STATUS_TABLE;

use common::{ErrorLocation, HttpStatusCode, StatusCategory};

use std::collections::{BTreeMap, HashMap};
use std::panic::Location;

use log::debug;
use once_cell::sync::Lazy;

/// Status name → entry
static BY_NAME: Lazy<HashMap<&'static str, &'static StatusEntry>> = Lazy::new(|| {
    let mut m = HashMap::with_capacity(STATUS_TABLE.len());
    for entry in STATUS_TABLE.iter() {
        m.insert(entry.name, entry);
    }
    debug!("Status registry indexed {} names", m.len());
    m
});

/// Status code → entries sharing it, in table order
static BY_CODE: Lazy<BTreeMap<u16, Vec<&'static StatusEntry>>> = Lazy::new(|| {
    let mut m: BTreeMap<u16, Vec<&'static StatusEntry>> = BTreeMap::new();
    for entry in STATUS_TABLE.iter() {
        m.entry(entry.code()).or_default().push(entry);
    }
    debug!("Status registry indexed {} distinct codes", m.len());
    m
});

/// Value registered for `name`.
///
/// Names are matched exactly, so `"ok"` is not `"OK"`.
///
/// # Errors
///
/// Returns [`RegistryError::NotFound`] if `name` is not registered.
#[track_caller]
pub fn get(name: &str) -> Result<u16, RegistryError> {
    lookup(name).map(StatusEntry::code)
}

/// Full entry registered for `name`.
///
/// # Errors
///
/// Returns [`RegistryError::NotFound`] if `name` is not registered.
#[track_caller]
pub fn lookup(name: &str) -> Result<&'static StatusEntry, RegistryError> {
    match BY_NAME.get(name) {
        Some(entry) => Ok(*entry),
        None => {
            debug!("Status lookup miss: {name}");
            Err(RegistryError::NotFound {
                name: name.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}

pub fn contains(name: &str) -> bool {
    BY_NAME.contains_key(name)
}

/// Every registered entry, in table order.
pub fn entries() -> impl Iterator<Item = &'static StatusEntry> {
    STATUS_TABLE.iter()
}

/// Number of registered names.
pub fn len() -> usize {
    STATUS_TABLE.len()
}

/// The build script rejects an empty data file, so this is false.
pub fn is_empty() -> bool {
    STATUS_TABLE.is_empty()
}

/// Entries registered for `code`. Synonyms come back in table order; an
/// unregistered code yields an empty slice.
pub fn entries_for(code: u16) -> &'static [&'static StatusEntry] {
    match BY_CODE.get(&code) {
        Some(entries) => entries.as_slice(),
        None => &[],
    }
}

/// Names registered for `code`, in table order.
pub fn names_for(code: u16) -> Vec<&'static str> {
    entries_for(code).iter().map(|entry| entry.name).collect()
}

pub fn is_registered(code: u16) -> bool {
    BY_CODE.contains_key(&code)
}

/// Every registered code once, ascending.
pub fn distinct_codes() -> impl Iterator<Item = u16> {
    BY_CODE.keys().copied()
}

/// Codes carried by more than one name, with their names in table order.
pub fn synonyms() -> impl Iterator<Item = (u16, &'static [&'static StatusEntry])> {
    BY_CODE
        .iter()
        .filter(|(_, entries)| entries.len() > 1)
        .map(|(code, entries)| (*code, entries.as_slice()))
}

/// Class of any code in 100..=599, registered or not.
///
/// # Errors
///
/// Returns [`RegistryError::Range`] for codes outside 100..=599.
#[track_caller]
pub fn category(code: u16) -> Result<StatusCategory, RegistryError> {
    Ok(HttpStatusCode::new(code)?.category())
}
