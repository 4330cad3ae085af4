//! Static table compiled from `status_codes.toml` by the build script.

use crate::entry::{Origin, StatusEntry};

use common::HttpStatusCode;

include!(concat!(env!("OUT_DIR"), "/status_table.rs"));
