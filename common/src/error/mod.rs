pub mod error_location;
pub mod status_range;
