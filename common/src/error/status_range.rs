use crate::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum StatusRangeError {
    #[error("Status Range Error: {code} is outside 100..=599 {location}")]
    OutOfRange { code: u16, location: ErrorLocation },
}
