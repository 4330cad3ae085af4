use common::{ErrorLocation, StatusRangeError};

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum RegistryError {
    /// The name is not one of the registered identifiers.
    #[error("Not Found Error: no status named '{name}' {location}")]
    NotFound {
        name: String,
        location: ErrorLocation,
    },

    /// Logger could not be installed.
    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Range(#[from] StatusRangeError),
}
