use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A persisted enum column holds a value the domain model does not recognise.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unrecognised value '{value}' stored in column {column}")]
    InvalidStoredValue {
        /// The column the value was read from
        column: &'static str,
        /// The stored value that failed to parse
        value: String,
    },
}
