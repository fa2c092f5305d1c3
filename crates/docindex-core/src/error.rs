use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Malformed record at index {index}: {reason}")]
    Parse { index: usize, reason: String },

    #[error("Duplicate location '{location}' at record {index}")]
    DuplicateLocation { index: usize, location: String },

    #[error("Record {index} repeats location '{location}' with a different page, title or category")]
    ConflictingDuplicate { index: usize, location: String },

    #[error("Unknown category '{0}' (expected page, section, function or type)")]
    UnknownCategory(String),

    #[error("Malformed payload: {0}")]
    Payload(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Index of the offending record for load-time record errors.
    pub fn record_index(&self) -> Option<usize> {
        match self {
            Error::Parse { index, .. }
            | Error::DuplicateLocation { index, .. }
            | Error::ConflictingDuplicate { index, .. } => Some(*index),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
