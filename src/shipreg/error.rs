use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShipError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Ship not found: {0}")]
    NotFound(u64),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl ShipError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// True for failures caused by the request itself rather than by storage.
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::MalformedInput(_))
    }
}

pub type Result<T> = std::result::Result<T, ShipError>;
