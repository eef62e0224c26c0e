use thiserror::Error;

/// Everything a user action can fail with. The UI renders these inline;
/// nothing here should abort the process.
#[derive(Error, Debug)]
pub(crate) enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Invalid credentials or user not registered")]
    Authentication,

    #[error("Storage error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub(crate) fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// True for the storage variants, which wrap I/O rather than bad input.
    pub(crate) fn is_storage(&self) -> bool {
        matches!(self, Self::Csv(_) | Self::Io(_))
    }
}
