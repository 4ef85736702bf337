use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unsupported game version: {0}")]
    UnsupportedVersion(String),

    #[error("Process not found: {0}")]
    ProcessNotFound(String),

    #[error("Failed to open process: {0}")]
    ProcessOpenFailed(String),

    #[error("Target process has terminated (exit code: {exit_code:?})")]
    ProcessTerminated { exit_code: Option<u32> },

    #[error("Failed to read process memory at address {address:#x}: {message}")]
    MemoryReadFailed { address: u64, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a single failed remote read.
    ///
    /// Read failures are recoverable: the affected slot keeps its
    /// sentinel value and the refresh continues.
    pub fn is_read_failure(&self) -> bool {
        matches!(self, Error::MemoryReadFailed { .. })
    }
}
