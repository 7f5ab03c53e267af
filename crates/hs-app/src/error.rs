//! Error types for the hs-app service layer.

use std::path::PathBuf;

/// Application error type shared by every front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid number of arguments. Usage: {program} [network.inp]")]
    InvalidArgumentCount { program: String, count: usize },

    #[error("'{}' is not a valid '.inp' file.", .path.display())]
    InvalidFile { path: PathBuf },

    #[error("Program interrupted by user.")]
    Interrupted,

    #[error("Network error: {0}")]
    Network(#[from] hs_network::NetworkError),

    #[error("Report error: {0}")]
    Report(#[from] serde_json::Error),
}

/// Result type for hs-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Wrong argument count or a bad input path.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            AppError::InvalidArgumentCount { .. } | AppError::InvalidFile { .. }
        )
    }

    /// Process exit status for this error. A user interrupt is a clean exit.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Interrupted => 0,
            _ => 1,
        }
    }
}
