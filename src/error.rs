use std::io;
use thiserror::Error;

/// Custom error type for the pcdx application
#[derive(Error, Debug)]
pub enum PcdxError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("GPU not available: {0}")]
    GpuNotAvailable(String),

    #[error("Export failed: {0}")]
    ExportFailure(String),

    #[error("a monitoring session is already running")]
    SessionConflict,

    #[error("Monitor error: {0}")]
    Monitor(String),

    #[error("TUI error: {0}")]
    Tui(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for the pcdx application
pub type Result<T> = std::result::Result<T, PcdxError>;

impl PcdxError {
    /// Create a provider-unavailable error
    pub fn provider_unavailable<S: Into<String>>(msg: S) -> Self {
        PcdxError::ProviderUnavailable(msg.into())
    }

    /// Create a GPU-not-available error
    pub fn gpu_not_available<S: Into<String>>(msg: S) -> Self {
        PcdxError::GpuNotAvailable(msg.into())
    }

    /// Create an export failure
    pub fn export_failure<S: Into<String>>(msg: S) -> Self {
        PcdxError::ExportFailure(msg.into())
    }

    pub fn monitor<S: Into<String>>(msg: S) -> Self {
        PcdxError::Monitor(msg.into())
    }

    pub fn tui<S: Into<String>>(msg: S) -> Self {
        PcdxError::Tui(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PcdxError::Other(msg.into())
    }
}
