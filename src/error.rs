//! Error types for flockdiary
//!
//! Provides a unified error type for all operations.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias using DiaryError
pub type Result<T> = std::result::Result<T, DiaryError>;

/// Unified error type for flockdiary operations
#[derive(Debug, Error)]
pub enum DiaryError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Storage error: {0}")]
    Storage(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Referential Errors
    // -------------------------------------------------------------------------
    /// Only raised when strict group references are enabled
    #[error("Unknown group: {0}")]
    UnknownGroup(Uuid),

    // -------------------------------------------------------------------------
    // Input / Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
