//! Error types for BigMap
//!
//! The map and its range iterator never fail: absence is reported through
//! `Option` and no-op conditions are silent. Errors only arise at the edges,
//! when decoding compact integers from byte buffers and when driving the
//! differential checker.

use thiserror::Error;

/// Result type alias using BigMapError
pub type Result<T> = std::result::Result<T, BigMapError>;

/// Unified error type for BigMap operations
#[derive(Debug, Error)]
pub enum BigMapError {
    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    #[error("Truncated buffer: need {needed} bytes, {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Checker Errors
    // -------------------------------------------------------------------------
    #[error("Map diverged from reference model: {0}")]
    Divergence(String),
}
