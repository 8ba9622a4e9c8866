//! Error types for the purifier
//!
//! Sanitizing itself never fails: malformed markup is recovered by the parser
//! and anything unrecognized is dropped. These errors only cover the edges the
//! crate exposes around that core (streaming output, loading options).

/// Error types for purifier I/O and configuration
#[derive(Debug, thiserror::Error)]
pub enum PurifyError {
    /// Writing serialized markup to the output sink failed
    #[error("Failed to write purified markup: {0}")]
    Io(#[from] std::io::Error),

    /// Options could not be deserialized from JSON
    #[error("Invalid purify options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
