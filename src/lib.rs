//! Cohesa - workplace social matching
//!
//! This library provides the decision core behind the Cohesa discover flow:
//! a filtered, padded candidate deck, a cyclic cursor over it, and a match
//! engine that turns likes into mutual matches and gates calendar invites
//! behind them. All state is in memory.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod calendar;
pub mod deck;
pub mod discover;
pub mod matching;
pub mod pool;
pub mod storage;

#[cfg(test)]
mod tests;

/// Result type alias for Cohesa operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Cohesa operations
///
/// Swipe, match and messaging operations never fail; invalid input is a
/// no-op. Errors come from loading and saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Storage operation error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Setting value out of range
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Initialize logging
///
/// Honours `RUST_LOG`, defaulting to `cohesa=info`.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cohesa=info".into()),
        )
        .try_init();
}
