//! Error types and result handling for cdc-seed.
//!
//! This module defines the main error type [`Error`] and a convenience
//! [`Result`] type alias used throughout the crate.

use thiserror::Error;

/// The main error type for cdc-seed operations.
///
/// Topic provisioning errors are recovered at the call site with a warning;
/// every other variant is fatal to the run. The seeder's value is complete,
/// in-order delivery of the whole batch, so a partial run always surfaces as
/// a loud failure rather than a silently skipped record.
#[derive(Error, Debug)]
pub enum Error {
    /// Kafka client, admin, or producer error.
    #[error("Kafka error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),

    /// JSON serialization error when encoding a record key or value.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The broker did not acknowledge a send within the per-record bound.
    #[error("Timeout error: {message}")]
    Timeout {
        /// Description of what timed out
        message: String,
    },
}

/// A convenient Result type alias for cdc-seed operations.
pub type Result<T> = std::result::Result<T, Error>;
