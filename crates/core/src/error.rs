//! Error types for trace ingestion.
//!
//! Only insertion can fail, and only on structurally invalid input. Every
//! query operation is total: unknown people and timestamps yield empty
//! results, never an error, so queries cannot fail due to missing history.

use crate::types::{PersonId, Timestamp};
use thiserror::Error;

/// Rejection reasons for structurally invalid traces.
///
/// Raised synchronously by insertion; never retried internally. The caller
/// decides whether to skip the offending trace or abort ingestion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The two people of the trace are the same identifier
    #[error("self-contact trace for '{person}'")]
    SelfContact {
        /// The identifier appearing on both sides of the trace
        person: PersonId,
    },

    /// The trace timestamp is negative
    #[error("negative trace timestamp: {time}")]
    NegativeTimestamp {
        /// The rejected timestamp
        time: Timestamp,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a self-contact rejection.
    pub fn is_self_contact(&self) -> bool {
        matches!(self, Error::SelfContact { .. })
    }

    /// Check if this is a negative-timestamp rejection.
    pub fn is_negative_timestamp(&self) -> bool {
        matches!(self, Error::NegativeTimestamp { .. })
    }
}
