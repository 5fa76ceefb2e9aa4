//! Ingestion errors.

use thiserror::Error;

/// Why a record was refused at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    EmptyName,
    NegativeValue(i64),
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidReason::EmptyName => write!(f, "name is empty"),
            InvalidReason::NegativeValue(v) => write!(f, "value {v} is negative"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    /// `index` is the zero-based position of the record in the input batch.
    #[error("invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: InvalidReason },
}
