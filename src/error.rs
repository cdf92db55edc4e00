//! Error types surfaced by the aggregation pipeline.
//!
//! Only a malformed mission header is fatal to an aggregation run. Malformed
//! events and unknown actors are filtered silently and never appear here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("malformed mission metadata: {0}")]
    MalformedMissionMetadata(String),

    #[error("capture decode error: {0}")]
    CaptureDecode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AggregateError {
    pub fn malformed_mission(reason: impl Into<String>) -> Self {
        AggregateError::MalformedMissionMetadata(reason.into())
    }

    /// Short machine-readable kind, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            AggregateError::MalformedMissionMetadata(_) => "malformed_mission_metadata",
            AggregateError::CaptureDecode(_) => "capture_decode",
            AggregateError::Io(_) => "io",
        }
    }
}

pub type Result<T> = std::result::Result<T, AggregateError>;
