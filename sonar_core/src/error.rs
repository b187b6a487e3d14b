// sonar_core/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading the recorded sensor log. All of them are fatal:
/// the replay never starts on a partially-read table.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("could not open sensor log {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read sensor log: {0}")]
    Read(#[from] csv::Error),

    #[error("line {line}: expected at most {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("sensor log contains no frames")]
    Empty,
}

/// A bearing table that cannot be index-aligned with the 24 readings.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("sensor geometry needs exactly {expected} bearings, got {found}")]
    BearingCount { expected: usize, found: usize },

    #[error("bearing for sensor {index} is not finite ({value})")]
    NonFiniteBearing { index: usize, value: f64 },
}

/// Errors returned by the frame renderer. These are caller bugs, not data issues.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("frame index {index} is out of range for a log of {frame_count} frames")]
    FrameOutOfRange { index: usize, frame_count: usize },
}

/// Anything that can stop a [`crate::Replay`] from being assembled.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
