//! Error types for scene lookup, shape validation, and output IO.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type TrackResult<T> = Result<T, TrackError>;

/// Everything that can abort an export.
///
/// None of these are recovered from: the export is a one-shot batch
/// operation and any failure propagates to the caller unchanged.
#[derive(Debug, Error)]
pub enum TrackError {
    /// No object with the requested name exists in the scene.
    #[error("no object named `{0}` in the scene")]
    ObjectNotFound(String),

    /// The object exists but carries no curve data.
    #[error("object `{0}` has no curve data")]
    NoCurveData(String),

    /// The object's curve contains no splines to read.
    #[error("curve on object `{0}` has no splines")]
    NoSplines(String),

    /// A host coordinate exposed fewer than the two exported axes.
    #[error("coordinate has {found} component(s), expected at least 2")]
    TruncatedCoordinate { found: usize },

    /// A coordinate component was NaN or infinite.
    #[error("non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("output file error: {0}")]
    Io(#[from] std::io::Error),
}
