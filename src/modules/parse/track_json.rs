//! Parse track JSON documents back into control-point paths.

use std::path::Path;

use crate::data::document::TrackDocument;
use crate::error::TrackResult;

/// Parse track JSON text into a document
pub trait FromTrackJson: Sized {
    /// Parse from track JSON text
    fn from_track_json(data: &str) -> TrackResult<Self>;
}

impl FromTrackJson for TrackDocument {
    fn from_track_json(data: &str) -> TrackResult<Self> {
        Ok(serde_json::from_str(data)?)
    }
}

/// Read and parse a track JSON file
pub fn read_track_file(path: impl AsRef<Path>) -> TrackResult<TrackDocument> {
    let text = std::fs::read_to_string(path)?;
    TrackDocument::from_track_json(&text)
}
