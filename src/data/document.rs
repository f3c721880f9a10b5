//! The export document: one path per track object.

use serde::{Deserialize, Serialize};

use crate::data::control_point::ControlPoint;

/// An ordered list of paths, one per matched track object, each holding
/// that object's control points in spline order.
///
/// Serializes transparently as the bare outer JSON array, so the on-disk
/// format stays `[[{"left": ..., "pos": ..., "right": ...}, ...], ...]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackDocument {
    pub paths: Vec<Vec<ControlPoint>>,
}

impl TrackDocument {
    /// Create a document from already-collected paths
    pub fn new(paths: Vec<Vec<ControlPoint>>) -> Self {
        Self { paths }
    }

    /// Number of paths
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// True when no track objects matched
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
