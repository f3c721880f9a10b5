//! Bezier control point: an anchor with its two tangent handles.

use serde::{Deserialize, Serialize};

use crate::data::point::Point;
use crate::error::TrackResult;

/// A bezier control point with an anchor and two tangent handles
///
/// Field order matters for the export format: entries serialize as
/// `{"left": [x, y], "pos": [x, y], "right": [x, y]}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Incoming tangent handle
    pub left: Point,
    /// Anchor (on-curve) position
    pub pos: Point,
    /// Outgoing tangent handle
    pub right: Point,
}

impl ControlPoint {
    /// Create a control point from its three parts
    pub fn new(left: Point, pos: Point, right: Point) -> Self {
        Self { left, pos, right }
    }

    /// Convert one host bezier point from raw coordinate slices.
    ///
    /// This is the boundary where duck-typed host attributes
    /// (`handle_left`, `co`, `handle_right`) become a checked value type:
    /// each slice must expose at least two finite components, and any
    /// depth component is dropped.
    pub fn from_host_components(
        left: &[f64],
        pos: &[f64],
        right: &[f64],
    ) -> TrackResult<Self> {
        Ok(Self {
            left: Point::from_components(left)?,
            pos: Point::from_components(pos)?,
            right: Point::from_components(right)?,
        })
    }
}
