//! A 2D point, used for anchors and tangent handles.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::{TrackError, TrackResult};

/// A 2D point with `f64` coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build a point from the leading components of a host coordinate.
    ///
    /// Host coordinates may carry a third (depth) component; only x and y
    /// are kept. Fewer than two components, or a non-finite component, is
    /// an error.
    pub fn from_components(components: &[f64]) -> TrackResult<Self> {
        match components {
            &[x, y, ..] => {
                if !x.is_finite() || !y.is_finite() {
                    return Err(TrackError::NonFiniteCoordinate { x, y });
                }
                Ok(Self::new(x, y))
            }
            _ => Err(TrackError::TruncatedCoordinate {
                found: components.len(),
            }),
        }
    }
}

// Points travel as `[x, y]` pairs in the export format, not as objects.
impl Serialize for Point {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        [self.x, self.y].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [x, y] = <[f64; 2]>::deserialize(deserializer)?;
        Ok(Self::new(x, y))
    }
}
