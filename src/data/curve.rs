//! A curve: a collection of splines, stored the way the host stores them.

use crate::data::spline::Spline;

/// A curve consisting of zero or more splines
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Curve {
    pub splines: Vec<Spline>,
}

impl Curve {
    /// Create a new curve from a list of splines
    pub fn new(splines: Vec<Spline>) -> Self {
        Self { splines }
    }

    /// Create a curve from a single spline
    pub fn from_spline(spline: &Spline) -> Self {
        Self {
            splines: vec![spline.clone()],
        }
    }

    /// The first spline, the only one the exporter reads
    pub fn first_spline(&self) -> Option<&Spline> {
        self.splines.first()
    }
}
