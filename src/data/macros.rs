//! This module provides convenient macros for creating points, control points, splines, and curves.

/// Macro for creating a Point
#[macro_export]
macro_rules! pt {
    ($x:expr, $y:expr) => {
        $crate::data::Point::new($x as f64, $y as f64)
    };
}

/// Macro for creating a control point from three (x, y) pairs:
/// left handle, anchor, right handle
#[macro_export]
macro_rules! cp {
    ([$left:expr, $pos:expr, $right:expr]) => {{
        $crate::data::ControlPoint::new(
            $crate::pt!($left.0, $left.1),
            $crate::pt!($pos.0, $pos.1),
            $crate::pt!($right.0, $right.1),
        )
    }};
}

/// Macro for creating a spline from control points
#[macro_export]
macro_rules! spline {
    // Create from a list of control points
    ([$($cp:expr),* $(,)?]) => {{
        let points = vec![$($cp),*];
        $crate::data::Spline::new(points)
    }};

    // Create from an existing vector of control points
    ($points:expr) => {
        $crate::data::Spline::new($points)
    };
}

/// Macro for creating a curve from splines
#[macro_export]
macro_rules! curve {
    // Create from a list of splines
    ([$($spline:expr),* $(,)?]) => {{
        let splines = vec![$($spline),*];
        $crate::data::Curve::new(splines)
    }};

    // Create from an existing vector of splines
    ($splines:expr) => {
        $crate::data::Curve::new($splines)
    };
}

/// Macro for creating a curve from a single spline
#[macro_export]
macro_rules! curve_from {
    ($spline:expr) => {
        $crate::data::Curve::new(vec![$spline])
    };
}
