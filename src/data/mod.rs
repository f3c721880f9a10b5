//! Core data model: points, control points, splines, curves, and scenes.

pub mod control_point;
pub mod curve;
pub mod document;
pub mod macros;
pub mod point;
pub mod scene;
pub mod spline;

pub use control_point::ControlPoint;
pub use curve::Curve;
pub use document::TrackDocument;
pub use point::Point;
pub use scene::{MemoryScene, SceneObject, SceneSource};
pub use spline::Spline;
