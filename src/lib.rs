// Module definitions
pub mod constants;
pub mod data;
pub mod error;
pub mod modules;

// export the core data structure at crate level
pub use data::control_point::ControlPoint;
pub use data::curve::Curve;
pub use data::document::TrackDocument;
pub use data::point::Point;
pub use data::scene::{MemoryScene, SceneObject, SceneSource};
pub use data::spline::Spline;
pub use error::{TrackError, TrackResult};
