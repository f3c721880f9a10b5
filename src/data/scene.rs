//! Read-only scene abstraction over the host application's object graph.
//!
//! The exporter never talks to a live host directly; it consumes any
//! [`SceneSource`], which lets tests and library callers substitute an
//! in-memory scene for the real one.

use crate::data::curve::Curve;

/// A named object in the host scene
///
/// Non-curve objects (lights, cameras, meshes) carry no curve data.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub curve: Option<Curve>,
}

impl SceneObject {
    /// Create an object with optional curve data
    pub fn new(name: impl Into<String>, curve: Option<Curve>) -> Self {
        Self {
            name: name.into(),
            curve,
        }
    }

    /// Create a curve object
    pub fn curve_object(name: impl Into<String>, curve: Curve) -> Self {
        Self::new(name, Some(curve))
    }

    /// Create an object without curve data
    pub fn plain(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }
}

/// Read-only view of a scene.
///
/// Enumeration order is the host's iteration order and is meaningful:
/// exported paths keep it.
pub trait SceneSource {
    /// Enumerate all objects in host order
    fn objects(&self) -> Box<dyn Iterator<Item = &SceneObject> + '_>;

    /// The first object with the given name, scanning in enumeration
    /// order. Duplicate names resolve to the first match.
    fn find_object(&self, name: &str) -> Option<&SceneObject> {
        self.objects().find(|o| o.name == name)
    }
}

/// In-memory scene, ordered the way objects were added
#[derive(Debug, Clone, Default)]
pub struct MemoryScene {
    objects: Vec<SceneObject>,
}

impl MemoryScene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scene from a list of objects, preserving their order
    pub fn from_objects(objects: Vec<SceneObject>) -> Self {
        Self { objects }
    }

    /// Append an object at the end of the enumeration order
    pub fn add(&mut self, object: SceneObject) -> &mut Self {
        self.objects.push(object);
        self
    }
}

impl SceneSource for MemoryScene {
    fn objects(&self) -> Box<dyn Iterator<Item = &SceneObject> + '_> {
        Box::new(self.objects.iter())
    }
}
