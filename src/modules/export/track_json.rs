//! Track JSON export
//!
//! This module locates every curve object whose name starts with `track`,
//! reads the control points of each object's first spline, and writes the
//! collected paths as a nested JSON document.
//!
//! # Features
//!
//! - Collect one object's control points by name
//! - Collect all track objects into a [`TrackDocument`]
//! - Serialize a document to compact JSON text or straight to a file
//!
//! # Examples
//!
//! ## Collecting track paths from a scene
//!
//! ```rust
//! use track_export::modules::export::track_json::collect_tracks;
//! use track_export::{cp, curve_from, spline, MemoryScene, SceneObject};
//!
//! let mut scene = MemoryScene::new();
//! scene.add(SceneObject::curve_object(
//!     "track0",
//!     curve_from!(spline!([
//!         cp!([(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]),
//!         cp!([(3.0, 3.0), (4.0, 4.0), (5.0, 5.0)])
//!     ])),
//! ));
//! scene.add(SceneObject::plain("camera"));
//!
//! let document = collect_tracks(&scene).unwrap();
//!
//! assert_eq!(document.len(), 1);
//! assert_eq!(document.paths[0].len(), 2);
//! ```
//!
//! ## Rendering the export format
//!
//! ```rust
//! use track_export::modules::export::track_json::{collect_tracks, ToTrackJson};
//! use track_export::{cp, curve_from, spline, MemoryScene, SceneObject};
//!
//! let mut scene = MemoryScene::new();
//! scene.add(SceneObject::curve_object(
//!     "track0",
//!     curve_from!(spline!([cp!([(0.0, 1.0), (2.0, 3.0), (4.0, 5.0)])])),
//! ));
//!
//! let json = collect_tracks(&scene).unwrap().to_track_json().unwrap();
//!
//! assert_eq!(
//!     json,
//!     r#"[[{"left":[0.0,1.0],"pos":[2.0,3.0],"right":[4.0,5.0]}]]"#
//! );
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};

use crate::constants::TRACK_PREFIX;
use crate::data::control_point::ControlPoint;
use crate::data::document::TrackDocument;
use crate::data::scene::SceneSource;
use crate::error::{TrackError, TrackResult};

/// Trait for types that can be rendered as track JSON text
pub trait ToTrackJson {
    /// Convert to compact track JSON text
    fn to_track_json(&self) -> TrackResult<String>;
}

impl ToTrackJson for TrackDocument {
    fn to_track_json(&self) -> TrackResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Control points of the named object's first spline, in spline order.
///
/// The lookup is a linear scan over the scene's enumeration order, so a
/// duplicated name resolves to the first object carrying it.
pub fn collect_control_points(
    scene: &dyn SceneSource,
    name: &str,
) -> TrackResult<Vec<ControlPoint>> {
    let object = scene
        .find_object(name)
        .ok_or_else(|| TrackError::ObjectNotFound(name.to_string()))?;
    let curve = object
        .curve
        .as_ref()
        .ok_or_else(|| TrackError::NoCurveData(name.to_string()))?;
    let spline = curve
        .first_spline()
        .ok_or_else(|| TrackError::NoSplines(name.to_string()))?;

    Ok(spline.points.clone())
}

/// Collect every object whose name starts with `track`, in scene order.
///
/// A scene without track objects yields an empty document. A matched
/// object that lacks curve data or splines fails the whole collection;
/// a first spline with zero control points is just an empty path.
pub fn collect_tracks(scene: &dyn SceneSource) -> TrackResult<TrackDocument> {
    let mut paths = Vec::new();
    for object in scene.objects() {
        if !object.name.starts_with(TRACK_PREFIX) {
            continue;
        }
        debug!("collecting control points from `{}`", object.name);
        paths.push(collect_control_points(scene, &object.name)?);
    }

    Ok(TrackDocument::new(paths))
}

/// Export every track object's first spline to `output_path` as JSON.
///
/// The file is created or truncated. The handle is scoped to this call,
/// so it closes on every exit path, including serialization failure.
pub fn export_tracks(
    scene: &dyn SceneSource,
    output_path: impl AsRef<Path>,
) -> TrackResult<()> {
    let output_path = output_path.as_ref();
    let document = collect_tracks(scene)?;
    info!(
        "exporting {} track path(s) to {}",
        document.len(),
        output_path.display()
    );

    let mut writer = BufWriter::new(File::create(output_path)?);
    serde_json::to_writer(&mut writer, &document)?;
    writer.flush()?;

    Ok(())
}
