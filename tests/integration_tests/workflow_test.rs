use approx::assert_relative_eq;
use tempfile::tempdir;
use track_export::modules::export::track_json::{
    collect_tracks, export_tracks, ToTrackJson,
};
use track_export::modules::parse::track_json::read_track_file;
use track_export::{cp, curve_from, spline, MemoryScene, SceneObject};

// A scene the way the authoring host would hold it: track curves mixed
// with scenery that must never reach the export.
fn authoring_scene() -> MemoryScene {
    let mut scene = MemoryScene::new();
    scene
        .add(SceneObject::plain("camera"))
        .add(SceneObject::curve_object(
            "track0",
            curve_from!(spline!([
                cp!([(50.0, 200.0), (100.0, 50.0), (200.0, 50.0)]),
                cp!([(250.0, 200.0), (300.0, 350.0), (350.0, 500.0)]),
                cp!([(400.0, 500.0), (450.0, 350.0), (500.0, 200.0)]),
            ])),
        ))
        .add(SceneObject::curve_object(
            "other_shape",
            curve_from!(spline!([cp!([(9.0, 9.0), (9.0, 9.0), (9.0, 9.0)])])),
        ))
        .add(SceneObject::curve_object(
            "track1",
            curve_from!(spline!([cp!([
                (0.0, 0.0),
                (10.0, 10.0),
                (20.0, 20.0)
            ])])),
        ));
    scene
}

#[test]
fn test_complete_workflow() {
    let scene = authoring_scene();
    let dir = tempdir().unwrap();
    let output_path = dir.path().join("track.json");

    // Export the scene to disk
    export_tracks(&scene, &output_path).unwrap();

    // Read the file back through the parse module
    let document = read_track_file(&output_path).unwrap();

    // Two track objects, in scene order, with their spline point counts
    assert_eq!(document.len(), 2);
    assert_eq!(document.paths[0].len(), 3);
    assert_eq!(document.paths[1].len(), 1);

    // The parsed document matches what collection produces in memory
    assert_eq!(document, collect_tracks(&scene).unwrap());

    // Spot-check coordinates survived the trip
    assert_relative_eq!(document.paths[0][1].pos.x, 300.0);
    assert_relative_eq!(document.paths[0][1].pos.y, 350.0);
    assert_relative_eq!(document.paths[1][0].left.x, 0.0);
}

#[test]
fn test_empty_scene_exports_empty_document() {
    let mut scene = MemoryScene::new();
    scene
        .add(SceneObject::plain("camera"))
        .add(SceneObject::plain("other_shape"));

    let dir = tempdir().unwrap();
    let output_path = dir.path().join("track.json");
    export_tracks(&scene, &output_path).unwrap();

    assert_eq!(std::fs::read_to_string(&output_path).unwrap(), "[]");
}

#[test]
fn test_export_overwrites_previous_content() {
    let dir = tempdir().unwrap();
    let output_path = dir.path().join("track.json");

    // Stale content longer than the new export
    std::fs::write(&output_path, "x".repeat(4096)).unwrap();

    export_tracks(&MemoryScene::new(), &output_path).unwrap();
    assert_eq!(std::fs::read_to_string(&output_path).unwrap(), "[]");
}

#[test]
fn test_export_is_byte_idempotent() {
    let scene = authoring_scene();
    let dir = tempdir().unwrap();
    let output_path = dir.path().join("track.json");

    export_tracks(&scene, &output_path).unwrap();
    let first = std::fs::read(&output_path).unwrap();

    export_tracks(&scene, &output_path).unwrap();
    let second = std::fs::read(&output_path).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        String::from_utf8(first).unwrap(),
        collect_tracks(&scene).unwrap().to_track_json().unwrap()
    );
}
