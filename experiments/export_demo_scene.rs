// build the demo scene used for manual testing and export it to ./track.json

// the scene mirrors what the authoring host would hold: a couple of track
// curves plus scenery objects that must never end up in the export

use log::info;
use track_export::modules::export::track_json::export_tracks;
use track_export::{cp, curve_from, spline, MemoryScene, SceneObject};

const OUTPUT_PATH: &str = track_export::constants::DEFAULT_OUTPUT_PATH;

// a rounded loop, roughly the oval from the original authoring file
fn loop_track() -> SceneObject {
    SceneObject::curve_object(
        "track0",
        curve_from!(spline!([
            cp!([(-60.0, 20.0), (-40.0, 0.0), (-20.0, -20.0)]),
            cp!([(-20.0, -40.0), (0.0, -40.0), (20.0, -40.0)]),
            cp!([(20.0, -20.0), (40.0, 0.0), (60.0, 20.0)]),
            cp!([(20.0, 40.0), (0.0, 40.0), (-20.0, 40.0)]),
        ])),
    )
}

// a short siding that branches off the loop
fn siding_track() -> SceneObject {
    SceneObject::curve_object(
        "track1",
        curve_from!(spline!([
            cp!([(40.0, 0.0), (60.0, 20.0), (80.0, 40.0)]),
            cp!([(80.0, 60.0), (100.0, 60.0), (120.0, 60.0)]),
        ])),
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut scene = MemoryScene::new();
    scene
        .add(loop_track())
        .add(siding_track())
        .add(SceneObject::plain("camera"))
        .add(SceneObject::plain("sun"))
        .add(SceneObject::plain("other_shape"));

    export_tracks(&scene, OUTPUT_PATH)?;
    info!("wrote {}", OUTPUT_PATH);

    Ok(())
}
