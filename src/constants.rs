//! Crate-wide constants.

/// Name prefix marking a scene object as an exportable track.
pub const TRACK_PREFIX: &str = "track";

/// Default output path, resolved against the current working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "./track.json";

/// Number of axes kept per coordinate; a third (depth) axis is dropped.
pub const EXPORT_AXES: usize = 2;
