//! Export track paths from a scene to external formats
//!
//! This module provides functionality to pull track curves out of a scene
//! and write them in formats consumed by downstream tools.
//!
//! # Available Export Formats
//!
//! - [Track JSON](track_json/index.html) - the nested control-point document
//!   read by the path-following game

pub mod track_json;
