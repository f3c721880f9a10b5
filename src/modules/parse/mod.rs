//! Parsing module for track paths
//!
//! Now supported format:
//! - Track JSON:
//!     in the form of `[[{"left": [x, y], "pos": [x, y], "right": [x, y]}, ...], ...]`,
//!     the document written by the exporter and read back by downstream tooling.
//!     See the `track_json` module for more detailed information on the format.

pub mod track_json;
