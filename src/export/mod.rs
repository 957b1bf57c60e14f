//! Consumer-facing output formats
//!
//! # Submodules
//! - `json` - viewer JSON with raw stored colors
//! - `svg` - fixed-canvas SVG rendering with display color rules

mod json;
mod svg;

pub use json::{drawing_to_json, drawing_to_json_file, DrawingJson, SegmentJson};
pub use svg::{drawing_to_svg, drawing_to_svg_file};
