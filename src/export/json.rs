//! JSON description of a reconstructed drawing
//!
//! The shape is what the downstream viewer loads: a `paths` array of
//! segment arrays and a flat `lines` array, each segment flattened to its
//! drawn endpoints and `#rrggbb` color. Colors here are the stored values;
//! the white-to-black remap is a rendering concern and never touches this
//! output.

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::Context;
use serde::Serialize;

use crate::geometry::{Point, Segment};
use crate::reconstruct::Drawing;

/// One drawn segment: origin, end, hex color.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentJson {
    #[serde(rename = "o")]
    pub origin: Point,
    #[serde(rename = "e")]
    pub end: Point,
    #[serde(rename = "c")]
    pub color: String,
}

impl From<&Segment> for SegmentJson {
    fn from(segment: &Segment) -> Self {
        Self {
            origin: segment.origin,
            end: segment.end,
            color: segment.color.hex(),
        }
    }
}

/// Root record holding every reconstructed path and left-over line.
#[derive(Debug, Clone, Serialize)]
pub struct DrawingJson {
    pub paths: Vec<Vec<SegmentJson>>,
    pub lines: Vec<SegmentJson>,
}

impl From<&Drawing> for DrawingJson {
    fn from(drawing: &Drawing) -> Self {
        Self {
            paths: drawing
                .paths
                .iter()
                .map(|path| path.segments.iter().map(SegmentJson::from).collect())
                .collect(),
            lines: drawing.lines.iter().map(SegmentJson::from).collect(),
        }
    }
}

/// Serialize the drawing to a compact JSON string.
pub fn drawing_to_json(drawing: &Drawing) -> anyhow::Result<String> {
    serde_json::to_string(&DrawingJson::from(drawing))
        .context("failed to serialize drawing to JSON")
}

/// Write the drawing as JSON to the file at `path`.
pub fn drawing_to_json_file<P: AsRef<std::path::Path>>(
    drawing: &Drawing,
    path: P,
) -> anyhow::Result<()> {
    let file = File::create(&path)
        .with_context(|| format!("failed to create {}", path.as_ref().display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &DrawingJson::from(drawing))
        .context("failed to serialize drawing to JSON")?;
    writer.flush().context("failed to flush JSON output")?;
    Ok(())
}
