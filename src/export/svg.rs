//! SVG rendering of a reconstructed drawing
//!
//! Fixed 1196x842 canvas with one `<line>` per drawn segment: every
//! left-over line, every segment of every path, and each triangle as its
//! three edges. Monochrome documents draw everything black; otherwise the
//! stroke is the stored hex color, with pure white remapped to black at
//! this boundary so strokes stay visible on the white canvas.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::Context;

use crate::decode::RbmDocument;
use crate::geometry::{Color, Point};
use crate::reconstruct::Drawing;

/// Canvas size shared with the downstream viewer.
const CANVAS_WIDTH: u32 = 1196;
const CANVAS_HEIGHT: u32 = 842;
const STROKE_WIDTH: f64 = 0.1;

/// Renders the drawing to an SVG string
pub fn drawing_to_svg(document: &RbmDocument, drawing: &Drawing) -> String {
    let mut buffer = Vec::with_capacity(1024);
    write_svg(&mut buffer, document, drawing).expect("serialization failed");
    String::from_utf8(buffer).expect("serialized SVG was not valid UTF-8")
}

/// Renders the drawing to an SVG file on disk
///
/// # Arguments
/// * `document` - The decoded document (for the monochrome flag and triangles)
/// * `drawing` - The reconstructed paths and lines
/// * `path` - Path where the SVG file will be written
pub fn drawing_to_svg_file<P: AsRef<std::path::Path>>(
    document: &RbmDocument,
    drawing: &Drawing,
    path: P,
) -> anyhow::Result<()> {
    let file = File::create(&path)
        .with_context(|| format!("Failed to create {}", path.as_ref().display()))?;
    let mut writer = BufWriter::new(file);
    write_svg(&mut writer, document, drawing).context("Failed to serialize SVG")?;
    writer.flush().context("Failed to flush SVG writer")?;
    Ok(())
}

fn write_svg<W: Write>(
    writer: &mut W,
    document: &RbmDocument,
    drawing: &Drawing,
) -> io::Result<()> {
    writeln!(writer, "<?xml version=\"1.0\"?>")?;
    writeln!(
        writer,
        "<svg width=\"{CANVAS_WIDTH}\" height=\"{CANVAS_HEIGHT}\" xmlns=\"http://www.w3.org/2000/svg\">"
    )?;
    let monochrome = document.is_monochrome();
    for segment in &drawing.lines {
        let stroke = stroke_color(segment.color, monochrome);
        write_line(writer, segment.origin, segment.end, &stroke)?;
    }
    for path in &drawing.paths {
        for segment in &path.segments {
            let stroke = stroke_color(segment.color, monochrome);
            write_line(writer, segment.origin, segment.end, &stroke)?;
        }
    }
    for triangle in &document.vertices.triangles {
        let stroke = stroke_color(triangle.color, monochrome);
        write_line(writer, triangle.a, triangle.b, &stroke)?;
        write_line(writer, triangle.b, triangle.c, &stroke)?;
        write_line(writer, triangle.c, triangle.a, &stroke)?;
    }
    writeln!(writer, "</svg>")?;
    Ok(())
}

fn write_line<W: Write>(writer: &mut W, from: Point, to: Point, stroke: &str) -> io::Result<()> {
    writeln!(
        writer,
        "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
        from.x, from.y, to.x, to.y, stroke, STROKE_WIDTH
    )
}

/// Stroke for one primitive under the document's color mode.
fn stroke_color(color: Color, monochrome: bool) -> String {
    if monochrome {
        return "black".to_string();
    }
    let hex = color.hex();
    if hex == "#ffffff" {
        "#000000".to_string()
    } else {
        hex
    }
}
