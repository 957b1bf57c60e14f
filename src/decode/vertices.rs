//! Vertex geometry section parser (type 20)
//!
//! Record layout is gated by state decoded earlier in the file: layer
//! membership bytes exist only when the layer table declared more than one
//! layer, and color bytes only when the header is not monochrome. Both
//! gates arrive as parameters, which keeps this a pure function of
//! `(payload, monochrome, layer_count)`.

use crate::decode::cursor::Cursor;
use crate::error::Result;
use crate::geometry::{Color, Point, Quadrilateral, Segment, Triangle, VertexSet};

pub(crate) fn parse_vertices(
    payload: &[u8],
    monochrome: bool,
    layer_count: usize,
) -> Result<VertexSet> {
    let mut cursor = Cursor::new(payload);
    let mut set = VertexSet {
        segment_count: cursor.read_u32_le()?,
        triangle_count: cursor.read_u32_le()?,
        quadrilateral_count: cursor.read_u32_le()?,
        ..VertexSet::default()
    };

    // The declared counts are raw file data, so the vectors are not
    // pre-sized from them.
    for _ in 0..set.segment_count {
        let (layers, color) = read_attributes(&mut cursor, monochrome, layer_count)?;
        set.segments.push(Segment {
            layers,
            color,
            origin: read_point(&mut cursor)?,
            texture_origin: read_point(&mut cursor)?,
            end: read_point(&mut cursor)?,
            texture_end: read_point(&mut cursor)?,
        });
    }
    for _ in 0..set.triangle_count {
        let (layers, color) = read_attributes(&mut cursor, monochrome, layer_count)?;
        set.triangles.push(Triangle {
            layers,
            color,
            a: read_point(&mut cursor)?,
            b: read_point(&mut cursor)?,
            c: read_point(&mut cursor)?,
        });
    }
    for _ in 0..set.quadrilateral_count {
        let (layers, color) = read_attributes(&mut cursor, monochrome, layer_count)?;
        let points = [
            read_point(&mut cursor)?,
            read_point(&mut cursor)?,
            read_point(&mut cursor)?,
            read_point(&mut cursor)?,
        ];
        set.quadrilaterals.push(Quadrilateral { layers, color, points });
    }
    Ok(set)
}

/// Shared record prefix: optional layer membership list, then an optional
/// color in blue, green, red, alpha byte order.
fn read_attributes(
    cursor: &mut Cursor<'_>,
    monochrome: bool,
    layer_count: usize,
) -> Result<(Vec<u8>, Color)> {
    let mut layers = Vec::new();
    if layer_count > 1 {
        let member_count = cursor.read_u8()?;
        for _ in 0..member_count {
            layers.push(cursor.read_u8()?);
        }
    }
    let color = if monochrome {
        Color::default()
    } else {
        let blue = cursor.read_u8()?;
        let green = cursor.read_u8()?;
        let red = cursor.read_u8()?;
        let alpha = cursor.read_u8()?;
        Color { alpha, red, green, blue }
    };
    Ok((layers, color))
}

/// Two little-endian f32 values widened to the model's f64 coordinates.
fn read_point(cursor: &mut Cursor<'_>) -> Result<Point> {
    let x = f64::from(cursor.read_f32_le()?);
    let y = f64::from(cursor.read_f32_le()?);
    Ok(Point { x, y })
}
