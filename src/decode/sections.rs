//! Payload parsers for the small fixed sections
//!
//! Each parser is a pure function of its payload bytes. Trailing payload
//! bytes beyond what a section's layout consumes are ignored; the section
//! length already fenced them off from the rest of the file.

use crate::decode::cursor::Cursor;
use crate::error::Result;
use crate::geometry::{Layer, Point};

/// Header-flag payload (type 0).
///
/// Only files newer than version 1 define the flag byte; for older
/// versions the payload is ignored entirely and `None` is returned.
pub(crate) fn parse_header_flags(payload: &[u8], version: u8) -> Result<Option<bool>> {
    if version <= 1 {
        return Ok(None);
    }
    let mut cursor = Cursor::new(payload);
    Ok(Some(cursor.read_u8()? != 0))
}

/// Mask payload (type 11): point count, then x/y pairs as f64.
pub(crate) fn parse_mask(payload: &[u8]) -> Result<Vec<Point>> {
    let mut cursor = Cursor::new(payload);
    let count = cursor.read_u16_le()?;
    let mut points = Vec::new();
    for _ in 0..count {
        let x = cursor.read_f64_le()?;
        let y = cursor.read_f64_le()?;
        points.push(Point { x, y });
    }
    Ok(points)
}

/// Layer-table payload (type 12): count byte, then per layer a
/// NUL-terminated name and three declared primitive counts.
///
/// A count byte of zero still means exactly one layer. `first_index`
/// keeps indices sequential when tables arrive in more than one section.
pub(crate) fn parse_layers(payload: &[u8], first_index: u32) -> Result<Vec<Layer>> {
    let mut cursor = Cursor::new(payload);
    let raw_count = cursor.read_u8()?;
    let count = if raw_count == 0 { 1 } else { u32::from(raw_count) };
    let mut layers = Vec::new();
    for n in 0..count {
        let name = cursor.read_cstr()?;
        let segment_count = cursor.read_u32_le()?;
        let triangle_count = cursor.read_u32_le()?;
        let quadrilateral_count = cursor.read_u32_le()?;
        layers.push(Layer {
            index: first_index + n,
            name,
            segment_count,
            triangle_count,
            quadrilateral_count,
        });
    }
    Ok(layers)
}
