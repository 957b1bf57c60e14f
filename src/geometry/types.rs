//! Core value types for decoded RBM drawings
//!
//! This module contains the plain data the decoder fills in: points,
//! colors, the layer table, the clip mask, and the vertex primitives
//! (segments, triangles, quadrilaterals).

use serde::Serialize;

/// A 2D point
///
/// Coordinates compare by exact equality; path stitching relies on files
/// encoding shared endpoints with bit-identical values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// An ARGB color, one byte per channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    /// Lowercase `#rrggbb` form; alpha is carried in the model but not here
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// RGB triple used as the join key when stitching paths
    pub fn rgb(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

/// Optional flags from the header section
#[derive(Debug, Clone, Copy, Default)]
pub struct Header {
    /// Only files newer than version 1 carry the flag; `Some(true)` means
    /// vertex records have no color bytes.
    pub monochrome: Option<bool>,
}

/// Raw transformation matrix payload, stored verbatim and never interpreted
#[derive(Debug, Clone, Default)]
pub struct Transformation {
    pub matrix: Vec<u8>,
}

/// Clip polygon for the drawing
#[derive(Debug, Clone, Default)]
pub struct Mask {
    pub points: Vec<Point>,
}

/// One entry of the layer table
///
/// The three counts are what the file declares per layer; actual
/// membership comes from the vertex records themselves.
#[derive(Debug, Clone)]
pub struct Layer {
    pub index: u32,  // 0-based, in decode order
    pub name: String,
    pub segment_count: u32,
    pub triangle_count: u32,
    pub quadrilateral_count: u32,
}

/// Raw texture payload, stored verbatim and never decoded
#[derive(Debug, Clone, Default)]
pub struct Texture {
    pub data: Vec<u8>,
}

/// One drawable line with its texture-space companion points
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Segment {
    /// Layer indices this segment belongs to; empty when the file declares
    /// at most one layer.
    pub layers: Vec<u8>,
    pub color: Color,
    pub origin: Point,
    pub texture_origin: Point,
    pub end: Point,
    pub texture_end: Point,
}

/// A filled triangle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Triangle {
    pub layers: Vec<u8>,
    pub color: Color,
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

/// A four-cornered primitive, corners in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Quadrilateral {
    pub layers: Vec<u8>,
    pub color: Color,
    pub points: [Point; 4],
}

/// Vertex collections from the geometry section
#[derive(Debug, Clone, Default)]
pub struct VertexSet {
    /// Declared counts as read from the section header triple.
    pub segment_count: u32,
    pub triangle_count: u32,
    pub quadrilateral_count: u32,
    /// Primitives in file order, the order path reconstruction depends on.
    pub segments: Vec<Segment>,
    pub triangles: Vec<Triangle>,
    pub quadrilaterals: Vec<Quadrilateral>,
}
