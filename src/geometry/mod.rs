//! Geometry module - the decoded drawing model
//!
//! # Submodules
//! - `types` - points, colors, layers, and the vertex primitives

mod types;

pub use types::{
    Color, Header, Layer, Mask, Point, Quadrilateral, Segment, Texture, Transformation, Triangle,
    VertexSet,
};
