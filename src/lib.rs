//! Decoder and path reconstruction for RBM vector drawings
//!
//! RBM is a sectioned binary CAD format: a magic/version header followed
//! by length-prefixed sections holding a transformation matrix, a clip
//! mask, a layer table, a texture blob, and the vertex geometry (colored,
//! layer-tagged segments, triangles, and quadrilaterals). This crate
//! decodes the container into a plain in-memory model, stitches the
//! unordered segment soup back into continuous drawing paths, merges
//! exactly-collinear runs, and serializes the result as viewer JSON or
//! SVG.
//!
//! ```ignore
//! let mut document = rbm_convert::RbmDocument::open("drawing.rbm")?;
//! let segments = std::mem::take(&mut document.vertices.segments);
//! let mut drawing = rbm_convert::Drawing::from_segments(segments);
//! drawing.simplify();
//! let json = rbm_convert::export::drawing_to_json(&drawing)?;
//! ```

pub mod decode;
pub mod error;
pub mod export;
pub mod geometry;
pub mod reconstruct;

pub use decode::{LayerUsage, RbmDocument};
pub use error::DecodeError;
pub use geometry::{
    Color, Header, Layer, Mask, Point, Quadrilateral, Segment, Texture, Transformation, Triangle,
    VertexSet,
};
pub use reconstruct::{Drawing, Path};
