//! RBM container decoding
//!
//! An RBM file is a six-byte header (`RBM\0` magic, version byte, reserved
//! zero byte) followed by length-prefixed sections until end of buffer.
//! The decoder validates the header, then walks the sections in file order
//! and fills an [`RbmDocument`]. Order matters to the content: the vertex
//! geometry section is shaped by the monochrome flag and the layer count
//! decoded before it, and the decoder applies whatever state has
//! accumulated by the time the vertex section shows up.
//!
//! # Submodules
//! - `cursor` - bounds-checked endian-aware reads
//! - `sections` - payload parsers for the small fixed sections
//! - `vertices` - payload parser for the geometry section

mod cursor;
mod sections;
mod vertices;

pub use cursor::Cursor;

use std::fs;

use anyhow::Context;
use indexmap::IndexMap;

use crate::error::{DecodeError, Result};
use crate::geometry::{Header, Layer, Mask, Texture, Transformation, VertexSet};

/// Byte length of the fixed file header (magic, version, reserved).
const FILE_HEADER_LEN: usize = 6;
/// The `RBM\0` magic as a big-endian u32.
const RBM_MAGIC: u32 = 0x5242_4D00;

const SECTION_HEADER_FLAGS: u16 = 0;
const SECTION_TRANSFORMATION: u16 = 10;
const SECTION_MASK: u16 = 11;
const SECTION_LAYER_TABLE: u16 = 12;
const SECTION_TEXTURE: u16 = 13;
const SECTION_VERTICES: u16 = 20;

/// A fully decoded RBM drawing.
#[derive(Debug, Clone, Default)]
pub struct RbmDocument {
    pub version: u8,
    pub header: Header,
    pub transformation: Transformation,
    pub mask: Mask,
    pub layers: Vec<Layer>,
    pub texture: Texture,
    pub vertices: VertexSet,
}

/// Per-layer primitive counts computed from actual vertex membership.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayerUsage {
    pub segments: usize,
    pub triangles: usize,
    pub quadrilaterals: usize,
}

impl RbmDocument {
    /// Read the file at `path` and decode it.
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let bytes = fs::read(&path)
            .with_context(|| format!("failed to read {}", path.as_ref().display()))?;
        let document = Self::decode(&bytes)
            .with_context(|| format!("failed to decode {}", path.as_ref().display()))?;
        Ok(document)
    }

    /// Decode a whole RBM buffer.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < FILE_HEADER_LEN {
            return Err(DecodeError::InvalidHeader {
                detail: format!(
                    "file is {} bytes, the fixed header needs {}",
                    bytes.len(),
                    FILE_HEADER_LEN
                ),
            });
        }
        let mut reader = Cursor::new(bytes);
        let magic = reader.read_u32_be()?;
        if magic != RBM_MAGIC {
            return Err(DecodeError::InvalidMagic { found: magic });
        }
        let version = reader.read_u8()?;
        let reserved = reader.read_u8()?;
        if reserved != 0 {
            return Err(DecodeError::InvalidHeader {
                detail: format!("reserved byte is {reserved:#04x}, must be zero"),
            });
        }

        log::debug!(
            "decoding RBM version {version}, {} section bytes",
            reader.remaining()
        );
        let mut document = RbmDocument { version, ..Self::default() };
        while !reader.is_at_end() {
            let offset = reader.position();
            let kind = reader.read_u16_le()?;
            let declared = reader.read_u32_le()? as usize;
            let remaining = reader.remaining();
            let payload = reader.read_slice(declared).map_err(|_| {
                DecodeError::TruncatedSection { kind, offset, declared, remaining }
            })?;
            document.apply_section(kind, payload)?;
        }
        Ok(document)
    }

    fn apply_section(&mut self, kind: u16, payload: &[u8]) -> Result<()> {
        log::debug!("section type {kind}, {} payload bytes", payload.len());
        match kind {
            SECTION_HEADER_FLAGS => {
                if let Some(monochrome) = sections::parse_header_flags(payload, self.version)? {
                    self.header.monochrome = Some(monochrome);
                }
            }
            SECTION_TRANSFORMATION => self.transformation.matrix = payload.to_vec(),
            SECTION_MASK => self.mask.points.extend(sections::parse_mask(payload)?),
            SECTION_LAYER_TABLE => {
                let first_index = self.layers.len() as u32;
                self.layers.extend(sections::parse_layers(payload, first_index)?);
            }
            SECTION_TEXTURE => self.texture.data = payload.to_vec(),
            SECTION_VERTICES => {
                let parsed =
                    vertices::parse_vertices(payload, self.is_monochrome(), self.layers.len())?;
                self.vertices.segment_count = parsed.segment_count;
                self.vertices.triangle_count = parsed.triangle_count;
                self.vertices.quadrilateral_count = parsed.quadrilateral_count;
                self.vertices.segments.extend(parsed.segments);
                self.vertices.triangles.extend(parsed.triangles);
                self.vertices.quadrilaterals.extend(parsed.quadrilaterals);
            }
            _ => log::warn!("skipping unknown section type {kind} ({} bytes)", payload.len()),
        }
        Ok(())
    }

    /// Monochrome flag with the unset default applied.
    pub fn is_monochrome(&self) -> bool {
        self.header.monochrome.unwrap_or(false)
    }

    /// Primitive counts per layer name, in layer decode order.
    ///
    /// Single-layer files carry no membership bytes, so a sole layer owns
    /// every primitive. Membership indices pointing past the layer table
    /// are ignored.
    pub fn layer_usage(&self) -> IndexMap<String, LayerUsage> {
        let mut usage: IndexMap<String, LayerUsage> = self
            .layers
            .iter()
            .map(|layer| (layer.name.clone(), LayerUsage::default()))
            .collect();
        if self.layers.len() == 1 {
            if let Some((_, only)) = usage.get_index_mut(0) {
                only.segments = self.vertices.segments.len();
                only.triangles = self.vertices.triangles.len();
                only.quadrilaterals = self.vertices.quadrilaterals.len();
            }
            return usage;
        }
        for segment in &self.vertices.segments {
            for &member in &segment.layers {
                if let Some(layer) = self.layers.get(member as usize) {
                    if let Some(entry) = usage.get_mut(&layer.name) {
                        entry.segments += 1;
                    }
                }
            }
        }
        for triangle in &self.vertices.triangles {
            for &member in &triangle.layers {
                if let Some(layer) = self.layers.get(member as usize) {
                    if let Some(entry) = usage.get_mut(&layer.name) {
                        entry.triangles += 1;
                    }
                }
            }
        }
        for quadrilateral in &self.vertices.quadrilaterals {
            for &member in &quadrilateral.layers {
                if let Some(layer) = self.layers.get(member as usize) {
                    if let Some(entry) = usage.get_mut(&layer.name) {
                        entry.quadrilaterals += 1;
                    }
                }
            }
        }
        usage
    }
}
