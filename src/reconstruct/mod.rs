//! Path reconstruction over the decoded segment soup
//!
//! The geometry section stores segments in arbitrary order. Reconstruction
//! walks that order, seeds a path from each segment still unclaimed, and
//! grows it forward by exact endpoint equality: the next segment is the
//! first remaining one whose `origin` equals the path's current `end` and
//! whose RGB color matches the seed's. When forward growth stalls, a
//! previously finished path may be absorbed whole, either appended after
//! the grown path or prepended in front of it. A seed that joins nothing
//! stays a free-standing line.
//!
//! Every input segment ends up in exactly one place: one path or the
//! `lines` list. Nothing is dropped, invented, or reordered within a path.
//!
//! # Submodules
//! - `simplify` - collinear run merging inside reconstructed paths

mod simplify;

use crate::geometry::Segment;

/// A polyline stitched from same-colored, endpoint-contiguous segments.
///
/// Segments run end-to-end: each one's `end` equals the next one's
/// `origin`. Reconstruction only produces paths of two or more segments;
/// simplification may later merge a path down to a single one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub segments: Vec<Segment>,
}

/// The two disjoint outputs of reconstruction.
#[derive(Debug, Clone, Default)]
pub struct Drawing {
    pub paths: Vec<Path>,
    pub lines: Vec<Segment>,
}

impl Drawing {
    /// Stitch a decoded segment queue into paths and left-over lines.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        // Tombstoned queue: consumed entries become None instead of being
        // removed, so "first remaining match" keeps meaning file order.
        let mut pool: Vec<Option<Segment>> = segments.into_iter().map(Some).collect();
        let mut paths: Vec<Path> = Vec::new();
        let mut lines: Vec<Segment> = Vec::new();

        for seed_index in 0..pool.len() {
            let seed = match pool[seed_index].take() {
                Some(segment) => segment,
                None => continue,
            };
            let key = seed.color.rgb();
            let head_origin = seed.origin;
            let mut tail_end = seed.end;
            let mut grown = vec![seed];
            let mut joined = false;

            // Forward growth. Everything before seed_index is already
            // consumed, so the scan covers every live entry in file order.
            loop {
                let mut extended = false;
                for slot in pool.iter_mut().skip(seed_index + 1) {
                    let hit = match slot {
                        Some(candidate) => {
                            candidate.origin == tail_end && candidate.color.rgb() == key
                        }
                        None => false,
                    };
                    if hit {
                        if let Some(next) = slot.take() {
                            tail_end = next.end;
                            grown.push(next);
                            joined = true;
                            extended = true;
                        }
                        break;
                    }
                }
                if !extended {
                    break;
                }
            }

            // A finished path starting where this one ends is absorbed
            // whole; growth does not resume past the splice.
            let append_at = paths.iter().position(|path| {
                path.segments
                    .first()
                    .map_or(false, |first| first.origin == tail_end && first.color.rgb() == key)
            });
            if let Some(found) = append_at {
                let absorbed = paths.remove(found);
                grown.extend(absorbed.segments);
                joined = true;
            } else {
                // Failing that, a finished path ending where this one
                // starts goes in front of it.
                let prepend_at = paths.iter().position(|path| {
                    path.segments
                        .last()
                        .map_or(false, |last| last.end == head_origin && last.color.rgb() == key)
                });
                if let Some(found) = prepend_at {
                    let mut absorbed = paths.remove(found);
                    absorbed.segments.extend(grown);
                    grown = absorbed.segments;
                    joined = true;
                }
            }

            if joined {
                paths.push(Path { segments: grown });
            } else {
                lines.extend(grown);
            }
        }

        Drawing { paths, lines }
    }

    /// Merge collinear runs inside every path.
    ///
    /// Calling it again is a no-op; one call already reaches the fixed
    /// point.
    pub fn simplify(&mut self) {
        for path in &mut self.paths {
            simplify::merge_collinear(&mut path.segments);
        }
    }

    /// Total segments across paths and lines.
    pub fn segment_count(&self) -> usize {
        self.lines.len()
            + self.paths.iter().map(|path| path.segments.len()).sum::<usize>()
    }
}
