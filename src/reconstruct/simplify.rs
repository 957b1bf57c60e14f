//! Collinear run merging
//!
//! Reconstructed paths often carry runs of short segments that continue in
//! exactly the same direction, and drawing them as one longer segment
//! loses nothing. The pass walks adjacent pairs and merges while the pair
//! stays collinear, re-testing the widened segment before moving on, so a
//! single pass reaches a fixed point.

use crate::geometry::Segment;

/// Merge runs of exactly-collinear adjacent segments in place.
///
/// On a merge the first segment's drawn `end` moves; its texture points
/// stay untouched.
pub(crate) fn merge_collinear(segments: &mut Vec<Segment>) {
    let mut i = 0;
    while i + 1 < segments.len() {
        if collinear(&segments[i], &segments[i + 1]) {
            segments[i].end = segments[i + 1].end;
            segments.remove(i + 1);
            // Stay on i: the widened segment may absorb the next one too.
        } else {
            i += 1;
        }
    }
}

/// Whether `second` continues `first` in exactly the same direction.
///
/// Compares the direction from `first.origin` to `first.end` against the
/// direction from `first.origin` to `second.end` with an exact cross
/// product, which keeps vertical runs well-defined. A zero-length
/// difference vector on either side never counts as collinear.
fn collinear(first: &Segment, second: &Segment) -> bool {
    let dx1 = first.end.x - first.origin.x;
    let dy1 = first.end.y - first.origin.y;
    let dx2 = second.end.x - first.origin.x;
    let dy2 = second.end.y - first.origin.y;
    if (dx1 == 0.0 && dy1 == 0.0) || (dx2 == 0.0 && dy2 == 0.0) {
        return false;
    }
    dy1 * dx2 == dy2 * dx1
}
