// Path stitching and simplification over hand-built segment queues
use rbm_convert::{Color, Drawing, Point, Segment};

fn seg(origin: (f64, f64), end: (f64, f64), rgb: [u8; 3]) -> Segment {
    Segment {
        color: Color { alpha: 255, red: rgb[0], green: rgb[1], blue: rgb[2] },
        origin: Point { x: origin.0, y: origin.1 },
        end: Point { x: end.0, y: end.1 },
        ..Segment::default()
    }
}

const RED: [u8; 3] = [255, 0, 0];
const BLUE: [u8; 3] = [0, 0, 255];

/// Endpoint pairs of every segment in the drawing, for order-insensitive
/// comparison against the input queue.
fn endpoint_multiset(drawing: &Drawing) -> Vec<String> {
    let mut all: Vec<String> = drawing
        .lines
        .iter()
        .chain(drawing.paths.iter().flat_map(|p| p.segments.iter()))
        .map(|s| format!("{:?}->{:?}", s.origin, s.end))
        .collect();
    all.sort();
    all
}

#[test]
fn test_chain_joins_but_color_blocks() {
    let drawing = Drawing::from_segments(vec![
        seg((0.0, 0.0), (1.0, 1.0), RED),
        seg((1.0, 1.0), (2.0, 2.0), RED),
        seg((2.0, 2.0), (3.0, 3.0), BLUE),
    ]);
    assert_eq!(drawing.paths.len(), 1);
    assert_eq!(drawing.paths[0].segments.len(), 2);
    assert_eq!(drawing.paths[0].segments[1].end, Point { x: 2.0, y: 2.0 });
    assert_eq!(drawing.lines.len(), 1, "the blue segment must not join a red path");
    assert_eq!(drawing.lines[0].origin, Point { x: 2.0, y: 2.0 });
}

#[test]
fn test_first_match_in_file_order_wins() {
    let drawing = Drawing::from_segments(vec![
        seg((0.0, 0.0), (1.0, 1.0), RED),
        seg((1.0, 1.0), (2.0, 2.0), RED),
        seg((1.0, 1.0), (5.0, 5.0), RED),
    ]);
    assert_eq!(drawing.paths.len(), 1);
    assert_eq!(drawing.paths[0].segments[1].end, Point { x: 2.0, y: 2.0 });
    // The later candidate loses the join and stands alone.
    assert_eq!(drawing.lines.len(), 1);
    assert_eq!(drawing.lines[0].end, Point { x: 5.0, y: 5.0 });
}

#[test]
fn test_later_seed_absorbs_earlier_path() {
    // The path [B1, B2] finishes first; seeding A afterwards cannot grow
    // forward, but the finished path starts exactly where A ends and is
    // absorbed whole behind it.
    let drawing = Drawing::from_segments(vec![
        seg((1.0, 1.0), (2.0, 2.0), RED), // B1
        seg((2.0, 2.0), (3.0, 3.0), RED), // B2
        seg((0.0, 0.0), (1.0, 1.0), RED), // A
    ]);
    assert_eq!(drawing.paths.len(), 1);
    assert!(drawing.lines.is_empty());
    let origins: Vec<Point> = drawing.paths[0].segments.iter().map(|s| s.origin).collect();
    assert_eq!(
        origins,
        vec![
            Point { x: 0.0, y: 0.0 },
            Point { x: 1.0, y: 1.0 },
            Point { x: 2.0, y: 2.0 },
        ]
    );
}

#[test]
fn test_disjoint_segments_stay_lines_in_order() {
    let drawing = Drawing::from_segments(vec![
        seg((0.0, 0.0), (1.0, 0.0), RED),
        seg((5.0, 5.0), (6.0, 5.0), RED),
        seg((9.0, 9.0), (9.5, 9.0), BLUE),
    ]);
    assert!(drawing.paths.is_empty());
    assert_eq!(drawing.lines.len(), 3);
    assert_eq!(drawing.lines[1].origin, Point { x: 5.0, y: 5.0 });
}

#[test]
fn test_duplicate_segments_are_both_kept() {
    let drawing = Drawing::from_segments(vec![
        seg((0.0, 0.0), (1.0, 1.0), RED),
        seg((0.0, 0.0), (1.0, 1.0), RED),
    ]);
    assert!(drawing.paths.is_empty());
    assert_eq!(drawing.lines.len(), 2);
}

#[test]
fn test_closed_loop_stitches_into_one_path() {
    let drawing = Drawing::from_segments(vec![
        seg((0.0, 0.0), (1.0, 0.0), RED),
        seg((1.0, 0.0), (1.0, 1.0), RED),
        seg((1.0, 1.0), (0.0, 0.0), RED),
    ]);
    assert_eq!(drawing.paths.len(), 1);
    let path = &drawing.paths[0].segments;
    assert_eq!(path.len(), 3);
    assert_eq!(path[2].end, path[0].origin, "loop should close on the seed origin");
}

#[test]
fn test_interleaved_colors_build_separate_paths() {
    let drawing = Drawing::from_segments(vec![
        seg((0.0, 0.0), (1.0, 1.0), RED),
        seg((0.0, 0.0), (1.0, 1.0), BLUE),
        seg((1.0, 1.0), (2.0, 2.0), RED),
        seg((1.0, 1.0), (2.0, 2.0), BLUE),
    ]);
    assert_eq!(drawing.paths.len(), 2);
    assert_eq!(drawing.paths[0].segments[0].color.rgb(), RED);
    assert_eq!(drawing.paths[1].segments[0].color.rgb(), BLUE);
    assert!(drawing.lines.is_empty());
}

#[test]
fn test_every_input_segment_lands_exactly_once() {
    let input = vec![
        seg((0.0, 0.0), (1.0, 0.0), RED),
        seg((1.0, 0.0), (2.0, 0.0), RED),
        seg((2.0, 0.0), (2.0, 2.0), RED),
        seg((7.0, 7.0), (8.0, 8.0), BLUE),
        seg((0.0, 0.0), (1.0, 0.0), BLUE),
        seg((3.0, 3.0), (3.0, 4.0), RED),
        seg((2.0, 2.0), (3.0, 3.0), BLUE),
        seg((0.0, 5.0), (0.0, 6.0), RED),
    ];
    let expected: Vec<String> = {
        let mut keys: Vec<String> = input
            .iter()
            .map(|s| format!("{:?}->{:?}", s.origin, s.end))
            .collect();
        keys.sort();
        keys
    };
    let count = input.len();

    let mut drawing = Drawing::from_segments(input);
    assert_eq!(drawing.segment_count(), count);
    assert_eq!(endpoint_multiset(&drawing), expected);

    for path in &drawing.paths {
        assert!(path.segments.len() >= 2, "paths always hold at least two segments");
        for pair in path.segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].origin, "path segments must be contiguous");
            assert_eq!(pair[0].color.rgb(), pair[1].color.rgb());
        }
    }

    // Simplification may merge segments but never invents or drops endpoints
    // at the path level.
    drawing.simplify();
    assert!(drawing.segment_count() <= count);
    println!("✓ {} input segments accounted for across {} paths and {} lines",
        count, drawing.paths.len(), drawing.lines.len());
}

#[test]
fn test_simplify_collapses_runs_inside_paths() {
    let mut drawing = Drawing::from_segments(vec![
        seg((0.0, 0.0), (1.0, 1.0), RED),
        seg((1.0, 1.0), (2.0, 2.0), RED),
        seg((2.0, 2.0), (2.0, 5.0), RED),
    ]);
    assert_eq!(drawing.paths[0].segments.len(), 3);

    drawing.simplify();
    let path = &drawing.paths[0].segments;
    assert_eq!(path.len(), 2);
    assert_eq!(path[0].origin, Point { x: 0.0, y: 0.0 });
    assert_eq!(path[0].end, Point { x: 2.0, y: 2.0 });
    assert_eq!(path[1].end, Point { x: 2.0, y: 5.0 });
}

#[test]
fn test_simplify_can_reduce_a_path_to_one_segment() {
    let mut drawing = Drawing::from_segments(vec![
        seg((0.0, 0.0), (0.0, 1.0), RED),
        seg((0.0, 1.0), (0.0, 2.0), RED),
        seg((0.0, 2.0), (0.0, 9.0), RED),
    ]);
    drawing.simplify();
    assert_eq!(drawing.paths.len(), 1, "a fully merged path stays a path");
    assert_eq!(drawing.paths[0].segments.len(), 1);
    assert_eq!(drawing.paths[0].segments[0].end, Point { x: 0.0, y: 9.0 });
}

#[test]
fn test_simplify_is_idempotent() {
    let mut drawing = Drawing::from_segments(vec![
        seg((0.0, 0.0), (1.0, 0.0), RED),
        seg((1.0, 0.0), (2.0, 0.0), RED),
        seg((2.0, 0.0), (2.0, 3.0), RED),
        seg((2.0, 3.0), (5.0, 3.0), RED),
    ]);
    drawing.simplify();
    let once: Vec<usize> = drawing.paths.iter().map(|p| p.segments.len()).collect();
    drawing.simplify();
    let twice: Vec<usize> = drawing.paths.iter().map(|p| p.segments.len()).collect();
    assert_eq!(once, twice);
}

#[test]
fn test_lines_are_never_simplified_together() {
    // Two collinear but unconnected lines stay two lines.
    let mut drawing = Drawing::from_segments(vec![
        seg((0.0, 0.0), (1.0, 0.0), RED),
        seg((2.0, 0.0), (3.0, 0.0), RED),
    ]);
    drawing.simplify();
    assert_eq!(drawing.lines.len(), 2);
}
