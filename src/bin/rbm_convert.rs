//! CLI tool for converting RBM drawings to viewer JSON and SVG
//!
//! Usage:
//!   cargo run --release --bin rbm_convert -- <rbm_file> [options]
//!
//! Options:
//!   --json <path>   Write the reconstructed drawing as JSON
//!   --svg <path>    Render the reconstructed drawing as SVG
//!
//! With no output option the JSON lands next to the input with a `.json`
//! extension.

use std::env;
use std::mem;
use std::path::{Path, PathBuf};

use rbm_convert::export;
use rbm_convert::{Drawing, RbmDocument};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <rbm_file> [options]", args[0]);
        eprintln!();
        eprintln!("Options:");
        eprintln!("  --json <path>   Write the reconstructed drawing as JSON");
        eprintln!("  --svg <path>    Render the reconstructed drawing as SVG");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} drawing.rbm", args[0]);
        eprintln!("  {} drawing.rbm --json out.json --svg out.svg", args[0]);
        return Ok(());
    }

    let input = PathBuf::from(&args[1]);
    let options = parse_options(&input, &args[2..]);

    log::info!("loading {}", input.display());
    let start = std::time::Instant::now();
    let mut document = RbmDocument::open(&input)?;
    log::info!(
        "decoded RBM version {} in {:.2}ms",
        document.version,
        start.elapsed().as_secs_f64() * 1000.0
    );

    println!("=== Document ===");
    println!("  Version: {}", document.version);
    println!("  Monochrome: {}", document.is_monochrome());
    println!("  Mask points: {}", document.mask.points.len());
    println!("  Segments: {}", document.vertices.segments.len());
    println!("  Triangles: {}", document.vertices.triangles.len());
    println!("  Quadrilaterals: {}", document.vertices.quadrilaterals.len());
    println!("  Layers: {}", document.layers.len());
    for (name, usage) in document.layer_usage() {
        println!(
            "    {}: segments={}, triangles={}, quadrilaterals={}",
            name, usage.segments, usage.triangles, usage.quadrilaterals
        );
    }

    let segments = mem::take(&mut document.vertices.segments);
    let input_count = segments.len();
    let start = std::time::Instant::now();
    let mut drawing = Drawing::from_segments(segments);
    let stitched = drawing.segment_count() - drawing.lines.len();
    log::info!(
        "reconstructed {} paths ({} segments) and {} free lines in {:.2}ms",
        drawing.paths.len(),
        stitched,
        drawing.lines.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    drawing.simplify();
    let kept = drawing.segment_count();
    if input_count > 0 {
        let removed = input_count - kept;
        log::info!(
            "collinear merge removed {} of {} segments ({:.0}%)",
            removed,
            input_count,
            removed as f64 * 100.0 / input_count as f64
        );
    }

    if let Some(path) = &options.json_out {
        export::drawing_to_json_file(&drawing, path)?;
        log::info!("wrote {}", path.display());
    }
    if let Some(path) = &options.svg_out {
        export::drawing_to_svg_file(&document, &drawing, path)?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}

/// Output destinations gathered from the command line.
struct Options {
    json_out: Option<PathBuf>,
    svg_out: Option<PathBuf>,
}

/// Walks the arguments after the input path. Each output flag consumes the
/// value that follows it, unknown options are ignored with a warning, and
/// when no output is requested the JSON default lands next to the input.
fn parse_options(input: &Path, rest: &[String]) -> Options {
    let mut json_out: Option<PathBuf> = None;
    let mut svg_out: Option<PathBuf> = None;

    let mut i = 0;
    while i < rest.len() {
        match rest[i].as_str() {
            "--json" => {
                i += 1;
                if i < rest.len() {
                    json_out = Some(PathBuf::from(&rest[i]));
                }
            }
            "--svg" => {
                i += 1;
                if i < rest.len() {
                    svg_out = Some(PathBuf::from(&rest[i]));
                }
            }
            other => log::warn!("ignoring unknown option {other}"),
        }
        i += 1;
    }
    if json_out.is_none() && svg_out.is_none() {
        json_out = Some(input.with_extension("json"));
    }
    Options { json_out, svg_out }
}
