//! Evaluate the reference shapes (square, self-intersecting octagon, holed
//! square) and print winding numbers and containment for a few probe points.
//!
//! Usage:
//!   cargo run -p polyregion --example reference_shapes
//!   RUST_LOG=trace cargo run -p polyregion --example reference_shapes

use polyregion::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ShapeError> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let square = PolygonRegion::from_flat(&[1.0, 1.0, -1.0, 1.0, -1.0, -1.0, 1.0, -1.0])?;
    let octagon = PolygonRegion::from_rows(&[
        [1.0, 2.0],
        [-2.0, 2.0],
        [-2.0, -2.0],
        [2.0, -2.0],
        [2.0, 1.0],
        [-1.0, 1.0],
        [-1.0, -1.0],
        [1.0, -1.0],
    ])?;
    let holed = PolygonRegion::from_rows(&[
        [2.0, 2.0],
        [-2.0, 2.0],
        [-2.0, -2.0],
        [2.0, -2.0],
        [1.0, 1.0],
        [1.0, -1.0],
        [-1.0, -1.0],
        [-1.0, 1.0],
    ])?;

    let probes = Points2::from_column_slice(&[0.0, 0.0, 0.5, 0.5, 1.5, 0.5, 0.9, -0.1, 1.5, 1.5, -1.5, 0.0]);
    for (name, region) in [
        ("square", &square),
        ("octagon", &octagon),
        ("octagon reversed", &octagon.reversed()),
        ("holed square", &holed),
    ] {
        let wn = region.winding_numbers(&probes);
        let inside = region.contains_all(&probes);
        println!("{name} (edges = {}):", region.num_edges());
        for (i, p) in probes.column_iter().enumerate() {
            println!(
                "  ({:>5.2}, {:>5.2})  winding = {:>2}  inside = {}",
                p[0], p[1], wn[i], inside[i]
            );
        }
    }
    Ok(())
}
