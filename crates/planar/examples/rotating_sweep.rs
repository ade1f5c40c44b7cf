//! Rotating-sweep probe: spin a segment about a pivot and record where it
//! crosses a fixed wall.
//!
//! Purpose
//! - Exercise the affine chain (translate → rotate → translate back) together
//!   with segment intersection on a concrete, printable scenario.
//! - Show the "interpolate is not angle interpolation" caveat numerically.

use std::f64::consts::PI;
use std::time::Instant;

use nalgebra::Vector2;
use planar::{classify_segments, Affine2, LineHit};

fn main() {
    let pivot = Vector2::new(0.0, 0.0);
    let arm = [Vector2::new(0.0, 0.0), Vector2::new(3.0, 0.0)];
    let wall = [Vector2::new(2.0, -5.0), Vector2::new(2.0, 5.0)];

    let steps = 24;
    let start = Instant::now();
    let mut hits = 0usize;
    for k in 0..steps {
        let theta = 2.0 * PI * k as f64 / steps as f64;
        let mut m = Affine2::identity();
        m.translate(pivot.x, pivot.y)
            .rotate(theta)
            .translate(-pivot.x, -pivot.y);
        let moved = m.apply_to_points(&arm);
        match classify_segments(moved[0], moved[1], wall[0], wall[1]) {
            LineHit::Point(p) => {
                hits += 1;
                println!("step={k:02} theta={theta:.4} hit=({:.6}, {:.6})", p.x, p.y);
            }
            LineHit::OutOfBounds => println!("step={k:02} theta={theta:.4} out_of_bounds"),
            LineHit::Parallel => println!("step={k:02} theta={theta:.4} parallel"),
        }
    }
    let elapsed = start.elapsed().as_secs_f64() * 1e3;
    println!("hits={hits} steps={steps} time_ms={elapsed:.3}");

    let mut r0 = Affine2::identity();
    r0.rotate(0.0);
    let mut r1 = Affine2::identity();
    r1.rotate(0.5 * PI);
    let mid = Affine2::interpolate(&r0, &r1, 0.5);
    println!(
        "interpolate(0°, 90°, 0.5): det={:.6} (a pure 45° rotation has det=1)",
        mid.determinant()
    );
}
