//! Transform programs: a JSON list of operations folded into one `Affine2`.
//!
//! ```json
//! [{"op": "translate", "dx": 10, "dy": 0},
//!  {"op": "rotate_degrees", "degrees": 90},
//!  {"op": "scale", "sx": 2}]
//! ```
//! Operations compose in listed order (each one post-multiplies), so the last
//! one listed is the first to act on a point. Omitted second factors default
//! to the first (`scale` with only `sx` is uniform).

use anyhow::{bail, Context, Result};
use planar::Affine2;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    Rotate { radians: f64 },
    RotateDegrees { degrees: f64 },
    Scale { sx: f64, sy: Option<f64> },
    Skew { kx: f64, ky: Option<f64> },
    Translate { dx: f64, dy: Option<f64> },
    FlipX,
    FlipY,
    /// Compose with explicit components `[a, b, c, d, e, f]`.
    Transform { m: [f64; 6] },
    /// Replace the accumulated transform by its inverse.
    Invert,
    /// Reset to identity.
    Identity,
}

pub fn parse(text: &str) -> Result<Vec<Op>> {
    serde_json::from_str(text).context("parsing transform program")
}

pub fn load(path: &str) -> Result<Vec<Op>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    parse(&text).with_context(|| format!("in {path}"))
}

/// Fold `ops` into a single transform starting from identity.
///
/// `invert` on a singular accumulator is an error: the result would be
/// non-finite and every output coordinate NaN.
pub fn build_transform(ops: &[Op]) -> Result<Affine2> {
    let mut m = Affine2::identity();
    for (i, op) in ops.iter().enumerate() {
        match *op {
            Op::Rotate { radians } => m.rotate(radians),
            Op::RotateDegrees { degrees } => m.rotate_degrees(degrees),
            Op::Scale { sx, sy } => m.scale(sx, sy.unwrap_or(sx)),
            Op::Skew { kx, ky } => m.skew(kx, ky.unwrap_or(kx)),
            Op::Translate { dx, dy } => m.translate(dx, dy.unwrap_or(dx)),
            Op::FlipX => m.flip_x(),
            Op::FlipY => m.flip_y(),
            Op::Transform { m: [a, b, c, d, e, f] } => m.transform(a, b, c, d, e, f),
            Op::Invert => match m.try_inverse() {
                Some(inv) => m.set_transform(inv.a, inv.b, inv.c, inv.d, inv.e, inv.f),
                None => bail!(
                    "op #{i} (invert): transform is singular (det = {})",
                    m.determinant()
                ),
            },
            Op::Identity => m.set_identity(),
        };
        tracing::debug!(step = i, op = ?op, matrix = ?m.to_array(), "op_applied");
    }
    Ok(m)
}
