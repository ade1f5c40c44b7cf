//! 2D affine transforms, 2×2 linear maps, and line/segment intersection.
//!
//! Purpose
//! - Provide the small numeric layer a 2D renderer or physics step sits on:
//!   a canvas-compatible homogeneous transform (`Affine2`), a plain 2×2 map
//!   (`Linear2`), and Cramer-rule intersection of rays and segments.
//! - Vectors are `nalgebra::Vector2<f64>` (re-exported as `Vec2`); only the
//!   helpers nalgebra lacks live in `vec2::Vec2Ext`.
//!
//! Conventions
//! - Angles are radians unless a function name says otherwise.
//! - Matrix equality is always tolerance-based (`cfg::EQUAL_EPS`).
//! - Degenerate inverses follow IEEE arithmetic (non-finite output); use the
//!   `try_inverse` variants for an `Option`.

pub mod affine;
pub mod cfg;
pub mod intersect;
pub mod linear;
pub mod pose;
pub mod scalar;
pub mod vec2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use affine::Affine2;
pub use cfg::GeomCfg;
pub use intersect::{classify_segments, intersect_rays, intersect_segments, LineHit, StdLine};
pub use linear::Linear2;
pub use pose::Pose2;
pub use vec2::Vec2Ext;

/// The vector type consumed and produced by every operation in this crate.
pub type Vec2 = nalgebra::Vector2<f64>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::affine::Affine2;
    pub use crate::cfg::GeomCfg;
    pub use crate::intersect::{classify_segments, intersect_rays, intersect_segments, LineHit};
    pub use crate::linear::Linear2;
    pub use crate::pose::Pose2;
    pub use crate::scalar::{clamp, to_radians};
    pub use crate::vec2::{from_angle, Vec2Ext};
    pub use crate::Vec2;
}
