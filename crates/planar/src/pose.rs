//! Rigid placement: position + orientation, with a cached rotation matrix.
//!
//! Invariant: `rotation == Linear2::rotation(orientation)` after every
//! mutator, so `transform` never recomputes trig.

use crate::affine::Affine2;
use crate::linear::Linear2;
use crate::Vec2;

#[derive(Clone, Copy, Debug)]
pub struct Pose2 {
    pub position: Vec2,
    orientation: f64,
    /// Draw order for renderers; not used by any math here.
    pub z_index: i32,
    rotation: Linear2,
}

impl Default for Pose2 {
    fn default() -> Self {
        Self::new(Vec2::zeros(), 0.0, 0)
    }
}

impl Pose2 {
    pub fn new(position: Vec2, orientation: f64, z_index: i32) -> Self {
        Self {
            position,
            orientation,
            z_index,
            rotation: Linear2::rotation(orientation),
        }
    }

    #[inline]
    pub fn orientation(&self) -> f64 {
        self.orientation
    }

    #[inline]
    pub fn rotation(&self) -> &Linear2 {
        &self.rotation
    }

    pub fn set_orientation(&mut self, orientation: f64) -> &mut Self {
        self.orientation = orientation;
        self.rotation = Linear2::rotation(orientation);
        self
    }

    /// Turn by `delta` radians (accumulates into the stored orientation).
    pub fn rotate(&mut self, delta: f64) -> &mut Self {
        self.set_orientation(self.orientation + delta)
    }

    pub fn translate(&mut self, distance: Vec2) -> &mut Self {
        self.position += distance;
        self
    }

    /// Local → world: rotate about the local origin, then offset by `position`.
    #[inline]
    pub fn transform(&self, v: Vec2) -> Vec2 {
        self.rotation.multiply_by_vector(v) + self.position
    }

    /// World → local.
    #[inline]
    pub fn inverse_transform(&self, p: Vec2) -> Vec2 {
        self.rotation.transform_transpose(p - self.position)
    }

    /// Equivalent homogeneous transform.
    pub fn to_affine(&self) -> Affine2 {
        let mut m = Affine2::identity();
        m.translate(self.position.x, self.position.y)
            .rotate(self.orientation);
        m
    }
}
