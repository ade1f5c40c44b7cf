//! Homogeneous 2D affine transform (canvas-compatible "2×3" matrix).
//!
//! Layout
//! ```text
//! | a c e |
//! | b d f |
//! | 0 0 1 |
//! ```
//! `(a, b)` is the image of the local x axis, `(c, d)` of the local y axis and
//! `(e, f)` the translation. A point maps as `x' = a x + c y + e`,
//! `y' = b x + d y + f`.
//!
//! Composition
//! - Every mutator post-multiplies: `self ← self · op`. Operations therefore act
//!   in the current local frame, and a chain `t.translate(..).rotate(..)`
//!   applied to a point runs the rotation first, then the translation, exactly
//!   like a canvas context.
//! - Mutators return `&mut Self` for chaining; `inverse`, `interpolate` and the
//!   `Mul` operator return new values.
//!
//! Numerics
//! - No invariant is enforced; any six finite floats are a valid transform.
//!   It is degenerate exactly when `a d - b c == 0`, and then `inverse()` is
//!   non-finite. Use `try_inverse()` for an `Option`.
//! - Compare with `approx_eq`/`is_equal`, never `==`; repeated composition
//!   accumulates rounding.

use nalgebra::Matrix3;

use crate::cfg::{GeomCfg, EQUAL_EPS};
use crate::linear::Linear2;
use crate::scalar::to_radians;
use crate::Vec2;

#[derive(Clone, Copy, Debug)]
pub struct Affine2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Affine2 {
    /// Explicit components in canvas `setTransform` order.
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn from_array(m: [f64; 6]) -> Self {
        Self::new(m[0], m[1], m[2], m[3], m[4], m[5])
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    // ---- mutators -------------------------------------------------------

    /// Overwrite all six components.
    pub fn set_transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> &mut Self {
        *self = Self::new(a, b, c, d, e, f);
        self
    }

    pub fn set_identity(&mut self) -> &mut Self {
        *self = Self::identity();
        self
    }

    /// Mirror the local x axis.
    pub fn flip_x(&mut self) -> &mut Self {
        self.a = -self.a;
        self.b = -self.b;
        self
    }

    /// Mirror the local y axis.
    pub fn flip_y(&mut self) -> &mut Self {
        self.c = -self.c;
        self.d = -self.d;
        self
    }

    /// Rotate the local basis counterclockwise by `angle_in_radians`.
    pub fn rotate(&mut self, angle_in_radians: f64) -> &mut Self {
        let Self { a, b, c, d, .. } = *self;
        let (sin, cos) = angle_in_radians.sin_cos();
        self.a = a * cos + c * sin;
        self.b = b * cos + d * sin;
        self.c = a * -sin + c * cos;
        self.d = b * -sin + d * cos;
        self
    }

    pub fn rotate_degrees(&mut self, angle_in_degrees: f64) -> &mut Self {
        self.rotate(to_radians(angle_in_degrees))
    }

    pub fn scale(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.a *= sx;
        self.b *= sx;
        self.c *= sy;
        self.d *= sy;
        self
    }

    pub fn scale_uniform(&mut self, s: f64) -> &mut Self {
        self.scale(s, s)
    }

    pub fn scale_x(&mut self, sx: f64) -> &mut Self {
        self.a *= sx;
        self.b *= sx;
        self
    }

    pub fn scale_y(&mut self, sy: f64) -> &mut Self {
        self.c *= sy;
        self.d *= sy;
        self
    }

    /// Shear both local axes: `kx` tilts the x axis toward y, `ky` tilts the y
    /// axis toward x. Both halves read the pre-update basis, so this is the
    /// product with `[[1, ky], [kx, 1]]`, not two sequential single-axis skews.
    pub fn skew(&mut self, kx: f64, ky: f64) -> &mut Self {
        let Self { a, b, c, d, .. } = *self;
        self.a = a + c * kx;
        self.b = b + d * kx;
        self.c = c + a * ky;
        self.d = d + b * ky;
        self
    }

    pub fn skew_uniform(&mut self, k: f64) -> &mut Self {
        self.skew(k, k)
    }

    /// Horizontal shear (canvas `skewX`): `x' = x + k y` in local space.
    pub fn skew_x(&mut self, k: f64) -> &mut Self {
        self.c += self.a * k;
        self.d += self.b * k;
        self
    }

    /// Vertical shear (canvas `skewY`): `y' = y + k x` in local space.
    pub fn skew_y(&mut self, k: f64) -> &mut Self {
        self.a += self.c * k;
        self.b += self.d * k;
        self
    }

    /// Translate along the current local axes.
    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.e += self.a * dx + self.c * dy;
        self.f += self.b * dx + self.d * dy;
        self
    }

    pub fn translate_uniform(&mut self, distance: f64) -> &mut Self {
        self.translate(distance, distance)
    }

    pub fn translate_x(&mut self, dx: f64) -> &mut Self {
        self.e += self.a * dx;
        self.f += self.b * dx;
        self
    }

    pub fn translate_y(&mut self, dy: f64) -> &mut Self {
        self.e += self.c * dy;
        self.f += self.d * dy;
        self
    }

    /// `self ← self · other` (full homogeneous product).
    pub fn compose(&mut self, other: &Affine2) -> &mut Self {
        *self = *self * *other;
        self
    }

    /// [`compose`](Self::compose) with explicit components, mirroring the
    /// canvas `transform(a, b, c, d, e, f)` call.
    pub fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> &mut Self {
        self.compose(&Affine2::new(a, b, c, d, e, f))
    }

    /// In-place [`inverse`](Self::inverse).
    pub fn invert(&mut self) -> &mut Self {
        *self = self.inverse();
        self
    }

    // ---- application ----------------------------------------------------

    #[inline]
    pub fn apply_to_point(&self, x: f64, y: f64) -> Vec2 {
        Vec2::new(
            x * self.a + y * self.c + self.e,
            x * self.b + y * self.d + self.f,
        )
    }

    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        self.apply_to_point(p.x, p.y)
    }

    /// Linear part only (no translation); for directions and offsets.
    #[inline]
    pub fn apply_to_vector(&self, v: Vec2) -> Vec2 {
        Vec2::new(v.x * self.a + v.y * self.c, v.x * self.b + v.y * self.d)
    }

    /// Same length and order as the input.
    pub fn apply_to_points(&self, points: &[Vec2]) -> Vec<Vec2> {
        points.iter().map(|p| self.apply(*p)).collect()
    }

    /// Flat `[x0, y0, x1, y1, ..]` buffer. Output length equals input length;
    /// an unpaired trailing coordinate has no `y` and comes out as NaN.
    pub fn apply_to_flat(&self, values: &[f64]) -> Vec<f64> {
        let mut out = Vec::with_capacity(values.len());
        let mut pairs = values.chunks_exact(2);
        for xy in pairs.by_ref() {
            let p = self.apply_to_point(xy[0], xy[1]);
            out.push(p.x);
            out.push(p.y);
        }
        if !pairs.remainder().is_empty() {
            out.push(f64::NAN);
        }
        out
    }

    /// Single-precision variant of [`apply_to_flat`](Self::apply_to_flat) for
    /// vertex buffers. Arithmetic is done in `f64`.
    pub fn apply_to_flat_f32(&self, values: &[f32]) -> Vec<f32> {
        let mut out = Vec::with_capacity(values.len());
        let mut pairs = values.chunks_exact(2);
        for xy in pairs.by_ref() {
            let p = self.apply_to_point(f64::from(xy[0]), f64::from(xy[1]));
            out.push(p.x as f32);
            out.push(p.y as f32);
        }
        if !pairs.remainder().is_empty() {
            out.push(f32::NAN);
        }
        out
    }

    // ---- algebra --------------------------------------------------------

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Inverse transform. Non-finite when `determinant() == 0`.
    pub fn inverse(&self) -> Affine2 {
        let Self { a, b, c, d, e, f } = *self;
        let det = a * d - b * c;
        Affine2::new(
            d / det,
            -b / det,
            -c / det,
            a / det,
            (c * f - d * e) / det,
            (b * e - a * f) / det,
        )
    }

    /// `None` if singular.
    pub fn try_inverse(&self) -> Option<Affine2> {
        if self.determinant() == 0.0 {
            return None;
        }
        let inv = self.inverse();
        inv.is_finite().then_some(inv)
    }

    /// Componentwise `m1 (1 - t) + m2 t`. Exact at both ends for finite
    /// input; `t` is not clamped, so values outside `[0, 1]` extrapolate.
    ///
    /// This blends matrix entries, not rotation angles: halfway between two
    /// rotations is in general a scaled rotation, and halfway between `+90°`
    /// and `-90°` is singular. Decompose first if angle-correct motion is
    /// needed.
    pub fn interpolate(m1: &Affine2, m2: &Affine2, t: f64) -> Affine2 {
        let lerp = |p: f64, q: f64| p * (1.0 - t) + q * t;
        Affine2::new(
            lerp(m1.a, m2.a),
            lerp(m1.b, m2.b),
            lerp(m1.c, m2.c),
            lerp(m1.d, m2.d),
            lerp(m1.e, m2.e),
            lerp(m1.f, m2.f),
        )
    }

    /// All six components differ by less than `eps`.
    pub fn approx_eq(&self, other: &Affine2, eps: f64) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(p, q)| (p - q).abs() < eps)
    }

    /// [`approx_eq`](Self::approx_eq) with the default tolerance `1e-14`.
    pub fn is_equal(m1: &Affine2, m2: &Affine2) -> bool {
        m1.approx_eq(m2, EQUAL_EPS)
    }

    pub fn is_equal_with(m1: &Affine2, m2: &Affine2, cfg: &GeomCfg) -> bool {
        m1.approx_eq(m2, cfg.eps_equal)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }

    // ---- views ----------------------------------------------------------

    /// Embedded linear part as a row-major [`Linear2`] (`[[a, c], [b, d]]`).
    pub fn linear(&self) -> Linear2 {
        Linear2::new(self.a, self.c, self.b, self.d)
    }

    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.e, self.f)
    }

    /// Affine map with the given linear part and translation.
    pub fn from_parts(linear: &Linear2, translation: Vec2) -> Affine2 {
        Affine2::new(
            linear.a,
            linear.c,
            linear.b,
            linear.d,
            translation.x,
            translation.y,
        )
    }

    pub fn to_homogeneous(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.a, self.c, self.e, //
            self.b, self.d, self.f, //
            0.0, 0.0, 1.0,
        )
    }
}

impl From<Matrix3<f64>> for Affine2 {
    /// Reads the top two rows; the bottom row is assumed to be `[0, 0, 1]`.
    fn from(m: Matrix3<f64>) -> Self {
        Affine2::new(
            m[(0, 0)],
            m[(1, 0)],
            m[(0, 1)],
            m[(1, 1)],
            m[(0, 2)],
            m[(1, 2)],
        )
    }
}

impl std::ops::Mul for Affine2 {
    type Output = Affine2;

    /// `self · rhs`: apply `rhs` first, then `self`.
    fn mul(self, rhs: Affine2) -> Affine2 {
        Affine2::new(
            self.a * rhs.a + self.c * rhs.b,
            self.b * rhs.a + self.d * rhs.b,
            self.a * rhs.c + self.c * rhs.d,
            self.b * rhs.c + self.d * rhs.d,
            self.a * rhs.e + self.c * rhs.f + self.e,
            self.b * rhs.e + self.d * rhs.f + self.f,
        )
    }
}

impl std::ops::MulAssign for Affine2 {
    #[inline]
    fn mul_assign(&mut self, rhs: Affine2) {
        self.compose(&rhs);
    }
}

impl std::ops::Mul<Vec2> for Affine2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        self.apply(rhs)
    }
}
