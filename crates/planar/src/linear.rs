//! 2×2 linear maps (rotations, scales, inertia tensors).
//!
//! Layout is row-major:
//! ```text
//! | a b |
//! | c d |
//! ```
//! so `(a, c)` is the image of the x basis vector and `(b, d)` the image of y.
//!
//! Degenerate inverses are not guarded: with `determinant() == 0` the
//! components of `inverse()` are ±∞ or NaN. `try_inverse()` is the checked
//! form.

use nalgebra::Matrix2;

use crate::Vec2;

#[derive(Clone, Copy, Debug)]
pub struct Linear2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Default for Linear2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Linear2 {
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }

    /// Matrix whose columns are `x_axis` and `y_axis`.
    #[inline]
    pub fn from_basis_vectors(x_axis: Vec2, y_axis: Vec2) -> Self {
        Self::new(x_axis.x, y_axis.x, x_axis.y, y_axis.y)
    }

    /// Symmetric `[[k y², k x y], [k x y, k x²]]` with `k = inverse_moment_of_inertia`.
    ///
    /// This is the angular contribution of a contact offset `(x, y)` to an
    /// effective-mass matrix.
    pub fn inertia_tensor(x: f64, y: f64, inverse_moment_of_inertia: f64) -> Self {
        let k = inverse_moment_of_inertia;
        let off_diagonal = k * x * y;
        Self::new(k * y * y, off_diagonal, off_diagonal, k * x * x)
    }

    /// Counterclockwise rotation `[[cos, -sin], [sin, cos]]`.
    pub fn rotation(angle_in_radians: f64) -> Self {
        let (sin, cos) = angle_in_radians.sin_cos();
        Self::new(cos, -sin, sin, cos)
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// `{d, -b, -c, a} / det`. Non-finite when `det == 0`.
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        Self::new(self.d / det, -self.b / det, -self.c / det, self.a / det)
    }

    /// `None` if singular.
    pub fn try_inverse(&self) -> Option<Self> {
        if self.determinant() == 0.0 {
            return None;
        }
        let inv = self.inverse();
        inv.is_finite().then_some(inv)
    }

    /// In-place [`inverse`](Self::inverse).
    pub fn invert(&mut self) -> &mut Self {
        *self = self.inverse();
        self
    }

    /// Component-wise sum into `self`.
    pub fn add(&mut self, other: &Linear2) -> &mut Self {
        self.a += other.a;
        self.b += other.b;
        self.c += other.c;
        self.d += other.d;
        self
    }

    #[inline]
    pub fn multiply_by_vector(&self, v: Vec2) -> Vec2 {
        Vec2::new(self.a * v.x + self.b * v.y, self.c * v.x + self.d * v.y)
    }

    /// Same product as [`multiply_by_vector`](Self::multiply_by_vector).
    #[inline]
    pub fn transform(&self, v: Vec2) -> Vec2 {
        Vec2::new(v.x * self.a + v.y * self.b, v.x * self.c + v.y * self.d)
    }

    /// Apply the transpose without building it; for a rotation this is the
    /// inverse rotation.
    #[inline]
    pub fn transform_transpose(&self, v: Vec2) -> Vec2 {
        Vec2::new(v.x * self.a + v.y * self.c, v.x * self.b + v.y * self.d)
    }

    pub fn transpose(&self) -> Self {
        Self::new(self.a, self.c, self.b, self.d)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite() && self.d.is_finite()
    }

    /// All four components differ by less than `eps`.
    pub fn approx_eq(&self, other: &Linear2, eps: f64) -> bool {
        (self.a - other.a).abs() < eps
            && (self.b - other.b).abs() < eps
            && (self.c - other.c).abs() < eps
            && (self.d - other.d).abs() < eps
    }
}

impl std::ops::Add for Linear2 {
    type Output = Linear2;
    #[inline]
    fn add(self, rhs: Linear2) -> Self::Output {
        Linear2::new(self.a + rhs.a, self.b + rhs.b, self.c + rhs.c, self.d + rhs.d)
    }
}

impl std::ops::AddAssign for Linear2 {
    #[inline]
    fn add_assign(&mut self, rhs: Linear2) {
        Linear2::add(self, &rhs);
    }
}

impl std::ops::Mul<Vec2> for Linear2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Self::Output {
        self.multiply_by_vector(rhs)
    }
}

impl std::ops::Mul for Linear2 {
    type Output = Linear2;
    fn mul(self, rhs: Linear2) -> Self::Output {
        Linear2::new(
            self.a * rhs.a + self.b * rhs.c,
            self.a * rhs.b + self.b * rhs.d,
            self.c * rhs.a + self.d * rhs.c,
            self.c * rhs.b + self.d * rhs.d,
        )
    }
}

impl From<Matrix2<f64>> for Linear2 {
    fn from(m: Matrix2<f64>) -> Self {
        Self::new(m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)])
    }
}

impl From<Linear2> for Matrix2<f64> {
    fn from(l: Linear2) -> Self {
        Matrix2::new(l.a, l.b, l.c, l.d)
    }
}
