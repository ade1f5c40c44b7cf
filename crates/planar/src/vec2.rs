//! Vector helpers that `nalgebra::Vector2` does not provide directly.
//!
//! `heading` rather than `angle`: nalgebra already has an inherent
//! `angle(&self, other)` that would shadow a trait method of the same name.
//!
//! Zero-length inputs never produce NaN: `direction()` of the zero vector is
//! the zero vector, and `with_angle` keeps a zero vector at zero.

use crate::Vec2;

/// Build a vector of the given length pointing along `angle` (radians).
#[inline]
pub fn from_angle(angle: f64, length: f64) -> Vec2 {
    Vec2::new(angle.cos() * length, angle.sin() * length)
}

/// Componentwise minimum over `points`; `None` if empty.
pub fn min_components(points: &[Vec2]) -> Option<Vec2> {
    let (first, rest) = points.split_first()?;
    Some(rest.iter().fold(*first, |acc, p| acc.inf(p)))
}

/// Componentwise maximum over `points`; `None` if empty.
pub fn max_components(points: &[Vec2]) -> Option<Vec2> {
    let (first, rest) = points.split_first()?;
    Some(rest.iter().fold(*first, |acc, p| acc.sup(p)))
}

pub trait Vec2Ext {
    /// Rotate 90° clockwise: `(y, -x)`.
    fn perp_cw(&self) -> Vec2;
    /// Rotate 90° counterclockwise: `(-y, x)`.
    fn perp_ccw(&self) -> Vec2;
    /// `atan2(y, x)`.
    fn heading(&self) -> f64;
    fn with_angle(&self, angle: f64) -> Vec2;
    fn with_length(&self, length: f64) -> Vec2;
    /// Unit vector, or zero for the zero vector.
    fn direction(&self) -> Vec2;
    /// Scalar 2D cross product `x*o.y - y*o.x`.
    fn cross2(&self, other: &Vec2) -> f64;
    fn lerp_to(&self, other: &Vec2, alpha: f64) -> Vec2;
}

impl Vec2Ext for Vec2 {
    #[inline]
    fn perp_cw(&self) -> Vec2 {
        Vec2::new(self.y, -self.x)
    }
    #[inline]
    fn perp_ccw(&self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }
    #[inline]
    fn heading(&self) -> f64 {
        self.y.atan2(self.x)
    }
    fn with_angle(&self, angle: f64) -> Vec2 {
        from_angle(angle, self.norm())
    }
    fn with_length(&self, length: f64) -> Vec2 {
        from_angle(self.heading(), length)
    }
    fn direction(&self) -> Vec2 {
        let len = self.norm();
        if len > 0.0 {
            *self * (1.0 / len)
        } else {
            Vec2::zeros()
        }
    }
    #[inline]
    fn cross2(&self, other: &Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }
    #[inline]
    fn lerp_to(&self, other: &Vec2, alpha: f64) -> Vec2 {
        *self * (1.0 - alpha) + *other * alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn perpendiculars() {
        let v = vector![3.0, 1.0];
        assert_eq!(v.perp_cw(), vector![1.0, -3.0]);
        assert_eq!(v.perp_ccw(), vector![-1.0, 3.0]);
        assert_eq!(v.dot(&v.perp_cw()), 0.0);
    }

    #[test]
    fn zero_direction_is_zero_not_nan() {
        let z = Vec2::zeros();
        let d = z.direction();
        assert_eq!(d, Vec2::zeros());
        assert_eq!(z.with_angle(1.0), Vec2::zeros());
    }

    #[test]
    fn direction_is_unit() {
        let d = vector![3.0, 4.0].direction();
        assert!((d.norm() - 1.0).abs() < 1e-15);
        assert!((d.x - 0.6).abs() < 1e-15);
    }

    #[test]
    fn angle_and_length_setters() {
        let v = vector![0.0, 2.0];
        assert!((v.heading() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
        let w = v.with_angle(0.0);
        assert!((w - vector![2.0, 0.0]).norm() < 1e-12);
        let u = v.with_length(5.0);
        assert!((u - vector![0.0, 5.0]).norm() < 1e-12);
    }

    #[test]
    fn cross_and_lerp() {
        let a = vector![1.0, 0.0];
        let b = vector![0.0, 1.0];
        assert_eq!(a.cross2(&b), 1.0);
        assert_eq!(b.cross2(&a), -1.0);
        assert_eq!(a.lerp_to(&b, 0.5), vector![0.5, 0.5]);
    }

    #[test]
    fn component_bounds() {
        let pts = [vector![1.0, 5.0], vector![-2.0, 3.0], vector![4.0, -1.0]];
        assert_eq!(min_components(&pts), Some(vector![-2.0, -1.0]));
        assert_eq!(max_components(&pts), Some(vector![4.0, 5.0]));
        assert!(min_components(&[]).is_none());
    }
}
