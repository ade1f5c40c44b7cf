//! Scalar helpers: clamping, degree conversion, and seeded random draws.
//!
//! Random helpers take the caller's `Rng` so experiments replay exactly from a
//! seeded `StdRng`.

use rand::Rng;

/// Restrict `value` to `[min_value, max_value]`.
///
/// Computed as `min(max(value, min_value), max_value)`, so an inverted range
/// returns `max_value`.
#[inline]
pub fn clamp(value: f64, min_value: f64, max_value: f64) -> f64 {
    value.max(min_value).min(max_value)
}

/// Degrees to radians.
#[inline]
pub fn to_radians(angle_in_degrees: f64) -> f64 {
    angle_in_degrees * (std::f64::consts::PI / 180.0)
}

/// Uniform float in `[min_value, max_value)`.
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, min_value: f64, max_value: f64) -> f64 {
    rng.gen::<f64>() * (max_value - min_value) + min_value
}

/// `floor` of [`random_between`], i.e. an integer in `[min_value, max_value)`.
pub fn random_int_between<R: Rng + ?Sized>(rng: &mut R, min_value: i64, max_value: i64) -> i64 {
    random_between(rng, min_value as f64, max_value as f64).floor() as i64
}

/// Uniformly pick one element; `None` for an empty slice.
pub fn random_select<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let idx = random_int_between(rng, 0, items.len() as i64) as usize;
    items.get(idx.min(items.len() - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn clamp_inside_and_outside() {
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp(-3.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(7.0, 0.0, 1.0), 1.0);
        // inverted range collapses to max
        assert_eq!(clamp(0.5, 2.0, 1.0), 1.0);
    }

    #[test]
    fn degrees_to_radians() {
        assert!((to_radians(180.0) - std::f64::consts::PI).abs() < 1e-15);
        assert!((to_radians(90.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
        assert_eq!(to_radians(0.0), 0.0);
    }

    #[test]
    fn random_draws_stay_in_range_seeded() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = random_between(&mut rng, -2.0, 3.0);
            assert!((-2.0..3.0).contains(&v));
            let k = random_int_between(&mut rng, 1, 4);
            assert!((1..4).contains(&k));
        }
    }

    #[test]
    fn random_select_empty_and_replay() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: [u8; 0] = [];
        assert!(random_select(&mut rng, &empty).is_none());

        let items = ["a", "b", "c", "d"];
        let mut r1 = StdRng::seed_from_u64(99);
        let mut r2 = StdRng::seed_from_u64(99);
        for _ in 0..32 {
            let x = random_select(&mut r1, &items).unwrap();
            let y = random_select(&mut r2, &items).unwrap();
            assert_eq!(x, y);
        }
    }
}
