//! Ray and segment intersection via the standard line form `A x + B y = C`.
//!
//! For a line through `p → q`: `A = q.y - p.y`, `B = p.x - q.x`,
//! `C = A p.x + B p.y`. Two lines meet where the 2×2 system
//! ```text
//! | A1 B1 | |x|   |C1|
//! | A2 B2 | |y| = |C2|
//! ```
//! is solvable, i.e. `A1 B2 - A2 B1 != 0` (Cramer's rule). A zero denominator
//! means parallel lines, coincident ones included; that is reported as "no
//! intersection", never as a failure.
//!
//! Segment containment is tested per segment on whichever axis it spans: the
//! hit is inside a segment if its x-ratio or its y-ratio along that segment is
//! in `[0, 1]`, and it must be inside both segments. Bounds are exact (no
//! tolerance), so a hit computed a rounding error past an endpoint is rejected.

use crate::Vec2;

/// Line `a x + b y = c`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StdLine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl StdLine {
    /// Line through `p` and `q`. Degenerate (`a == b == 0`) if `p == q`.
    #[inline]
    pub fn through(p: Vec2, q: Vec2) -> Self {
        let a = q.y - p.y;
        let b = p.x - q.x;
        Self {
            a,
            b,
            c: a * p.x + b * p.y,
        }
    }

    /// Cramer denominator `a1 b2 - a2 b1`; zero iff parallel.
    #[inline]
    pub fn denominator(l1: &StdLine, l2: &StdLine) -> f64 {
        l1.a * l2.b - l2.a * l1.b
    }

    /// Unique common point, or `None` for parallel lines.
    pub fn meet(l1: &StdLine, l2: &StdLine) -> Option<Vec2> {
        let den = Self::denominator(l1, l2);
        if den == 0.0 {
            return None;
        }
        Some(Vec2::new(
            (l1.c * l2.b - l2.c * l1.b) / den,
            (l2.c * l1.a - l1.c * l2.a) / den,
        ))
    }
}

/// Outcome of a segment test, separating the two ways to miss.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineHit {
    /// Zero denominator: parallel or collinear supports.
    Parallel,
    /// The supporting lines meet outside at least one segment.
    OutOfBounds,
    Point(Vec2),
}

impl LineHit {
    #[inline]
    pub fn point(self) -> Option<Vec2> {
        match self {
            LineHit::Point(p) => Some(p),
            _ => None,
        }
    }
}

/// Intersection of the infinite lines through `p0 → p1` and `p2 → p3`.
pub fn intersect_rays(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Option<Vec2> {
    StdLine::meet(&StdLine::through(p0, p1), &StdLine::through(p2, p3))
}

/// Intersection of the closed segments `p0–p1` and `p2–p3`.
pub fn intersect_segments(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Option<Vec2> {
    classify_segments(p0, p1, p2, p3).point()
}

/// Like [`intersect_segments`] but tells parallel supports apart from a
/// crossing outside the segments.
pub fn classify_segments(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> LineHit {
    let Some(hit) = intersect_rays(p0, p1, p2, p3) else {
        return LineHit::Parallel;
    };
    if on_segment(hit, p0, p1) && on_segment(hit, p2, p3) {
        LineHit::Point(hit)
    } else {
        LineHit::OutOfBounds
    }
}

/// Position of `v` along `[lo, hi]` as a fraction; `None` if the interval has
/// no extent.
#[inline]
fn axis_ratio(v: f64, lo: f64, hi: f64) -> Option<f64> {
    (lo != hi).then(|| (v - lo) / (hi - lo))
}

#[inline]
fn on_segment(hit: Vec2, start: Vec2, end: Vec2) -> bool {
    let unit = |r: Option<f64>| r.is_some_and(|r| (0.0..=1.0).contains(&r));
    unit(axis_ratio(hit.x, start.x, end.x)) || unit(axis_ratio(hit.y, start.y, end.y))
}
