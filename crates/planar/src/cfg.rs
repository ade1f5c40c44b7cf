//! Tolerance defaults.
//!
//! Policy
//! - Defaults are fixed constants so call sites do not juggle tolerances.
//!   `GeomCfg` carries them for callers that need to override per use.

/// Component tolerance for matrix equality. Composition accumulates rounding,
/// so exact comparison is never the right test.
pub const EQUAL_EPS: f64 = 1e-14;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    pub eps_equal: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_equal: EQUAL_EPS,
        }
    }
}
