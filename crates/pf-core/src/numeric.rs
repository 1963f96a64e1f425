/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Relative change of `delta` against `reference`, in percent.
///
/// A zero reference yields 0 rather than a signed infinity; deltas against an
/// empty tank are reported as "no change".
pub fn percent_of(delta: Real, reference: Real) -> Real {
    if reference == 0.0 {
        return 0.0;
    }
    delta / reference * 100.0
}
