//! Floating-point helpers that keep trigonometry inside its domain.
//!
//! Spherical-astronomy formulas routinely feed `asin`/`acos` with ratios that
//! are mathematically in [-1, 1] but drift a few ULPs outside it. The `_safe`
//! variants clamp first so the result is never NaN.

#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Modulo that always lands in `[0, y)` for positive `y`.
///
/// `-1.0 % 24.0` is `-1.0` in Rust; `positive_fmod(-1.0, 24.0)` is `23.0`.
/// A result that rounds up to `y` itself is folded back to zero.
#[inline]
pub fn positive_fmod(x: f64, y: f64) -> f64 {
    let mut r = fmod(x, y);
    if r < 0.0 {
        r += y;
    }
    if r >= y {
        r = 0.0;
    }
    r
}

#[inline]
pub fn asin_safe(sin_value: f64) -> f64 {
    libm::asin(sin_value.clamp(-1.0, 1.0))
}

#[inline]
pub fn acos_safe(cos_value: f64) -> f64 {
    libm::acos(cos_value.clamp(-1.0, 1.0))
}
