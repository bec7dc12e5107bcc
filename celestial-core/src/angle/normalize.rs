//! Angle normalization.
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Azimuth, RA (radians) | [0, 2pi) | [`wrap_0_2pi`] |
//! | Hour angle (radians) | [-pi, +pi) | [`wrap_pm_pi`] |
//! | RA, sidereal time (hours) | [0, 24) | [`wrap_hours`] |
//! | Sidereal angle (degrees) | [0, 360) | [`wrap_0_360`] |
//! | Observer longitude (degrees) | (-180, 180] | [`normalize_longitude_deg`] |
//!
//! All wrapping goes through [`positive_fmod`], so a value a hair below zero
//! can never come back as the upper bound.

use crate::constants::{DEGREES_PER_CIRCLE, HOURS_PER_DAY, PI, TWOPI};
use crate::math::positive_fmod;

#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    positive_fmod(x, TWOPI)
}

/// Wraps an angle to [-pi, +pi) radians.
///
/// ```
/// use celestial_core::angle::wrap_pm_pi;
/// use std::f64::consts::PI;
///
/// let x = wrap_pm_pi(3.0 * PI / 2.0);
/// assert!((x - (-PI / 2.0)).abs() < 1e-10);
/// ```
#[inline]
pub fn wrap_pm_pi(x: f64) -> f64 {
    positive_fmod(x + PI, TWOPI) - PI
}

#[inline]
pub fn wrap_hours(hours: f64) -> f64 {
    positive_fmod(hours, HOURS_PER_DAY)
}

#[inline]
pub fn wrap_0_360(degrees: f64) -> f64 {
    positive_fmod(degrees, DEGREES_PER_CIRCLE)
}

/// Normalizes a longitude in degrees to (-180°, 180°].
///
/// Both the signed `[-180, 180]` and the `[0, 360)` conventions map onto the
/// same value, so `normalize_longitude_deg(lon + 360.0)` equals
/// `normalize_longitude_deg(lon)` up to rounding. Values already in range
/// come back bit-for-bit.
#[inline]
pub fn normalize_longitude_deg(lon: f64) -> f64 {
    if lon > -180.0 && lon <= 180.0 {
        return lon;
    }
    let wrapped = wrap_0_360(lon);
    if wrapped > 180.0 {
        wrapped - DEGREES_PER_CIRCLE
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn wrap_0_2pi_handles_negative_and_large() {
        assert_abs_diff_eq!(wrap_0_2pi(-0.5), TWOPI - 0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(wrap_0_2pi(TWOPI + 1.0), 1.0, epsilon = 1e-12);
        assert_eq!(wrap_0_2pi(0.0), 0.0);
    }

    #[test]
    fn wrap_pm_pi_is_half_open() {
        assert_abs_diff_eq!(wrap_pm_pi(-3.0 * PI / 2.0), PI / 2.0, epsilon = 1e-12);
        let x = wrap_pm_pi(PI);
        assert!((-PI..PI).contains(&x), "got {}", x);
    }

    #[test]
    fn wrap_hours_covers_both_directions() {
        assert_abs_diff_eq!(wrap_hours(25.5), 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_hours(-0.25), 23.75, epsilon = 1e-12);
        assert_eq!(wrap_hours(24.0), 0.0);
    }

    #[test]
    fn longitude_conventions_agree() {
        assert_abs_diff_eq!(normalize_longitude_deg(285.994), -74.006, epsilon = 1e-9);
        assert_abs_diff_eq!(normalize_longitude_deg(-74.006), -74.006, epsilon = 1e-12);
        assert_eq!(normalize_longitude_deg(180.0), 180.0);
        assert_eq!(normalize_longitude_deg(-180.0), 180.0);
        assert_abs_diff_eq!(
            normalize_longitude_deg(12.5 + 360.0),
            normalize_longitude_deg(12.5),
            epsilon = 1e-12
        );
    }
}
