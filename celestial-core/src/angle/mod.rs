//! Angle conversions, wrapping and range validation.
//!
//! The engine keeps angles as plain `f64` in the unit the formula needs:
//! right ascension and sidereal time in hours, catalog declinations and
//! observer coordinates in degrees, trigonometry in radians. The helpers here
//! are the only place those units meet. [`Angle`] carries a value across an
//! API boundary where the unit would otherwise be ambiguous.

mod core;
mod normalize;
mod ops;
mod validate;

pub use self::core::Angle;
pub use normalize::{normalize_longitude_deg, wrap_0_2pi, wrap_0_360, wrap_hours, wrap_pm_pi};
pub use validate::{require_finite, validate_declination_deg, validate_latitude_deg};

use crate::constants::{DEG_TO_RAD, HOURS_TO_RAD, RAD_TO_DEG};

#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * DEG_TO_RAD
}

#[inline]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * RAD_TO_DEG
}

/// Hours of right ascension (or sidereal time) to radians.
#[inline]
pub fn hours_to_rad(hours: f64) -> f64 {
    hours * HOURS_TO_RAD
}

#[inline]
pub fn rad_to_hours(radians: f64) -> f64 {
    radians / HOURS_TO_RAD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{HALF_PI, PI, TWOPI};
    use approx::assert_abs_diff_eq;

    #[test]
    fn degree_radian_landmarks() {
        assert_abs_diff_eq!(deg_to_rad(180.0), PI, epsilon = 1e-15);
        assert_abs_diff_eq!(deg_to_rad(90.0), HALF_PI, epsilon = 1e-15);
        assert_abs_diff_eq!(rad_to_deg(PI), 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rad_to_deg(deg_to_rad(-37.25)), -37.25, epsilon = 1e-12);
    }

    #[test]
    fn hours_map_to_fifteen_degrees() {
        assert_abs_diff_eq!(hours_to_rad(24.0), TWOPI, epsilon = 1e-15);
        assert_abs_diff_eq!(hours_to_rad(6.0), HALF_PI, epsilon = 1e-15);
        assert_abs_diff_eq!(rad_to_hours(PI), 12.0, epsilon = 1e-12);
    }
}
