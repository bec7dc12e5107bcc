use super::normalize::wrap_0_2pi;
use crate::constants::{DEG_TO_RAD, HALF_PI, HOURS_TO_RAD, PI, RAD_TO_DEG};

/// A plane angle, stored in radians.
///
/// Used where a value crosses a crate boundary and its unit would otherwise
/// be a guess: dome projection inputs and outputs, zenith distance, compass
/// bearings.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    pub const ZERO: Self = Self { rad: 0.0 };
    pub const HALF_PI: Self = Self { rad: HALF_PI };
    pub const PI: Self = Self { rad: PI };

    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg * DEG_TO_RAD,
        }
    }

    /// 24 h is a full turn.
    #[inline]
    pub fn from_hours(hours: f64) -> Self {
        Self {
            rad: hours * HOURS_TO_RAD,
        }
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad * RAD_TO_DEG
    }

    #[inline]
    pub fn hours(self) -> f64 {
        self.rad / HOURS_TO_RAD
    }

    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.rad.sin_cos()
    }

    /// Same direction, folded into [0, 2π).
    #[inline]
    pub fn wrapped(self) -> Self {
        Self::from_radians(wrap_0_2pi(self.rad))
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.rad.is_finite()
    }
}
