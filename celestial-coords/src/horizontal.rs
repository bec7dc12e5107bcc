//! Equatorial to horizontal conversion for a given latitude and sidereal time.
//!
//! ```text
//! H     = LST − α
//! sin h = sin δ sin φ + cos δ cos φ cos H
//! cos A = (sin δ − sin φ sin h) / (cos φ cos h)
//! ```
//!
//! Azimuth runs from north through east, so a target west of the meridian
//! (`sin H > 0`) gets `A = 2π − acos(cos A)`.
//!
//! Both inverse-trig inputs are clamped to [-1, 1]. At the zenith or at a
//! geographic pole `cos φ cos h` vanishes and azimuth is undefined; it is
//! reported as 0 there instead of NaN. A NaN altitude counts as below the
//! horizon.

use celestial_core::angle::{deg_to_rad, hours_to_rad, rad_to_deg, wrap_0_2pi};
use celestial_core::constants::TWOPI;
use celestial_core::Angle;
use celestial_core::math::{acos_safe, asin_safe};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Below this `|cos φ cos h|` the azimuth is treated as degenerate.
const AZIMUTH_DEGENERACY: f64 = 1e-12;

/// Altitude and azimuth in radians plus the above-horizon flag.
///
/// Altitude is always populated, even below the horizon. Azimuth is only
/// meaningful when `visible` is true and is 0 otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizontalPosition {
    altitude: f64,
    azimuth: f64,
    visible: bool,
}

pub fn to_horizontal(
    ra_hours: f64,
    dec_deg: f64,
    lst_hours: f64,
    lat_deg: f64,
) -> HorizontalPosition {
    let hour_angle = hours_to_rad(lst_hours - ra_hours);
    let dec = deg_to_rad(dec_deg);
    let lat = deg_to_rad(lat_deg);

    let (sin_dec, cos_dec) = dec.sin_cos();
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_ha, cos_ha) = hour_angle.sin_cos();

    let sin_alt = (sin_dec * sin_lat + cos_dec * cos_lat * cos_ha).clamp(-1.0, 1.0);
    let altitude = asin_safe(sin_alt);

    if altitude.is_nan() || altitude < 0.0 {
        return HorizontalPosition::below_horizon(altitude);
    }

    let denominator = cos_lat * altitude.cos();
    let azimuth = if denominator.abs() < AZIMUTH_DEGENERACY {
        0.0
    } else {
        let cos_az = (sin_dec - sin_lat * sin_alt) / denominator;
        let az = acos_safe(cos_az);
        if sin_ha > 0.0 {
            TWOPI - az
        } else {
            az
        }
    };

    HorizontalPosition {
        altitude,
        azimuth: wrap_0_2pi(azimuth),
        visible: true,
    }
}

/// True when the target never sets: its lower culmination stays above the horizon.
pub fn is_circumpolar(dec_deg: f64, lat_deg: f64) -> bool {
    if lat_deg >= 0.0 {
        dec_deg >= 90.0 - lat_deg
    } else {
        dec_deg <= -90.0 - lat_deg
    }
}

/// True when even the upper culmination is below the horizon.
pub fn never_rises(dec_deg: f64, lat_deg: f64) -> bool {
    if lat_deg >= 0.0 {
        dec_deg < lat_deg - 90.0
    } else {
        dec_deg > 90.0 + lat_deg
    }
}

impl HorizontalPosition {
    fn below_horizon(altitude: f64) -> Self {
        Self {
            altitude,
            azimuth: 0.0,
            visible: false,
        }
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    pub fn azimuth(&self) -> f64 {
        self.azimuth
    }

    pub fn altitude_angle(&self) -> Angle {
        Angle::from_radians(self.altitude)
    }

    pub fn azimuth_angle(&self) -> Angle {
        Angle::from_radians(self.azimuth)
    }

    pub fn altitude_degrees(&self) -> f64 {
        rad_to_deg(self.altitude)
    }

    pub fn azimuth_degrees(&self) -> f64 {
        rad_to_deg(self.azimuth)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn zenith_angle(&self) -> Angle {
        Angle::HALF_PI - self.altitude_angle()
    }

    pub fn is_finite(&self) -> bool {
        self.altitude.is_finite() && self.azimuth.is_finite()
    }

    pub fn cardinal_direction(&self) -> &'static str {
        let az_deg = self.azimuth_degrees();
        if !(22.5..337.5).contains(&az_deg) {
            "N"
        } else if az_deg < 67.5 {
            "NE"
        } else if az_deg < 112.5 {
            "E"
        } else if az_deg < 157.5 {
            "SE"
        } else if az_deg < 202.5 {
            "S"
        } else if az_deg < 247.5 {
            "SW"
        } else if az_deg < 292.5 {
            "W"
        } else {
            "NW"
        }
    }
}
