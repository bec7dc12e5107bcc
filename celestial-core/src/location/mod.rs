//! Observer location on the Earth's surface.
//!
//! A [`Location`] stores geodetic latitude and longitude in radians. Longitude
//! is east-positive and normalized to (-180°, 180°] on construction, so callers
//! may pass either the signed or the `[0, 360)` convention. Latitude outside
//! [-90°, 90°] is rejected, never clamped.

use crate::angle::{normalize_longitude_deg, require_finite, validate_latitude_deg};
use crate::constants::{DEG_TO_RAD, HALF_PI, PI, RAD_TO_DEG};
use crate::{AstroError, AstroResult, MathErrorKind};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rounding slack at the poles and the antimeridian for radian input.
const RADIAN_SLACK: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "LocationFields"))]
pub struct Location {
    /// Geodetic latitude in radians, north positive.
    pub latitude: f64,
    /// Longitude in radians, east positive, in (-pi, pi].
    pub longitude: f64,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct LocationFields {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<LocationFields> for Location {
    type Error = AstroError;

    fn try_from(fields: LocationFields) -> AstroResult<Self> {
        Self::from_radians(fields.latitude, fields.longitude)
    }
}

impl Location {
    /// Builds a location from degrees, validating latitude and normalizing longitude.
    ///
    /// ```
    /// use celestial_core::Location;
    ///
    /// let nyc = Location::from_degrees(40.7128, -74.006)?;
    /// let same = Location::from_degrees(40.7128, 285.994)?;
    /// assert!((nyc.longitude_degrees() - same.longitude_degrees()).abs() < 1e-9);
    ///
    /// assert!(Location::from_degrees(91.0, 0.0).is_err());
    /// # Ok::<(), celestial_core::AstroError>(())
    /// ```
    pub fn from_degrees(lat_deg: f64, lon_deg: f64) -> AstroResult<Self> {
        let lat_deg = validate_latitude_deg(lat_deg)?;
        let lon_deg = require_finite("Location::from_degrees", "longitude", lon_deg)?;
        let lon_deg = normalize_longitude_deg(lon_deg);

        Ok(Self {
            latitude: lat_deg * DEG_TO_RAD,
            longitude: lon_deg * DEG_TO_RAD,
        })
    }

    /// Radian counterpart of [`from_degrees`](Self::from_degrees).
    ///
    /// In-range values are kept bit for bit; a longitude past ±π is folded
    /// back into (-π, π].
    pub fn from_radians(latitude: f64, longitude: f64) -> AstroResult<Self> {
        let latitude = require_finite("Location::from_radians", "latitude", latitude)?;
        let longitude = require_finite("Location::from_radians", "longitude", longitude)?;

        if latitude.abs() > HALF_PI + RADIAN_SLACK {
            return Err(AstroError::math_error(
                "Location::from_radians",
                MathErrorKind::OutOfRange,
                &format!(
                    "Latitude {:.4}° out of range [-90°, +90°]",
                    latitude * RAD_TO_DEG
                ),
            ));
        }

        let longitude = if longitude.abs() <= PI + RADIAN_SLACK {
            longitude
        } else {
            normalize_longitude_deg(longitude * RAD_TO_DEG) * DEG_TO_RAD
        };

        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude_degrees(&self) -> f64 {
        self.latitude * RAD_TO_DEG
    }

    pub fn longitude_degrees(&self) -> f64 {
        self.longitude * RAD_TO_DEG
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}°, {:.2}°",
            self.latitude_degrees(),
            self.longitude_degrees()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TWOPI;

    #[test]
    fn test_from_degrees_round_trip() {
        let loc = Location::from_degrees(19.8283, -155.4783).unwrap();
        assert!((loc.latitude_degrees() - 19.8283).abs() < 1e-12);
        assert!((loc.longitude_degrees() + 155.4783).abs() < 1e-12);
    }

    #[test]
    fn test_longitude_is_normalized() {
        let east = Location::from_degrees(0.0, 370.0).unwrap();
        assert!((east.longitude_degrees() - 10.0).abs() < 1e-9);

        let west = Location::from_degrees(0.0, 200.0).unwrap();
        assert!((west.longitude_degrees() + 160.0).abs() < 1e-9);
    }

    #[test]
    fn test_poles_are_valid() {
        assert!(Location::from_degrees(90.0, 0.0).is_ok());
        assert!(Location::from_degrees(-90.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_latitude_fails_fast() {
        let err = Location::from_degrees(90.5, 0.0).unwrap_err();
        assert_eq!(err.math_kind(), Some(MathErrorKind::OutOfRange));
    }

    #[test]
    fn test_non_finite_longitude_rejected() {
        let err = Location::from_degrees(10.0, f64::NAN).unwrap_err();
        assert_eq!(err.math_kind(), Some(MathErrorKind::NotFinite));
    }

    #[test]
    fn test_display_matches_status_line_precision() {
        let loc = Location::from_degrees(40.7128, -74.006).unwrap();
        assert_eq!(loc.to_string(), "40.71°, -74.01°");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let loc = Location::from_degrees(-33.8688, 151.2093).unwrap();
        let json = serde_json::to_string(&loc).unwrap();
        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(loc, back);

        let pole = Location::from_degrees(90.0, 180.0).unwrap();
        let json = serde_json::to_string(&pole).unwrap();
        assert_eq!(serde_json::from_str::<Location>(&json).unwrap(), pole);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_bad_latitude() {
        let err = serde_json::from_str::<Location>(r#"{"latitude":2.0,"longitude":0.0}"#)
            .unwrap_err();
        assert!(err.to_string().contains("out of range"));

        let wrapped: Location =
            serde_json::from_str(r#"{"latitude":0.5,"longitude":7.0}"#).unwrap();
        assert!((wrapped.longitude - (7.0 - TWOPI)).abs() < 1e-12);
    }

    #[test]
    fn test_from_radians() {
        let loc = Location::from_radians(0.25, -1.5).unwrap();
        assert_eq!((loc.latitude, loc.longitude), (0.25, -1.5));

        let err = Location::from_radians(-1.6, 0.0).unwrap_err();
        assert_eq!(err.math_kind(), Some(MathErrorKind::OutOfRange));
        let err = Location::from_radians(0.0, f64::INFINITY).unwrap_err();
        assert_eq!(err.math_kind(), Some(MathErrorKind::NotFinite));

        let loc = Location::from_radians(0.0, -4.0).unwrap();
        assert!((loc.longitude - (TWOPI - 4.0)).abs() < 1e-12);
    }
}
