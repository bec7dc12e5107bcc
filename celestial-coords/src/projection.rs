//! Flattening the visible hemisphere onto a disc.
//!
//! The dome uses a zenithal equidistant mapping (FITS `ARC`): the radial
//! distance from the centre is proportional to zenith distance,
//!
//! ```text
//! r = (π/2 − h) / (π/2) · scale
//! x = r sin A
//! y = r cos A
//! ```
//!
//! so the zenith sits at the origin, the horizon on the circle of radius
//! `scale`, north at +y and east at +x. It is not a true stereographic
//! projection; `STG` would use `2 tan(z/2)` and stretch the rim.

use crate::horizontal::HorizontalPosition;
use crate::{CoordError, CoordResult};
use celestial_core::constants::HALF_PI;
use celestial_core::Angle;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_DOME_SCALE: f64 = 0.95;

/// Slack allowed when deciding whether a point lies on the disc.
const DISC_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

impl ProjectedPoint {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance from the dome centre.
    pub fn radius(&self) -> f64 {
        libm::hypot(self.x, self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CompassMarker {
    pub label: &'static str,
    pub point: ProjectedPoint,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DomeFields"))]
pub struct SkyDome {
    scale: f64,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct DomeFields {
    scale: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<DomeFields> for SkyDome {
    type Error = CoordError;

    fn try_from(fields: DomeFields) -> CoordResult<Self> {
        Self::new(fields.scale)
    }
}

impl Default for SkyDome {
    fn default() -> Self {
        Self {
            scale: DEFAULT_DOME_SCALE,
        }
    }
}

impl SkyDome {
    pub fn new(scale: f64) -> CoordResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(CoordError::invalid_projection(format!(
                "Dome scale must be finite and positive, got {}",
                scale
            )));
        }
        Ok(Self { scale })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Projects altitude and azimuth onto the disc.
    ///
    /// Altitude is clamped to [0, π/2] first, so the result never leaves the
    /// disc even for a target a hair below the horizon.
    pub fn project(&self, altitude: Angle, azimuth: Angle) -> ProjectedPoint {
        let altitude = altitude.radians().clamp(0.0, HALF_PI);
        let r = (HALF_PI - altitude) / HALF_PI * self.scale;
        let (sin_az, cos_az) = azimuth.sin_cos();
        ProjectedPoint::new(r * sin_az, r * cos_az)
    }

    /// `None` for a target below the horizon.
    pub fn project_horizontal(&self, position: &HorizontalPosition) -> Option<ProjectedPoint> {
        if !position.is_visible() {
            return None;
        }
        Some(self.project(position.altitude_angle(), position.azimuth_angle()))
    }

    /// Inverse of [`project`](Self::project): returns `(altitude, azimuth)`,
    /// or `None` for a point outside the disc.
    pub fn deproject(&self, point: ProjectedPoint) -> Option<(Angle, Angle)> {
        if !point.is_finite() {
            return None;
        }
        let r = point.radius();
        if r > self.scale + DISC_TOLERANCE {
            return None;
        }

        let altitude = Angle::HALF_PI - Angle::HALF_PI * (r / self.scale).min(1.0);
        let azimuth = if r == 0.0 {
            Angle::ZERO
        } else {
            Angle::from_radians(libm::atan2(point.x, point.y)).wrapped()
        };
        Some((altitude, azimuth))
    }

    /// Point on the rim at the given azimuth.
    pub fn horizon_point(&self, azimuth: Angle) -> ProjectedPoint {
        self.project(Angle::ZERO, azimuth)
    }

    /// North, east, south and west markers on the rim.
    pub fn compass(&self) -> [CompassMarker; 4] {
        [("N", 0.0), ("E", 90.0), ("S", 180.0), ("W", 270.0)].map(|(label, az_deg)| {
            CompassMarker {
                label,
                point: self.horizon_point(Angle::from_degrees(az_deg)),
            }
        })
    }
}
