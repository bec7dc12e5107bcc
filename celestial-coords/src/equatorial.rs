use crate::horizontal::{is_circumpolar, never_rises, to_horizontal, HorizontalPosition};
use crate::{CoordError, CoordResult};
use celestial_core::angle::{validate_declination_deg, wrap_hours};
use celestial_core::Angle;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Right ascension in hours [0, 24) and declination in degrees [-90, 90].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PositionFields"))]
pub struct EquatorialPosition {
    ra_hours: f64,
    dec_deg: f64,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct PositionFields {
    ra_hours: f64,
    dec_deg: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<PositionFields> for EquatorialPosition {
    type Error = CoordError;

    fn try_from(fields: PositionFields) -> CoordResult<Self> {
        Self::new(fields.ra_hours, fields.dec_deg)
    }
}

impl EquatorialPosition {
    /// Right ascension is wrapped into [0, 24); declination outside
    /// [-90, 90] or any non-finite value is rejected.
    pub fn new(ra_hours: f64, dec_deg: f64) -> CoordResult<Self> {
        if !ra_hours.is_finite() {
            return Err(CoordError::invalid_coordinate(format!(
                "Right ascension is not finite: {}",
                ra_hours
            )));
        }
        let dec_deg = validate_declination_deg(dec_deg)?;

        Ok(Self {
            ra_hours: wrap_hours(ra_hours),
            dec_deg,
        })
    }

    pub fn ra_hours(&self) -> f64 {
        self.ra_hours
    }

    pub fn dec_degrees(&self) -> f64 {
        self.dec_deg
    }

    pub fn ra(&self) -> Angle {
        Angle::from_hours(self.ra_hours)
    }

    pub fn dec(&self) -> Angle {
        Angle::from_degrees(self.dec_deg)
    }

    pub fn to_horizontal(&self, lst_hours: f64, lat_deg: f64) -> HorizontalPosition {
        to_horizontal(self.ra_hours, self.dec_deg, lst_hours, lat_deg)
    }

    pub fn is_circumpolar(&self, lat_deg: f64) -> bool {
        is_circumpolar(self.dec_deg, lat_deg)
    }

    pub fn never_rises(&self, lat_deg: f64) -> bool {
        never_rises(self.dec_deg, lat_deg)
    }
}

impl fmt::Display for EquatorialPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RA {:.2}h, Dec {:+.2}°", self.ra_hours, self.dec_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ra_is_wrapped() {
        let pos = EquatorialPosition::new(25.5, 10.0).unwrap();
        assert_eq!(pos.ra_hours(), 1.5);
        let pos = EquatorialPosition::new(-1.0, 10.0).unwrap();
        assert_eq!(pos.ra_hours(), 23.0);
    }

    #[test]
    fn test_angle_accessors() {
        let pos = EquatorialPosition::new(6.0, -45.0).unwrap();
        assert!((pos.ra().degrees() - 90.0).abs() < 1e-12);
        assert!((pos.dec().degrees() + 45.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_declination() {
        let err = EquatorialPosition::new(1.0, 95.0).unwrap_err();
        assert!(matches!(err, CoordError::CoreError { .. }));
        assert!(EquatorialPosition::new(1.0, f64::NAN).is_err());
        assert!(matches!(
            EquatorialPosition::new(f64::INFINITY, 0.0),
            Err(CoordError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_to_horizontal_delegates() {
        let sirius = EquatorialPosition::new(6.75, -16.7).unwrap();
        let direct = to_horizontal(6.75, -16.7, 4.0, 40.7);
        assert_eq!(sirius.to_horizontal(4.0, 40.7), direct);
    }

    #[test]
    fn test_display() {
        let pos = EquatorialPosition::new(6.75, -16.7).unwrap();
        assert_eq!(pos.to_string(), "RA 6.75h, Dec -16.70°");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_goes_through_new() {
        let pos: EquatorialPosition =
            serde_json::from_str(r#"{"ra_hours":25.5,"dec_deg":-16.7}"#).unwrap();
        assert_eq!(pos.ra_hours(), 1.5);
        assert_eq!(pos.dec_degrees(), -16.7);

        let round = serde_json::to_string(&pos).unwrap();
        assert_eq!(serde_json::from_str::<EquatorialPosition>(&round).unwrap(), pos);

        assert!(serde_json::from_str::<EquatorialPosition>(r#"{"ra_hours":1.0,"dec_deg":95.0}"#)
            .is_err());
    }
}
