use crate::{CatalogError, CatalogResult};
use celestial_core::angle::validate_declination_deg;
use celestial_core::constants::HOURS_PER_DAY;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A catalog star at its J2000-ish mean position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "StarFields"))]
pub struct Star {
    name: String,
    ra_hours: f64,
    dec_deg: f64,
    magnitude: f64,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct StarFields {
    name: String,
    ra_hours: f64,
    dec_deg: f64,
    magnitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<StarFields> for Star {
    type Error = CatalogError;

    fn try_from(fields: StarFields) -> CatalogResult<Self> {
        Self::new(fields.name, fields.ra_hours, fields.dec_deg, fields.magnitude)
    }
}

impl Star {
    pub fn new(
        name: impl Into<String>,
        ra_hours: f64,
        dec_deg: f64,
        magnitude: f64,
    ) -> CatalogResult<Self> {
        let star = Self {
            name: name.into(),
            ra_hours,
            dec_deg,
            magnitude,
        };
        star.validate()?;
        Ok(star)
    }

    pub(crate) fn validate(&self) -> CatalogResult<()> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::invalid_entry(&self.name, "name is empty"));
        }
        if !self.ra_hours.is_finite() || !(0.0..HOURS_PER_DAY).contains(&self.ra_hours) {
            return Err(CatalogError::invalid_entry(
                &self.name,
                format!("RA {} h outside [0, 24)", self.ra_hours),
            ));
        }
        validate_declination_deg(self.dec_deg)
            .map_err(|e| CatalogError::invalid_entry(&self.name, e.to_string()))?;
        if !self.magnitude.is_finite() {
            return Err(CatalogError::invalid_entry(
                &self.name,
                format!("magnitude is not finite ({})", self.magnitude),
            ));
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ra_hours(&self) -> f64 {
        self.ra_hours
    }

    pub fn dec_degrees(&self) -> f64 {
        self.dec_deg
    }

    /// Apparent visual magnitude; smaller is brighter.
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }
}

/// Name, RA (hours), Dec (degrees), V magnitude, brightest first.
pub(crate) const BRIGHT_STARS: [(&str, f64, f64, f64); 20] = [
    ("Sirius", 6.75, -16.7, -1.46),
    ("Canopus", 6.4, -52.7, -0.74),
    ("Alpha Centauri", 14.66, -60.83, -0.27),
    ("Arcturus", 14.26, 19.18, -0.05),
    ("Vega", 18.62, 38.78, 0.03),
    ("Capella", 5.28, 46.0, 0.08),
    ("Rigel", 5.24, -8.2, 0.13),
    ("Procyon", 7.65, 5.21, 0.4),
    ("Betelgeuse", 5.92, 7.41, 0.45),
    ("Achernar", 1.63, -57.24, 0.45),
    ("Hadar", 14.06, -60.37, 0.61),
    ("Altair", 19.85, 8.87, 0.76),
    ("Aldebaran", 4.6, 16.51, 0.87),
    ("Antares", 16.49, -26.43, 1.09),
    ("Spica", 13.42, -11.16, 1.04),
    ("Pollux", 7.76, 28.03, 1.16),
    ("Fomalhaut", 22.96, -29.62, 1.17),
    ("Deneb", 20.69, 45.28, 1.25),
    ("Regulus", 10.14, 11.97, 1.36),
    ("Adhara", 6.98, -28.97, 1.5),
];

pub(crate) fn builtin_stars() -> Vec<Star> {
    BRIGHT_STARS
        .iter()
        .map(|&(name, ra_hours, dec_deg, magnitude)| Star {
            name: name.to_string(),
            ra_hours,
            dec_deg,
            magnitude,
        })
        .collect()
}
