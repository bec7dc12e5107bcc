use crate::{CatalogError, CatalogResult};
use celestial_core::angle::validate_declination_deg;
use celestial_core::constants::HOURS_PER_DAY;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fewest points a constellation may define, and the fewest that must be
/// above the horizon before it is drawn.
pub const MIN_CONSTELLATION_POINTS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstellationPoint {
    label: String,
    ra_hours: f64,
    dec_deg: f64,
}

impl ConstellationPoint {
    pub fn new(label: impl Into<String>, ra_hours: f64, dec_deg: f64) -> Self {
        Self {
            label: label.into(),
            ra_hours,
            dec_deg,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn ra_hours(&self) -> f64 {
        self.ra_hours
    }

    pub fn dec_degrees(&self) -> f64 {
        self.dec_deg
    }
}

/// A named polyline through ordered points. Points may repeat catalog stars.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Constellation {
    name: String,
    points: Vec<ConstellationPoint>,
}

impl Constellation {
    pub fn new(name: impl Into<String>, points: Vec<ConstellationPoint>) -> CatalogResult<Self> {
        let constellation = Self {
            name: name.into(),
            points,
        };
        constellation.validate()?;
        Ok(constellation)
    }

    pub(crate) fn validate(&self) -> CatalogResult<()> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::invalid_entry(&self.name, "name is empty"));
        }
        if self.points.len() < MIN_CONSTELLATION_POINTS {
            return Err(CatalogError::TooFewPoints {
                name: self.name.clone(),
                count: self.points.len(),
                min: MIN_CONSTELLATION_POINTS,
            });
        }
        for point in &self.points {
            if !point.ra_hours.is_finite() || !(0.0..HOURS_PER_DAY).contains(&point.ra_hours) {
                return Err(CatalogError::invalid_entry(
                    &self.name,
                    format!("point '{}' RA {} h outside [0, 24)", point.label, point.ra_hours),
                ));
            }
            validate_declination_deg(point.dec_deg).map_err(|e| {
                CatalogError::invalid_entry(&self.name, format!("point '{}': {}", point.label, e))
            })?;
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Points in drawing order.
    pub fn points(&self) -> &[ConstellationPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

type PointEntry = (&'static str, f64, f64);

const BIG_DIPPER: [PointEntry; 7] = [
    ("Dubhe", 11.03, 56.38),
    ("Merak", 11.03, 61.75),
    ("Phecda", 11.90, 53.70),
    ("Megrez", 12.26, 57.03),
    ("Alioth", 12.90, 55.96),
    ("Mizar", 13.40, 54.93),
    ("Alkaid", 13.79, 49.31),
];

const ORION: [PointEntry; 7] = [
    ("Betelgeuse", 5.92, 7.41),
    ("Rigel", 5.24, -8.20),
    ("Bellatrix", 5.60, -1.94),
    ("Mintaka", 5.68, -1.20),
    ("Alnilam", 5.54, -0.30),
    ("Alnitak", 5.53, -0.02),
    ("Saiph", 5.41, -2.40),
];

pub(crate) fn builtin_constellations() -> Vec<Constellation> {
    [("Big Dipper", &BIG_DIPPER), ("Orion", &ORION)]
        .into_iter()
        .map(|(name, entries)| Constellation {
            name: name.to_string(),
            points: entries
                .iter()
                .map(|&(label, ra, dec)| ConstellationPoint::new(label, ra, dec))
                .collect(),
        })
        .collect()
}
