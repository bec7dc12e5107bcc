//! Simplified moon for the sky chart.
//!
//! Phase comes from a linear day count divided by a mean synodic month of
//! 29.53 days. The count is the compact
//!
//! ```text
//! n = 365.25 · year + 30.6 · month + day − 694039.09
//! ```
//!
//! which is only monotonic within a month; consecutive calendar days that
//! straddle a month boundary can jump by a day or so. Position is a stand-in:
//! the moon is placed six hours of right ascension east of the meridian and
//! swings ±23.4° in declination once per lunation. Neither is an ephemeris.

use crate::equatorial::EquatorialPosition;
use crate::{CoordError, CoordResult};
use celestial_core::constants::{J2000_OBLIQUITY_DEG, TWOPI};
use celestial_core::math::positive_fmod;
use chrono::{Datelike, NaiveDate};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const SYNODIC_MONTH_DAYS: f64 = 29.53;

const LUNAR_EPOCH_OFFSET: f64 = 694039.09;

/// Right-ascension lead of the moon over local sidereal time, in hours.
const MOON_RA_LEAD_HOURS: f64 = 6.0;

pub fn lunar_day_number(year: i32, month: u32, day: u32) -> f64 {
    365.25 * year as f64 + 30.6 * month as f64 + day as f64 - LUNAR_EPOCH_OFFSET
}

/// Fraction of the synodic month elapsed, in [0, 1). 0 is new, 0.5 is full.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct MoonPhase(f64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PhaseName {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    pub fn new(fraction: f64) -> CoordResult<Self> {
        if !fraction.is_finite() {
            return Err(CoordError::invalid_coordinate(format!(
                "Moon phase is not finite: {}",
                fraction
            )));
        }
        Ok(Self(positive_fmod(fraction, 1.0)))
    }

    pub fn from_day_number(day_number: f64) -> Self {
        Self(positive_fmod(day_number / SYNODIC_MONTH_DAYS, 1.0))
    }

    pub fn fraction(&self) -> f64 {
        self.0
    }

    /// Lit fraction of the disc, `(1 − cos 2πp) / 2`.
    pub fn illuminated_fraction(&self) -> f64 {
        (1.0 - (TWOPI * self.0).cos()) / 2.0
    }

    pub fn is_waxing(&self) -> bool {
        self.0 < 0.5
    }

    /// Nearest of the eight named phases; each name covers an eighth of the cycle
    /// centred on its nominal fraction.
    pub fn name(&self) -> PhaseName {
        const NAMES: [PhaseName; 8] = [
            PhaseName::New,
            PhaseName::WaxingCrescent,
            PhaseName::FirstQuarter,
            PhaseName::WaxingGibbous,
            PhaseName::Full,
            PhaseName::WaningGibbous,
            PhaseName::LastQuarter,
            PhaseName::WaningCrescent,
        ];
        let index = (self.0 * 8.0 + 0.5).floor() as usize % 8;
        NAMES[index]
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.0}% lit)", self.name(), self.illuminated_fraction() * 100.0)
    }
}

impl PhaseName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }
}

impl fmt::Display for PhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn moon_phase(date: NaiveDate) -> MoonPhase {
    MoonPhase::from_day_number(lunar_day_number(date.year(), date.month(), date.day()))
}

pub fn moon_position(lst_hours: f64, phase: MoonPhase) -> CoordResult<EquatorialPosition> {
    let ra = lst_hours + MOON_RA_LEAD_HOURS;
    let dec = J2000_OBLIQUITY_DEG * (TWOPI * phase.fraction()).sin();
    EquatorialPosition::new(ra, dec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn circular_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).abs();
        d.min(1.0 - d)
    }

    #[test]
    fn test_day_number_formula() {
        assert_abs_diff_eq!(
            lunar_day_number(2024, 1, 1),
            365.25 * 2024.0 + 30.6 + 1.0 - 694039.09,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_phase_in_unit_interval() {
        let mut date = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(1993, 1, 1).unwrap();
        while date < end {
            let p = moon_phase(date).fraction();
            assert!((0.0..1.0).contains(&p), "{} gave phase {}", date, p);
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_phase_periodic_over_synodic_month() {
        for start in [-1000.0, 0.0, 12.25, 45_000.7, 98_765.4] {
            let a = MoonPhase::from_day_number(start).fraction();
            let b = MoonPhase::from_day_number(start + SYNODIC_MONTH_DAYS).fraction();
            assert!(circular_distance(a, b) < 0.01, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_phase_advances_within_month() {
        let d1 = moon_phase(NaiveDate::from_ymd_opt(2024, 5, 3).unwrap());
        let d2 = moon_phase(NaiveDate::from_ymd_opt(2024, 5, 4).unwrap());
        let step = positive_fmod(d2.fraction() - d1.fraction(), 1.0);
        assert_abs_diff_eq!(step, 1.0 / SYNODIC_MONTH_DAYS, epsilon = 1e-9);
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(MoonPhase::new(0.0).unwrap().name(), PhaseName::New);
        assert_eq!(MoonPhase::new(0.98).unwrap().name(), PhaseName::New);
        assert_eq!(MoonPhase::new(0.25).unwrap().name(), PhaseName::FirstQuarter);
        assert_eq!(MoonPhase::new(0.5).unwrap().name(), PhaseName::Full);
        assert_eq!(MoonPhase::new(0.6).unwrap().name(), PhaseName::WaningGibbous);
        assert_eq!(MoonPhase::new(0.75).unwrap().name(), PhaseName::LastQuarter);
        assert_eq!(PhaseName::WaxingCrescent.to_string(), "Waxing Crescent");
    }

    #[test]
    fn test_illuminated_fraction() {
        assert_abs_diff_eq!(MoonPhase::new(0.0).unwrap().illuminated_fraction(), 0.0);
        assert_abs_diff_eq!(MoonPhase::new(0.5).unwrap().illuminated_fraction(), 1.0);
        assert_abs_diff_eq!(
            MoonPhase::new(0.25).unwrap().illuminated_fraction(),
            0.5,
            epsilon = 1e-12
        );
        assert_eq!(MoonPhase::new(0.5).unwrap().to_string(), "Full Moon (100% lit)");
    }

    #[test]
    fn test_new_wraps_and_rejects_nan() {
        assert_abs_diff_eq!(MoonPhase::new(1.25).unwrap().fraction(), 0.25);
        assert_abs_diff_eq!(MoonPhase::new(-0.25).unwrap().fraction(), 0.75);
        assert!(MoonPhase::new(f64::NAN).is_err());
    }

    #[test]
    fn test_moon_position() {
        let pos = moon_position(20.0, MoonPhase::new(0.25).unwrap()).unwrap();
        assert_abs_diff_eq!(pos.ra_hours(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pos.dec_degrees(), 23.4, epsilon = 1e-12);

        let pos = moon_position(3.0, MoonPhase::new(0.75).unwrap()).unwrap();
        assert_abs_diff_eq!(pos.ra_hours(), 9.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pos.dec_degrees(), -23.4, epsilon = 1e-12);

        assert!(moon_position(f64::NAN, MoonPhase::new(0.1).unwrap()).is_err());
    }
}
