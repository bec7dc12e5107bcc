//! Per-planet constants and the day-of-year placement model.
//!
//! | Planet  | RA period divisor | RA offset (h) | Dec amplitude (°) | Dec divisor | Color     | Size |
//! |---------|-------------------|---------------|-------------------|-------------|-----------|------|
//! | Mercury | 10                | 2             | 20                | 30          | `#cccccc` | 4    |
//! | Venus   | 20                | 5             | 15                | 40          | `#f9d849` | 6    |
//! | Mars    | 40                | 10            | 25                | 60          | `#dd361c` | 5    |
//! | Jupiter | 80                | 15            | 10                | 90          | `#e6a64d` | 10   |
//! | Saturn  | 100               | 20            | 15                | 120         | `#b8a355` | 9    |
//!
//! With `d` the day of the year:
//!
//! ```text
//! α = (d / period + offset) mod 24
//! δ = amplitude · sin(d / dec_divisor)
//! ```

use celestial_core::constants::HOURS_PER_DAY;
use celestial_core::math::positive_fmod;
use chrono::{Datelike, NaiveDate};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

/// Constants driving one planet's placement and its rendering hints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetModel {
    pub ra_period: f64,
    pub ra_offset_hours: f64,
    pub dec_amplitude_deg: f64,
    pub dec_period: f64,
    /// CSS hex color advised to renderers.
    pub color: &'static str,
    /// Relative disc size advised to renderers.
    pub size: f64,
    pub ringed: bool,
}

const MERCURY: PlanetModel = PlanetModel {
    ra_period: 10.0,
    ra_offset_hours: 2.0,
    dec_amplitude_deg: 20.0,
    dec_period: 30.0,
    color: "#cccccc",
    size: 4.0,
    ringed: false,
};

const VENUS: PlanetModel = PlanetModel {
    ra_period: 20.0,
    ra_offset_hours: 5.0,
    dec_amplitude_deg: 15.0,
    dec_period: 40.0,
    color: "#f9d849",
    size: 6.0,
    ringed: false,
};

const MARS: PlanetModel = PlanetModel {
    ra_period: 40.0,
    ra_offset_hours: 10.0,
    dec_amplitude_deg: 25.0,
    dec_period: 60.0,
    color: "#dd361c",
    size: 5.0,
    ringed: false,
};

const JUPITER: PlanetModel = PlanetModel {
    ra_period: 80.0,
    ra_offset_hours: 15.0,
    dec_amplitude_deg: 10.0,
    dec_period: 90.0,
    color: "#e6a64d",
    size: 10.0,
    ringed: false,
};

const SATURN: PlanetModel = PlanetModel {
    ra_period: 100.0,
    ra_offset_hours: 20.0,
    dec_amplitude_deg: 15.0,
    dec_period: 120.0,
    color: "#b8a355",
    size: 9.0,
    ringed: true,
};

impl Planet {
    /// Fixed output order of [`planet_positions`].
    pub const ALL: [Planet; 5] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
    ];

    pub fn model(&self) -> &'static PlanetModel {
        match self {
            Planet::Mercury => &MERCURY,
            Planet::Venus => &VENUS,
            Planet::Mars => &MARS,
            Planet::Jupiter => &JUPITER,
            Planet::Saturn => &SATURN,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
        }
    }

    pub fn position(&self, day_of_year: u32) -> PlanetPosition {
        let model = self.model();
        let d = day_of_year as f64;
        PlanetPosition {
            planet: *self,
            ra_hours: positive_fmod(d / model.ra_period + model.ra_offset_hours, HOURS_PER_DAY),
            dec_deg: model.dec_amplitude_deg * (d / model.dec_period).sin(),
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanetPosition {
    planet: Planet,
    ra_hours: f64,
    dec_deg: f64,
}

impl PlanetPosition {
    pub fn planet(&self) -> Planet {
        self.planet
    }

    pub fn name(&self) -> &'static str {
        self.planet.name()
    }

    pub fn ra_hours(&self) -> f64 {
        self.ra_hours
    }

    pub fn dec_degrees(&self) -> f64 {
        self.dec_deg
    }

    pub fn color(&self) -> &'static str {
        self.planet.model().color
    }

    pub fn size(&self) -> f64 {
        self.planet.model().size
    }

    pub fn is_ringed(&self) -> bool {
        self.planet.model().ringed
    }
}

/// Mercury, Venus, Mars, Jupiter and Saturn, in that order.
pub fn planet_positions(day_of_year: u32) -> Vec<PlanetPosition> {
    Planet::ALL.iter().map(|p| p.position(day_of_year)).collect()
}

/// Uses the 1-based ordinal day of `date` (1 January is day 1).
pub fn planet_positions_for_date(date: NaiveDate) -> Vec<PlanetPosition> {
    planet_positions(date.ordinal())
}
