//! The observer's date, clock time and place.

use crate::{SkyError, SkyResult};
use celestial_coords::{moon_phase, MoonPhase};
use celestial_core::angle::{normalize_longitude_deg, require_finite, validate_latitude_deg};
use celestial_core::Location;
use celestial_time::{local_sidereal_time, ClockTime, JulianDate, LocalSiderealTime};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// New York City, the chart's starting location.
pub const DEFAULT_LATITUDE_DEG: f64 = 40.7128;
pub const DEFAULT_LONGITUDE_DEG: f64 = -74.006;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated (date, clock time, latitude, longitude) tuple.
///
/// The clock time is read as Universal Time. Latitude must lie in
/// [-90°, 90°]; longitude may be any finite east-positive value and is
/// folded into (-180°, 180°].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MomentFields")]
pub struct ObserverMoment {
    date: NaiveDate,
    time: ClockTime,
    latitude_deg: f64,
    longitude_deg: f64,
}

#[derive(Deserialize)]
struct MomentFields {
    date: NaiveDate,
    time: ClockTime,
    latitude_deg: f64,
    longitude_deg: f64,
}

impl TryFrom<MomentFields> for ObserverMoment {
    type Error = SkyError;

    fn try_from(fields: MomentFields) -> SkyResult<Self> {
        Self::new(fields.date, fields.time, fields.latitude_deg, fields.longitude_deg)
    }
}

impl ObserverMoment {
    pub fn new(
        date: NaiveDate,
        time: ClockTime,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> SkyResult<Self> {
        let latitude_deg = validate_latitude_deg(latitude_deg)?;
        let longitude_deg = require_finite("observer", "longitude", longitude_deg)?;

        Ok(Self {
            date,
            time,
            latitude_deg,
            longitude_deg: normalize_longitude_deg(longitude_deg),
        })
    }

    /// Parses a `YYYY-MM-DD` date and an `HH:MM` clock time.
    pub fn parse(date: &str, time: &str, latitude_deg: f64, longitude_deg: f64) -> SkyResult<Self> {
        let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).map_err(|e| {
            SkyError::InvalidObserver(format!(
                "Invalid date '{}': {}. Expected YYYY-MM-DD",
                date, e
            ))
        })?;
        let time: ClockTime = time.parse()?;
        Self::new(date, time, latitude_deg, longitude_deg)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> ClockTime {
        self.time
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    pub fn location(&self) -> SkyResult<Location> {
        Ok(Location::from_degrees(self.latitude_deg, self.longitude_deg)?)
    }

    pub fn julian_date(&self) -> SkyResult<JulianDate> {
        Ok(JulianDate::from_date_and_time(self.date, self.time)?)
    }

    pub fn local_sidereal_time(&self) -> SkyResult<LocalSiderealTime> {
        Ok(local_sidereal_time(self.date, self.time, self.longitude_deg)?)
    }

    /// 1-based ordinal day of the year.
    pub fn day_of_year(&self) -> u32 {
        self.date.ordinal()
    }

    pub fn moon_phase(&self) -> MoonPhase {
        moon_phase(self.date)
    }

    /// Text whose character codes seed the background star field.
    pub fn seed_text(&self) -> String {
        format!(
            "{}T00:00:00.000Z-{}-{}-{}",
            self.date.format(DATE_FORMAT),
            self.time,
            self.latitude_deg,
            self.longitude_deg
        )
    }
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// `August 12th, 2024 at 21:30 | 40.71°, -74.01°`
impl fmt::Display for ObserverMoment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day = self.date.day();
        write!(
            f,
            "{} {}{}, {} at {} | {:.2}°, {:.2}°",
            self.date.format("%B"),
            day,
            ordinal_suffix(day),
            self.date.year(),
            self.time,
            self.latitude_deg,
            self.longitude_deg
        )
    }
}
