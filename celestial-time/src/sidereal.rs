//! Greenwich and local mean sidereal time.
//!
//! GMST uses the cubic polynomial in Julian centuries from J2000.0
//! (Meeus, *Astronomical Algorithms*, eq. 12.4):
//!
//! ```text
//! θ₀ = 280.46061837° + 360.98564736629° · d + 0.000387933° · T² − T³ / 38710000
//! ```
//!
//! where `d` is days since J2000.0 and `T = d / 36525`. The result is wrapped
//! into [0°, 360°) before conversion to hours, and local sidereal time adds
//! `longitude / 15` hours and wraps again into [0h, 24h).

use crate::clock::ClockTime;
use crate::julian::JulianDate;
use crate::{TimeError, TimeResult};
use celestial_core::angle::{normalize_longitude_deg, require_finite, wrap_0_360, wrap_hours};
use celestial_core::Angle;
use celestial_core::constants::{DEGREES_PER_HOUR, HOURS_PER_DAY};
use chrono::NaiveDate;
use std::fmt;

/// Greenwich mean sidereal time in hours, in [0, 24).
pub fn greenwich_sidereal_hours(jd: &JulianDate) -> f64 {
    let d = jd.days_since_j2000();
    let t = jd.julian_centuries();

    let gst_deg =
        280.46061837 + 360.98564736629 * d + 0.000387933 * t * t - t * t * t / 38710000.0;

    wrap_0_360(gst_deg) / DEGREES_PER_HOUR
}

/// Local mean sidereal time for a calendar date, clock time and longitude.
///
/// `longitude_deg` is east-positive; `-74.0` and `286.0` give the same result.
pub fn local_sidereal_time(
    date: NaiveDate,
    time: ClockTime,
    longitude_deg: f64,
) -> TimeResult<LocalSiderealTime> {
    let jd = JulianDate::from_date_and_time(date, time)?;
    LocalSiderealTime::new(&jd, longitude_deg)
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSiderealTime {
    hours: f64,
}

impl LocalSiderealTime {
    pub fn new(jd: &JulianDate, longitude_deg: f64) -> TimeResult<Self> {
        require_finite("local_sidereal_time", "longitude", longitude_deg)?;
        if !jd.to_f64().is_finite() {
            return Err(TimeError::CalculationError(format!(
                "Julian date is not finite: {}",
                jd.to_f64()
            )));
        }

        let gst = greenwich_sidereal_hours(jd);
        let lon = normalize_longitude_deg(longitude_deg);

        Ok(Self {
            hours: wrap_hours(gst + lon / DEGREES_PER_HOUR),
        })
    }

    /// Wraps an arbitrary hour value into [0, 24).
    pub fn from_hours(hours: f64) -> Self {
        Self {
            hours: wrap_hours(hours),
        }
    }

    pub fn hours(&self) -> f64 {
        self.hours
    }

    pub fn degrees(&self) -> f64 {
        self.hours * DEGREES_PER_HOUR
    }

    /// Sidereal time as the hour angle of the vernal equinox.
    pub fn angle(&self) -> Angle {
        Angle::from_hours(self.hours)
    }

    /// Hour angle of a target in hours, in [-12, 12). Positive means west of the meridian.
    pub fn hour_angle_to_target(&self, target_ra_hours: f64) -> f64 {
        let half_day = HOURS_PER_DAY / 2.0;
        wrap_hours(self.hours - target_ra_hours + half_day) - half_day
    }
}

impl fmt::Display for LocalSiderealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = self.hours;
        let hh = h.floor() as u32;
        let mm = ((h - hh as f64) * 60.0).floor() as u32;
        let ss = (h - hh as f64) * 3600.0 - mm as f64 * 60.0;
        write!(f, "LST = {:02}h {:02}m {:06.3}s", hh, mm, ss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_gmst_at_j2000() {
        let hours = greenwich_sidereal_hours(&JulianDate::j2000());
        assert_abs_diff_eq!(hours, 280.46061837 / 15.0, epsilon = 1e-9);
    }

    #[test]
    fn test_gmst_meeus_example() {
        // Meeus example 12.b: 1987 April 10, 19h21m00s UT -> 8h34m57.0896s
        let jd = JulianDate::from_calendar(1987, 4, 10, 19.35).unwrap();
        let expected = 8.0 + 34.0 / 60.0 + 57.0896 / 3600.0;
        assert_abs_diff_eq!(greenwich_sidereal_hours(&jd), expected, epsilon = 1e-4);
    }

    #[test]
    fn test_lst_at_greenwich_equals_gmst() {
        let jd = JulianDate::from_calendar(2021, 8, 12, 22.5).unwrap();
        let lst = LocalSiderealTime::new(&jd, 0.0).unwrap();
        assert_eq!(lst.hours(), greenwich_sidereal_hours(&jd));
    }

    #[test]
    fn test_lst_longitude_correction() {
        let jd = JulianDate::from_calendar(2021, 8, 12, 22.5).unwrap();
        let greenwich = LocalSiderealTime::new(&jd, 0.0).unwrap();
        let east = LocalSiderealTime::new(&jd, 15.0).unwrap();
        let west = LocalSiderealTime::new(&jd, -15.0).unwrap();

        assert_abs_diff_eq!(east.hour_angle_to_target(greenwich.hours()), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(west.hour_angle_to_target(greenwich.hours()), -1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_lst_invariant_under_full_turn_of_longitude() {
        for lon in [-179.9, -74.006, 0.0, 0.5, 45.0, 139.69, 180.0] {
            let a = local_sidereal_time(date(2024, 8, 12), "21:30".parse().unwrap(), lon).unwrap();
            let b = local_sidereal_time(date(2024, 8, 12), "21:30".parse().unwrap(), lon + 360.0)
                .unwrap();
            let diff = a.hour_angle_to_target(b.hours());
            assert!(diff.abs() < 1e-9, "lon {} differs by {} h", lon, diff);
        }
    }

    #[test]
    fn test_lst_always_in_range() {
        for day in 1..=28 {
            for (hour, lon) in [(0, -180.0), (6, -90.0), (12, 0.0), (18, 90.0), (23, 179.99)] {
                let time = ClockTime::new(hour, 59).unwrap();
                let lst = local_sidereal_time(date(1999, 2, day), time, lon).unwrap();
                assert!(
                    (0.0..24.0).contains(&lst.hours()),
                    "LST out of range: {}",
                    lst.hours()
                );
            }
        }
    }

    #[test]
    fn test_lst_rejects_non_finite_longitude() {
        let jd = JulianDate::j2000();
        assert!(matches!(
            LocalSiderealTime::new(&jd, f64::NAN),
            Err(TimeError::Core(_))
        ));
        let bad = JulianDate::from_f64(f64::INFINITY);
        assert!(matches!(
            LocalSiderealTime::new(&bad, 0.0),
            Err(TimeError::CalculationError(_))
        ));
    }

    #[test]
    fn test_hour_angle_wraps() {
        let lst = LocalSiderealTime::from_hours(1.0);
        assert_abs_diff_eq!(lst.hour_angle_to_target(23.0), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(lst.hour_angle_to_target(3.0), -2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_accessors_and_display() {
        let lst = LocalSiderealTime::from_hours(-1.5);
        assert_eq!(lst.hours(), 22.5);
        assert_eq!(lst.degrees(), 337.5);
        assert_abs_diff_eq!(lst.angle().degrees(), 337.5, epsilon = 1e-12);
        assert_eq!(lst.to_string(), "LST = 22h 30m 00.000s");
    }
}
