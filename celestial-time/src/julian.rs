use crate::clock::ClockTime;
use crate::{TimeError, TimeResult};
use celestial_core::constants::{DAYS_PER_JULIAN_CENTURY, HOURS_PER_DAY, J2000_JD};
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Two-part Julian Date: `jd1` holds the midnight epoch, `jd2` the day fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    pub jd1: f64,
    pub jd2: f64,
}

impl JulianDate {
    pub fn new(jd1: f64, jd2: f64) -> Self {
        Self { jd1, jd2 }
    }

    pub fn from_f64(jd: f64) -> Self {
        Self::new(jd, 0.0)
    }

    pub fn j2000() -> Self {
        Self::new(J2000_JD, 0.0)
    }

    pub fn jd1(&self) -> f64 {
        self.jd1
    }

    pub fn jd2(&self) -> f64 {
        self.jd2
    }

    pub fn to_f64(&self) -> f64 {
        self.jd1 + self.jd2
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self::new(self.jd1, self.jd2 + days)
    }

    /// Days elapsed since J2000.0, summed part-wise to keep precision.
    pub fn days_since_j2000(&self) -> f64 {
        (self.jd1 - J2000_JD) + self.jd2
    }

    pub fn julian_centuries(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_JULIAN_CENTURY
    }

    /// Julian Date for a Gregorian calendar day plus decimal hours.
    ///
    /// Uses the compact formula
    /// `367y - ⌊7(y + ⌊(m+9)/12⌋)/4⌋ + ⌊275m/9⌋ + d + 1721013.5`, which omits the
    /// Gregorian century correction and is therefore exact only for
    /// 1 March 1900 through 28 February 2100. Outside that window the result
    /// drifts by a day per skipped leap century; the sky chart does not
    /// guard against it.
    ///
    /// ```
    /// use celestial_time::JulianDate;
    ///
    /// let jd = JulianDate::from_calendar(2000, 1, 1, 12.0)?;
    /// assert_eq!(jd.to_f64(), 2451545.0);
    /// # Ok::<(), celestial_time::TimeError>(())
    /// ```
    pub fn from_calendar(year: i32, month: u32, day: u32, hours: f64) -> TimeResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate(format!(
                "Month out of range: {}",
                month
            )));
        }
        if !(1..=31).contains(&day) {
            return Err(TimeError::InvalidDate(format!("Day out of range: {}", day)));
        }
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(TimeError::InvalidDate(format!(
                "No such day: {}-{:02}-{:02}",
                year, month, day
            )));
        }
        if !hours.is_finite() || !(0.0..HOURS_PER_DAY).contains(&hours) {
            return Err(TimeError::InvalidDate(format!(
                "Hour fraction out of range [0, 24): {}",
                hours
            )));
        }

        let y = year as f64;
        let m = month as f64;
        let d = day as f64;

        let jd1 = 367.0 * y - (7.0 * (y + ((m + 9.0) / 12.0).floor()) / 4.0).floor()
            + (275.0 * m / 9.0).floor()
            + d
            + 1721013.5;
        let jd2 = hours / HOURS_PER_DAY;

        Ok(Self::new(jd1, jd2))
    }

    /// Julian Date for a validated calendar date and wall-clock time.
    pub fn from_date_and_time(date: NaiveDate, time: ClockTime) -> TimeResult<Self> {
        Self::from_calendar(date.year(), date.month(), date.day(), time.hour_fraction())
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.to_f64())
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        Self::from_f64(jd)
    }
}
