pub const J2000_JD: f64 = 2451545.0;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

pub const HOURS_PER_DAY: f64 = 24.0;

pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Degrees of rotation per hour of right ascension or sidereal time.
pub const DEGREES_PER_HOUR: f64 = 15.0;

pub const DEGREES_PER_CIRCLE: f64 = 360.0;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

/// Radians per hour of right ascension (15 degrees).
pub const HOURS_TO_RAD: f64 = DEGREES_PER_HOUR * DEG_TO_RAD;

/// Mean obliquity of the ecliptic at J2000.0, in degrees.
///
/// Used as the declination amplitude of the phase-driven lunar model.
pub const J2000_OBLIQUITY_DEG: f64 = 23.4;
