//! Time handling for the night sky engine.
//!
//! The engine's time model is a calendar date plus a
//! wall-clock `HH:MM`, turned into a [`JulianDate`] and from there into
//! Greenwich and local sidereal time. There are no time scales (TT, TAI,
//! UT1): the clock time is treated as universal time and the sidereal-time
//! polynomial is accurate to well under a second over 1900-2100, which is far
//! below what a sky chart can show.

pub mod clock;
pub mod errors;
pub mod julian;
pub mod sidereal;

pub use clock::ClockTime;
pub use errors::{TimeError, TimeResult};
pub use julian::JulianDate;
pub use sidereal::{greenwich_sidereal_hours, local_sidereal_time, LocalSiderealTime};
