//! Approximate positions of the five naked-eye planets.
//!
//! This is a visual placement model, not an ephemeris: each planet drifts
//! linearly in right ascension and oscillates in declination as a function of
//! the day of the year alone. Real orbital elements, light time and the
//! Earth's own motion are all ignored, so the positions are only plausible in
//! shape, not in detail.
//!
//! ```
//! use celestial_ephemeris::{planet_positions, Planet};
//!
//! let positions = planet_positions(0);
//! assert_eq!(positions[0].planet(), Planet::Mercury);
//! assert_eq!(positions[0].ra_hours(), 2.0);
//! ```

pub mod planets;

pub use planets::{planet_positions, planet_positions_for_date, Planet, PlanetModel, PlanetPosition};
