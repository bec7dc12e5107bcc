//! Where a catalog position lands in the observer's sky.
//!
//! [`to_horizontal`] turns right ascension and declination into altitude and
//! azimuth for a given latitude and local sidereal time, [`SkyDome`] maps the
//! visible hemisphere onto a flat disc, and [`lunar`] supplies the simplified
//! moon used by the sky chart.

pub mod equatorial;
pub mod errors;
pub mod horizontal;
pub mod lunar;
pub mod projection;

pub use equatorial::EquatorialPosition;
pub use errors::{CoordError, CoordResult};
pub use horizontal::{is_circumpolar, never_rises, to_horizontal, HorizontalPosition};
pub use lunar::{moon_phase, moon_position, MoonPhase, PhaseName};
pub use projection::{CompassMarker, ProjectedPoint, SkyDome, DEFAULT_DOME_SCALE};
