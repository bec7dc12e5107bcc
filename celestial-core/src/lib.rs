//! Shared building blocks for the night sky engine.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`], degree/radian/hour conversions, wrapping, range validation |
//! | [`constants`] | epochs and angular constants |
//! | [`errors`] | [`AstroError`] and [`MathErrorKind`] |
//! | [`location`] | validated observer [`Location`] |
//! | [`math`] | domain-safe inverse trig and floating modulo |

pub mod angle;
pub mod constants;
pub mod errors;
pub mod location;
pub mod math;

pub use angle::Angle;
pub use errors::{AstroError, AstroResult, MathErrorKind};
pub use location::Location;
