//! Static bright-star and constellation tables.
//!
//! The built-in [`Catalog`] holds the twenty brightest stars of the night
//! sky and two asterisms drawn as polylines. It is built once per process and
//! shared through an [`Arc`](std::sync::Arc):
//!
//! ```
//! use celestial_catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//! let sirius = catalog.star("Sirius").unwrap();
//! assert_eq!(sirius.magnitude(), -1.46);
//! assert_eq!(catalog.constellations().len(), 2);
//! ```
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`stars`] | [`Star`] records and the built-in bright-star table |
//! | [`constellations`] | [`Constellation`] polylines and the built-in asterisms |
//! | [`catalog`] | The validated, read-only [`Catalog`] value |
//!
//! # Features
//!
//! - **`serde`**: serialization for every type, plus
//!   [`Catalog::from_json_str`] for loading a custom catalog. Deserialized
//!   catalogs pass through the same validation as [`Catalog::new`].

pub mod catalog;
pub mod constellations;
pub mod errors;
pub mod stars;

pub use catalog::Catalog;
pub use constellations::{Constellation, ConstellationPoint, MIN_CONSTELLATION_POINTS};
pub use errors::{CatalogError, CatalogResult};
pub use stars::Star;
