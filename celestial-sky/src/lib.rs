//! Night sky scenes for a date, a clock time and a place.
//!
//! The crate ties the celestial workspace together. An [`ObserverMoment`]
//! fixes when and where; [`compute_scene`] (or a reusable [`SkyEngine`])
//! runs every catalog star, planet and the moon through sidereal time, the
//! horizontal transform and the dome projection, and returns a [`Scene`]
//! that a renderer can draw without doing any astronomy of its own.
//!
//! ```
//! use celestial_sky::{ObserverMoment, SkyEngine};
//!
//! let moment = ObserverMoment::parse("2024-08-12", "21:30", 40.7128, -74.006)?;
//! let scene = SkyEngine::default().compute(&moment)?;
//!
//! assert_eq!(scene.stars.len(), 20);
//! assert_eq!(scene.planets.len(), 5);
//! for star in scene.visible_stars() {
//!     let p = star.projected.unwrap();
//!     assert!(p.x * p.x + p.y * p.y <= scene.dome_scale * scene.dome_scale + 1e-12);
//! }
//! # Ok::<(), celestial_sky::SkyError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`moment`] | [`ObserverMoment`] validation, sidereal time, status line |
//! | [`scene`] | [`compute_scene`], [`SkyEngine`] and the scene types |
//! | [`object`] | [`Plottable`] and the [`CelestialObject`] view |
//! | [`config`] | [`SceneConfig`] and its JSON form |
//! | [`style`] | Star size and emphasis hints |
//! | [`background`] | Seeded decorative star field |
//! | [`boundary`] | [`Geocoder`] and [`Narrator`] traits |
//!
//! # Logging
//!
//! The pipeline emits `tracing` events (`debug` per scene, `trace` per
//! constellation decision). Installing a subscriber is left to the binary.

pub mod background;
pub mod boundary;
pub mod config;
pub mod errors;
pub mod moment;
pub mod object;
pub mod scene;
pub mod style;

pub use background::{background_field, BackgroundStar, SeededRandom};
pub use boundary::{GeoLocation, Geocoder, NarrationRequest, Narrator};
pub use config::SceneConfig;
pub use errors::{SkyError, SkyResult};
pub use moment::{ObserverMoment, DEFAULT_LATITUDE_DEG, DEFAULT_LONGITUDE_DEG};
pub use object::{CelestialObject, Plottable};
pub use scene::{
    compute_scene, ConstellationMember, Scene, SceneConstellation, SceneMoon, ScenePlanet,
    SceneStar, SkyEngine,
};
pub use style::StarStyle;

pub use celestial_catalog::Catalog;
