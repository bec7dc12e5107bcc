//! Uniform view over the point-like things in a scene.

use crate::scene::{SceneMoon, ScenePlanet, SceneStar};
use celestial_coords::{HorizontalPosition, ProjectedPoint};
use serde::Serialize;

/// Anything a renderer can place on the dome as a single point.
pub trait Plottable {
    fn name(&self) -> &str;

    fn horizontal(&self) -> &HorizontalPosition;

    /// Position on the dome; `None` below the horizon.
    fn projected(&self) -> Option<ProjectedPoint>;

    fn is_visible(&self) -> bool {
        self.horizontal().is_visible()
    }
}

/// A star, planet or the moon, borrowed from a [`Scene`](crate::Scene).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CelestialObject<'a> {
    Star(&'a SceneStar),
    Planet(&'a ScenePlanet),
    Moon(&'a SceneMoon),
}

impl<'a> CelestialObject<'a> {
    fn inner(&self) -> &'a dyn Plottable {
        match *self {
            CelestialObject::Star(star) => star,
            CelestialObject::Planet(planet) => planet,
            CelestialObject::Moon(moon) => moon,
        }
    }
}

impl Plottable for CelestialObject<'_> {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn horizontal(&self) -> &HorizontalPosition {
        self.inner().horizontal()
    }

    fn projected(&self) -> Option<ProjectedPoint> {
        self.inner().projected()
    }
}

impl Plottable for SceneStar {
    fn name(&self) -> &str {
        &self.name
    }

    fn horizontal(&self) -> &HorizontalPosition {
        &self.horizontal
    }

    fn projected(&self) -> Option<ProjectedPoint> {
        self.projected
    }
}

impl Plottable for ScenePlanet {
    fn name(&self) -> &str {
        self.planet.name()
    }

    fn horizontal(&self) -> &HorizontalPosition {
        &self.horizontal
    }

    fn projected(&self) -> Option<ProjectedPoint> {
        self.projected
    }
}

impl Plottable for SceneMoon {
    fn name(&self) -> &str {
        "Moon"
    }

    fn horizontal(&self) -> &HorizontalPosition {
        &self.horizontal
    }

    fn projected(&self) -> Option<ProjectedPoint> {
        self.projected
    }
}
