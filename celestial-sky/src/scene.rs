//! The visibility pipeline.
//!
//! [`compute_scene`] takes an observer moment, a catalog and a configuration
//! and returns a complete [`Scene`]: every catalog star, every planet and the
//! moon with its horizontal position and, when above the horizon, its point
//! on the dome; plus the constellations that have enough members up to be
//! worth drawing.
//!
//! Output order is fixed: stars and constellations in catalog order, planets
//! Mercury to Saturn, then the moon.
//!
//! A constellation keeps only its visible members. Its polyline is split into
//! separate segments wherever a member is below the horizon, and a run of a
//! single visible member contributes no segment. The label is anchored at
//! the first visible member.
//!
//! The scene is checked for non-finite coordinates before it is returned; a
//! single bad value fails the whole call.

use crate::background::{background_field, BackgroundStar};
use crate::config::SceneConfig;
use crate::moment::ObserverMoment;
use crate::object::{CelestialObject, Plottable};
use crate::style::StarStyle;
use crate::{SkyError, SkyResult};
use celestial_catalog::{Catalog, Constellation, Star};
use celestial_coords::{
    moon_position, to_horizontal, CompassMarker, HorizontalPosition, MoonPhase, PhaseName,
    ProjectedPoint, SkyDome,
};
use celestial_ephemeris::{planet_positions, Planet, PlanetPosition};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneStar {
    pub name: String,
    pub ra_hours: f64,
    pub dec_deg: f64,
    pub magnitude: f64,
    pub style: StarStyle,
    pub horizontal: HorizontalPosition,
    pub projected: Option<ProjectedPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstellationMember {
    pub label: String,
    pub horizontal: HorizontalPosition,
    pub point: ProjectedPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneConstellation {
    pub name: String,
    /// Visible members in definition order.
    pub members: Vec<ConstellationMember>,
    /// Polyline pieces, each at least two points long.
    pub segments: Vec<Vec<ProjectedPoint>>,
    pub label_anchor: ProjectedPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenePlanet {
    #[serde(rename = "name")]
    pub planet: Planet,
    pub ra_hours: f64,
    pub dec_deg: f64,
    pub color: &'static str,
    pub size: f64,
    pub ringed: bool,
    pub horizontal: HorizontalPosition,
    pub projected: Option<ProjectedPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneMoon {
    pub ra_hours: f64,
    pub dec_deg: f64,
    pub phase: MoonPhase,
    pub phase_name: PhaseName,
    pub illuminated_fraction: f64,
    pub horizontal: HorizontalPosition,
    pub projected: Option<ProjectedPoint>,
}

/// A self-contained snapshot of the sky for one moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub moment: ObserverMoment,
    pub lst_hours: f64,
    pub dome_scale: f64,
    pub compass: [CompassMarker; 4],
    pub stars: Vec<SceneStar>,
    pub constellations: Vec<SceneConstellation>,
    pub planets: Vec<ScenePlanet>,
    pub moon: SceneMoon,
    pub background: Vec<BackgroundStar>,
}

impl Scene {
    /// Stars, then planets, then the moon.
    pub fn objects(&self) -> impl Iterator<Item = CelestialObject<'_>> + '_ {
        self.stars
            .iter()
            .map(CelestialObject::Star)
            .chain(self.planets.iter().map(CelestialObject::Planet))
            .chain(std::iter::once(CelestialObject::Moon(&self.moon)))
    }

    pub fn visible_objects(&self) -> impl Iterator<Item = CelestialObject<'_>> + '_ {
        self.objects().filter(|o| o.is_visible())
    }

    pub fn visible_stars(&self) -> impl Iterator<Item = &SceneStar> + '_ {
        self.stars.iter().filter(|s| s.is_visible())
    }

    pub fn visible_planets(&self) -> impl Iterator<Item = &ScenePlanet> + '_ {
        self.planets.iter().filter(|p| p.is_visible())
    }

    pub fn constellation(&self, name: &str) -> Option<&SceneConstellation> {
        self.constellations
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Fails on the first NaN or infinite coordinate.
    pub fn ensure_finite(&self) -> SkyResult<()> {
        if !self.lst_hours.is_finite() {
            return Err(SkyError::non_finite("local sidereal time", "hours"));
        }
        for object in self.objects() {
            check_finite(object.name(), object.horizontal(), object.projected())?;
        }
        for constellation in &self.constellations {
            for member in &constellation.members {
                check_finite(&member.label, &member.horizontal, Some(member.point))?;
            }
        }
        Ok(())
    }
}

fn check_finite(
    name: &str,
    horizontal: &HorizontalPosition,
    projected: Option<ProjectedPoint>,
) -> SkyResult<()> {
    if !horizontal.altitude().is_finite() {
        return Err(SkyError::non_finite(name, "altitude"));
    }
    if !horizontal.azimuth().is_finite() {
        return Err(SkyError::non_finite(name, "azimuth"));
    }
    if projected.is_some_and(|p| !p.is_finite()) {
        return Err(SkyError::non_finite(name, "projected point"));
    }
    Ok(())
}

/// Per-call geometry shared by every object in a scene.
struct Sky {
    lst_hours: f64,
    lat_deg: f64,
    dome: SkyDome,
}

impl Sky {
    fn place(&self, ra_hours: f64, dec_deg: f64) -> (HorizontalPosition, Option<ProjectedPoint>) {
        let horizontal = to_horizontal(ra_hours, dec_deg, self.lst_hours, self.lat_deg);
        let projected = self.dome.project_horizontal(&horizontal);
        (horizontal, projected)
    }

    fn star(&self, star: &Star) -> SceneStar {
        let (horizontal, projected) = self.place(star.ra_hours(), star.dec_degrees());
        SceneStar {
            name: star.name().to_string(),
            ra_hours: star.ra_hours(),
            dec_deg: star.dec_degrees(),
            magnitude: star.magnitude(),
            style: StarStyle::for_magnitude(star.magnitude()),
            horizontal,
            projected,
        }
    }

    fn planet(&self, position: &PlanetPosition) -> ScenePlanet {
        let (horizontal, projected) = self.place(position.ra_hours(), position.dec_degrees());
        ScenePlanet {
            planet: position.planet(),
            ra_hours: position.ra_hours(),
            dec_deg: position.dec_degrees(),
            color: position.color(),
            size: position.size(),
            ringed: position.is_ringed(),
            horizontal,
            projected,
        }
    }

    fn moon(&self, phase: MoonPhase) -> SkyResult<SceneMoon> {
        let position = moon_position(self.lst_hours, phase)?;
        let (horizontal, projected) = self.place(position.ra_hours(), position.dec_degrees());
        Ok(SceneMoon {
            ra_hours: position.ra_hours(),
            dec_deg: position.dec_degrees(),
            phase,
            phase_name: phase.name(),
            illuminated_fraction: phase.illuminated_fraction(),
            horizontal,
            projected,
        })
    }

    fn constellation(
        &self,
        constellation: &Constellation,
        min_points: usize,
    ) -> Option<SceneConstellation> {
        let mut members = Vec::with_capacity(constellation.len());
        let mut segments = Vec::new();
        let mut run = Vec::new();

        for point in constellation.points() {
            let (horizontal, projected) = self.place(point.ra_hours(), point.dec_degrees());
            match projected {
                Some(p) => {
                    members.push(ConstellationMember {
                        label: point.label().to_string(),
                        horizontal,
                        point: p,
                    });
                    run.push(p);
                }
                None => close_segment(&mut run, &mut segments),
            }
        }
        close_segment(&mut run, &mut segments);

        if members.len() < min_points {
            trace!(
                constellation = constellation.name(),
                visible = members.len(),
                required = min_points,
                "constellation skipped"
            );
            return None;
        }

        trace!(
            constellation = constellation.name(),
            visible = members.len(),
            segments = segments.len(),
            "constellation drawn"
        );
        let label_anchor = members[0].point;
        Some(SceneConstellation {
            name: constellation.name().to_string(),
            members,
            segments,
            label_anchor,
        })
    }
}

fn close_segment(run: &mut Vec<ProjectedPoint>, segments: &mut Vec<Vec<ProjectedPoint>>) {
    if run.len() >= 2 {
        segments.push(std::mem::take(run));
    } else {
        run.clear();
    }
}

pub fn compute_scene(
    moment: &ObserverMoment,
    catalog: &Catalog,
    config: &SceneConfig,
) -> SkyResult<Scene> {
    config.validate()?;
    let dome = config.dome()?;
    let lst = moment.local_sidereal_time()?;

    let sky = Sky {
        lst_hours: lst.hours(),
        lat_deg: moment.latitude_deg(),
        dome,
    };

    let stars = catalog.stars().iter().map(|s| sky.star(s)).collect();
    let constellations = catalog
        .constellations()
        .iter()
        .filter_map(|c| sky.constellation(c, config.min_constellation_points))
        .collect();
    let planets = planet_positions(moment.day_of_year())
        .iter()
        .map(|p| sky.planet(p))
        .collect();
    let moon = sky.moon(moment.moon_phase())?;
    let background = if config.include_background {
        background_field(moment, config.background_stars)
    } else {
        Vec::new()
    };

    let scene = Scene {
        moment: *moment,
        lst_hours: lst.hours(),
        dome_scale: dome.scale(),
        compass: dome.compass(),
        stars,
        constellations,
        planets,
        moon,
        background,
    };
    scene.ensure_finite()?;

    debug!(
        moment = %moment,
        lst_hours = scene.lst_hours,
        visible_stars = scene.visible_stars().count(),
        constellations = scene.constellations.len(),
        visible_planets = scene.visible_planets().count(),
        moon_visible = scene.moon.is_visible(),
        "computed scene"
    );

    Ok(scene)
}

/// A catalog and configuration bundled for repeated scene computation.
///
/// Cloning is cheap: the catalog is shared.
#[derive(Debug, Clone)]
pub struct SkyEngine {
    catalog: Arc<Catalog>,
    config: SceneConfig,
}

impl Default for SkyEngine {
    fn default() -> Self {
        Self {
            catalog: Catalog::builtin(),
            config: SceneConfig::default(),
        }
    }
}

impl SkyEngine {
    pub fn new(catalog: Arc<Catalog>, config: SceneConfig) -> SkyResult<Self> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn compute(&self, moment: &ObserverMoment) -> SkyResult<Scene> {
        compute_scene(moment, &self.catalog, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_catalog::ConstellationPoint;

    fn sky_at(lst_hours: f64, lat_deg: f64) -> Sky {
        Sky {
            lst_hours,
            lat_deg,
            dome: SkyDome::default(),
        }
    }

    fn line(points: &[(f64, f64)]) -> Constellation {
        let points = points
            .iter()
            .enumerate()
            .map(|(i, &(ra, dec))| ConstellationPoint::new(format!("p{}", i), ra, dec))
            .collect();
        Constellation::new("Test", points).unwrap()
    }

    #[test]
    fn test_segments_break_at_invisible_members() {
        // From the north pole, positive declinations are up and negative ones down.
        let sky = sky_at(0.0, 90.0);
        let c = line(&[
            (1.0, 40.0),
            (2.0, 45.0),
            (3.0, -10.0),
            (4.0, 50.0),
            (5.0, -5.0),
            (6.0, 30.0),
            (7.0, 35.0),
        ]);
        let placed = sky.constellation(&c, 3).unwrap();

        let labels: Vec<_> = placed.members.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, ["p0", "p1", "p3", "p5", "p6"]);
        assert_eq!(placed.segments.len(), 2);
        assert_eq!(placed.segments[0].len(), 2);
        assert_eq!(placed.segments[1].len(), 2);
        assert_eq!(placed.label_anchor, placed.members[0].point);
    }

    #[test]
    fn test_two_of_seven_visible_is_skipped() {
        let sky = sky_at(0.0, 90.0);
        let c = line(&[
            (1.0, 40.0),
            (2.0, 45.0),
            (3.0, -10.0),
            (4.0, -50.0),
            (5.0, -5.0),
            (6.0, -30.0),
            (7.0, -35.0),
        ]);
        assert!(sky.constellation(&c, 3).is_none());
        assert!(sky.constellation(&c, 2).is_some());
    }

    #[test]
    fn test_label_anchor_is_first_visible_member() {
        let sky = sky_at(0.0, 90.0);
        let c = line(&[(1.0, -40.0), (2.0, 45.0), (3.0, 60.0), (4.0, 70.0)]);
        let placed = sky.constellation(&c, 3).unwrap();
        assert_eq!(placed.members[0].label, "p1");
        assert_eq!(placed.label_anchor, placed.members[0].point);
        let points: Vec<_> = placed.members.iter().map(|m| m.point).collect();
        assert_eq!(placed.segments, vec![points]);
    }

    #[test]
    fn test_close_segment_drops_single_points() {
        let mut segments = Vec::new();
        let mut run = vec![ProjectedPoint::ORIGIN];
        close_segment(&mut run, &mut segments);
        assert!(run.is_empty());
        assert!(segments.is_empty());

        let mut run = vec![ProjectedPoint::ORIGIN, ProjectedPoint::new(0.1, 0.1)];
        close_segment(&mut run, &mut segments);
        assert!(run.is_empty());
        assert_eq!(segments.len(), 1);
    }

    #[test]
    fn test_ensure_finite_rejects_nan() {
        let moment = ObserverMoment::parse("2024-08-12", "21:30", 40.7128, -74.006).unwrap();
        let mut scene =
            compute_scene(&moment, &Catalog::builtin(), &SceneConfig::default()).unwrap();
        scene.ensure_finite().unwrap();

        scene.stars[3].horizontal = to_horizontal(f64::NAN, 0.0, 0.0, 0.0);
        assert_eq!(
            scene.ensure_finite(),
            Err(SkyError::non_finite("Arcturus", "altitude"))
        );
    }

    #[test]
    fn test_engine_rejects_bad_config() {
        let config = SceneConfig {
            dome_scale: f64::NAN,
            ..SceneConfig::default()
        };
        assert!(matches!(
            SkyEngine::new(Catalog::builtin(), config),
            Err(SkyError::InvalidConfig(_))
        ));
    }
}
