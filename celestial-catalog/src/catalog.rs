//! The read-only catalog value handed to the scene pipeline.

use crate::constellations::builtin_constellations;
use crate::stars::builtin_stars;
use crate::{CatalogError, CatalogResult, Constellation, Star};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

static BUILTIN: Lazy<Arc<Catalog>> = Lazy::new(|| {
    Arc::new(Catalog {
        stars: builtin_stars(),
        constellations: builtin_constellations(),
    })
});

/// Stars and constellations in a fixed order. No mutation API.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CatalogFile"))]
pub struct Catalog {
    stars: Vec<Star>,
    constellations: Vec<Constellation>,
}

/// Unvalidated on-disk shape; converted through [`Catalog::new`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    stars: Vec<Star>,
    #[serde(default)]
    constellations: Vec<Constellation>,
}

#[cfg(feature = "serde")]
impl TryFrom<CatalogFile> for Catalog {
    type Error = CatalogError;

    fn try_from(file: CatalogFile) -> CatalogResult<Self> {
        Catalog::new(file.stars, file.constellations)
    }
}

impl Catalog {
    /// Validates every entry. Star names must be unique (case-insensitive);
    /// constellation points are free to repeat star positions.
    pub fn new(stars: Vec<Star>, constellations: Vec<Constellation>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(stars.len());
        for star in &stars {
            star.validate()?;
            if !seen.insert(star.name().to_lowercase()) {
                return Err(CatalogError::DuplicateName(star.name().to_string()));
            }
        }
        for constellation in &constellations {
            constellation.validate()?;
        }
        Ok(Self {
            stars,
            constellations,
        })
    }

    /// The built-in twenty-star catalog, constructed on first use.
    pub fn builtin() -> Arc<Catalog> {
        Arc::clone(&BUILTIN)
    }

    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        serde_json::from_str(json).map_err(|e| CatalogError::ParseError(e.to_string()))
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn constellations(&self) -> &[Constellation] {
        &self.constellations
    }

    /// Case-insensitive lookup.
    pub fn star(&self, name: &str) -> Option<&Star> {
        self.stars
            .iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }

    pub fn constellation(&self, name: &str) -> Option<&Constellation> {
        self.constellations
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Stars at or brighter than `magnitude`, in catalog order.
    pub fn brighter_than(&self, magnitude: f64) -> impl Iterator<Item = &Star> + '_ {
        self.stars.iter().filter(move |s| s.magnitude() <= magnitude)
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty() && self.constellations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConstellationPoint;

    #[test]
    fn test_builtin_is_shared() {
        let a = Catalog::builtin();
        let b = Catalog::builtin();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.stars().len(), 20);
        assert_eq!(a.constellations().len(), 2);
    }

    #[test]
    fn test_builtin_passes_validation() {
        let builtin = Catalog::builtin();
        let rebuilt = Catalog::new(
            builtin.stars().to_vec(),
            builtin.constellations().to_vec(),
        )
        .unwrap();
        assert_eq!(&rebuilt, builtin.as_ref());
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.star("vega").unwrap().ra_hours(), 18.62);
        assert!(catalog.star("Polaris").is_none());
        assert_eq!(catalog.constellation("orion").unwrap().len(), 7);
    }

    #[test]
    fn test_brighter_than() {
        let catalog = Catalog::builtin();
        let names: Vec<_> = catalog.brighter_than(0.0).map(|s| s.name()).collect();
        assert_eq!(names, ["Sirius", "Canopus", "Alpha Centauri", "Arcturus"]);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let stars = vec![
            Star::new("Vega", 18.62, 38.78, 0.03).unwrap(),
            Star::new("VEGA", 18.62, 38.78, 0.03).unwrap(),
        ];
        assert_eq!(
            Catalog::new(stars, vec![]),
            Err(CatalogError::DuplicateName("VEGA".into()))
        );
    }

    #[test]
    fn test_custom_catalog() {
        let triangle = Constellation::new(
            "Summer Triangle",
            vec![
                ConstellationPoint::new("Vega", 18.62, 38.78),
                ConstellationPoint::new("Deneb", 20.69, 45.28),
                ConstellationPoint::new("Altair", 19.85, 8.87),
            ],
        )
        .unwrap();
        let catalog = Catalog::new(vec![], vec![triangle]).unwrap();
        assert!(catalog.stars().is_empty());
        assert!(!catalog.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_validates() {
        let json = r#"{
            "stars": [
                {"name": "Polaris", "ra_hours": 2.53, "dec_deg": 89.26, "magnitude": 1.98}
            ],
            "constellations": []
        }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.star("Polaris").unwrap().magnitude(), 1.98);

        let bad =
            r#"{"stars": [{"name": "X", "ra_hours": 30.0, "dec_deg": 0.0, "magnitude": 1.0}]}"#;
        assert!(matches!(
            Catalog::from_json_str(bad),
            Err(CatalogError::ParseError(msg)) if msg.contains("RA 30")
        ));

        assert!(Catalog::from_json_str("not json").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip_of_builtin() {
        let builtin = Catalog::builtin();
        let json = serde_json::to_string(builtin.as_ref()).unwrap();
        let back = Catalog::from_json_str(&json).unwrap();
        assert_eq!(&back, builtin.as_ref());
    }
}
