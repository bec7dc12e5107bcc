//! Scene configuration.
//!
//! Every field has a default, so a JSON file only needs the keys it changes:
//!
//! ```json
//! { "dome_scale": 0.9, "include_background": false }
//! ```

use crate::{SkyError, SkyResult};
use celestial_catalog::MIN_CONSTELLATION_POINTS;
use celestial_coords::{SkyDome, DEFAULT_DOME_SCALE};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Upper bound on generated filler stars.
pub const MAX_BACKGROUND_STARS: usize = 10_000;

const DEFAULT_BACKGROUND_STARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Radius of the horizon circle in chart units.
    pub dome_scale: f64,
    /// Visible members needed before a constellation is drawn.
    pub min_constellation_points: usize,
    pub background_stars: usize,
    pub include_background: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            dome_scale: DEFAULT_DOME_SCALE,
            min_constellation_points: MIN_CONSTELLATION_POINTS,
            background_stars: DEFAULT_BACKGROUND_STARS,
            include_background: true,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> SkyResult<()> {
        if !self.dome_scale.is_finite() || self.dome_scale <= 0.0 {
            return Err(SkyError::InvalidConfig(format!(
                "dome_scale must be finite and positive, got {}",
                self.dome_scale
            )));
        }
        if self.min_constellation_points < 2 {
            return Err(SkyError::InvalidConfig(format!(
                "min_constellation_points must be at least 2, got {}",
                self.min_constellation_points
            )));
        }
        if self.background_stars > MAX_BACKGROUND_STARS {
            return Err(SkyError::InvalidConfig(format!(
                "background_stars must not exceed {}, got {}",
                MAX_BACKGROUND_STARS, self.background_stars
            )));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> SkyResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            warn!(error = %e, "rejected scene configuration");
            SkyError::InvalidConfig(e.to_string())
        })?;
        if let Err(e) = config.validate() {
            warn!(error = %e, "rejected scene configuration");
            return Err(e);
        }
        Ok(config)
    }

    pub fn dome(&self) -> SkyResult<SkyDome> {
        Ok(SkyDome::new(self.dome_scale)?)
    }
}
