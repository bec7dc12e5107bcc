//! Rendering hints derived from apparent magnitude.

use serde::{Deserialize, Serialize};

/// Stars brighter than this get a glow and a name label.
pub const LABEL_MAGNITUDE_LIMIT: f64 = 0.5;

/// Smallest radius handed to a renderer, for faint custom-catalog stars.
const MIN_STAR_RADIUS: f64 = 0.5;

/// Advisory size and emphasis for drawing a catalog star.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarStyle {
    pub radius: f64,
    pub opacity: f64,
    pub glow: bool,
    pub label: bool,
}

impl StarStyle {
    /// `radius = 2.5 − 0.3·m`, `opacity = 0.8 + min(−m, 0)·0.1`.
    pub fn for_magnitude(magnitude: f64) -> Self {
        let radius = (2.5 - 0.3 * magnitude).max(MIN_STAR_RADIUS);
        let opacity = (0.8 + (-magnitude).min(0.0) * 0.1).clamp(0.0, 1.0);
        let bright = magnitude < LABEL_MAGNITUDE_LIMIT;

        Self {
            radius,
            opacity,
            glow: bright,
            label: bright,
        }
    }
}
