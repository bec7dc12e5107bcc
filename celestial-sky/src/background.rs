//! Deterministic decorative star field.
//!
//! The chart scatters faint filler stars behind the catalog. The scatter must
//! be identical every time the same moment is drawn, so the generator is
//! seeded from the moment itself: the seed is the sum of the UTF-16 code
//! units of [`ObserverMoment::seed_text`], and each draw is
//!
//! ```text
//! x = sin(seed) · 10000;  seed += 1;  return x − ⌊x⌋
//! ```
//!
//! The generator is a plain value threaded through by the caller. It is not
//! suitable for anything but decoration.

use crate::moment::ObserverMoment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct SeededRandom {
    seed: f64,
}

impl SeededRandom {
    pub fn new(seed: f64) -> Self {
        Self { seed }
    }

    pub fn from_text(text: &str) -> Self {
        let seed: u64 = text.encode_utf16().map(u64::from).sum();
        Self::new(seed as f64)
    }

    pub fn seed(&self) -> f64 {
        self.seed
    }

    /// Next value in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        let x = self.seed.sin() * 10000.0;
        self.seed += 1.0;
        x - x.floor()
    }
}

impl Iterator for SeededRandom {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

/// A filler star in unit-square coordinates; the renderer scales x and y to
/// its canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackgroundStar {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub opacity: f64,
}

impl BackgroundStar {
    fn draw(rng: &mut SeededRandom) -> Self {
        let x = rng.next_f64();
        let y = rng.next_f64();
        let radius = rng.next_f64() + 0.2;
        let opacity = rng.next_f64() * 0.8 + 0.2;
        Self {
            x,
            y,
            radius,
            opacity,
        }
    }
}

pub fn background_field(moment: &ObserverMoment, count: usize) -> Vec<BackgroundStar> {
    let mut rng = SeededRandom::from_text(&moment.seed_text());
    (0..count).map(|_| BackgroundStar::draw(&mut rng)).collect()
}
