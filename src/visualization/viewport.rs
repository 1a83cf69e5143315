//! Universe → screen coordinate mapping for whatever draws the bodies.
//!
//! The universe is scaled so that a disc of radius `extent` fits the
//! shorter side of the surface, centred, with y pointing up.

use crate::simulation::states::{NVec2, Universe};

/// Pixel size of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
        }
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Pixels per universe unit, zero when `extent` is zero
    pub fn scale(&self, extent: f64) -> f64 {
        if extent <= 0.0 {
            return 0.0;
        }
        f64::from(self.width.min(self.height)) / (extent * 2.0)
    }

    pub fn to_screen(&self, extent: f64, position: NVec2) -> (f32, f32) {
        let scale = self.scale(extent);
        let cx = f64::from(self.width) / 2.0;
        let cy = f64::from(self.height) / 2.0;

        ((cx + position.x * scale) as f32, (cy - position.y * scale) as f32)
    }

    /// Screen position of every body, in collection order
    pub fn project(&self, universe: &Universe) -> Vec<(f32, f32)> {
        universe
            .bodies()
            .iter()
            .map(|b| self.to_screen(universe.extent(), b.position()))
            .collect()
    }
}
