//! Random obstacle fields for stress tests and demos.

use clearpath_core::{Point, Range};
use clearpath_paths::Grid;
use rand::{Rng, RngExt};

/// Scatters obstacles over a rectangular area.
pub struct Scatter<R: Rng> {
    pub rng: R,
    /// Chance, in `0.0..=1.0`, that a cell becomes an obstacle.
    pub density: f64,
}

impl<R: Rng> Scatter<R> {
    /// Create a scatterer. `density` is clamped to `0.0..=1.0`.
    pub fn new(rng: R, density: f64) -> Self {
        Self {
            rng,
            density: density.clamp(0.0, 1.0),
        }
    }

    /// Pick obstacle positions in `area`, row-major, skipping `keep_free`.
    pub fn positions(&mut self, area: Range, keep_free: &[Point]) -> Vec<Point> {
        let mut out = Vec::new();
        for p in area.iter() {
            let r: f64 = self.rng.random();
            if r < self.density && !keep_free.contains(&p) {
                out.push(p);
            }
        }
        out
    }

    /// Mark random obstacles in `area` of `grid`, never touching
    /// `keep_free`. Existing obstacles are left alone. Returns how many cells
    /// were picked.
    pub fn apply(&mut self, grid: &mut Grid, area: Range, keep_free: &[Point]) -> usize {
        let picked = self.positions(area, keep_free);
        for &p in &picked {
            grid.set_obstacle(p, true);
        }
        log::debug!(
            "scattered {} obstacles over {area} (density {})",
            picked.len(),
            self.density
        );
        picked.len()
    }
}
