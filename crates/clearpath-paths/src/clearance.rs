//! Clearance field: how far each cell is from the nearest obstacle, and
//! whether a cell admits an agent of a given footprint.
//!
//! Two strategies answer the admission question (see [`Clearance`]):
//!
//! - **Wall distance** scans the `size`×`size` quadrant around a cell in all
//!   four reflections and keeps the distance to the closest obstacle, clamped
//!   at `size + 1`. A cell can be *occupied* when that distance is at least
//!   half the footprint, and *entered* when it is strictly greater.
//! - **Footprint** checks that the `size`×`size` block anchored at the cell
//!   (top-left) holds no obstacle.
//!
//! Both memoize per `(cell, size)` against the grid generation.

use clearpath_core::{Point, Range};

use crate::config::Clearance;
use crate::error::GridError;
use crate::grid::Grid;

/// Offsets `(±dx, ±dy)` for one scanned quadrant offset. An offset on an
/// axis has only two distinct reflections.
#[inline]
fn reflections(dx: i32, dy: i32) -> impl Iterator<Item = Point> {
    let all = [
        Point::new(dx, dy),
        Point::new(-dx, -dy),
        Point::new(dx, -dy),
        Point::new(-dx, dy),
    ];
    let n = if dx > 0 && dy > 0 { 4 } else { 2 };
    all.into_iter().take(n)
}

#[inline]
fn half(agent_size: u32) -> f64 {
    f64::from(agent_size) / 2.0
}

/// Footprint side as a coordinate offset. Sizes are capped well below
/// `i32::MAX` by [`GridConfig`](crate::GridConfig).
#[inline]
fn side(agent_size: u32) -> i32 {
    i32::try_from(agent_size).unwrap_or(i32::MAX)
}

impl Grid {
    /// Distance from `p` to the nearest obstacle as seen by an agent of
    /// `agent_size`: `0` for an obstacle, otherwise clamped at
    /// `agent_size + 1`.
    ///
    /// Available whatever [`Clearance`] strategy the grid is configured
    /// with.
    pub fn wall_distance(&mut self, p: Point, agent_size: u32) -> Result<f64, GridError> {
        self.config.check_agent_size(agent_size)?;
        Ok(self.update_wall_distance(p, agent_size))
    }

    /// Whether an agent of `agent_size` may step onto `p`, according to the
    /// configured [`Clearance`] strategy.
    pub fn admits_footprint(&mut self, p: Point, agent_size: u32) -> Result<bool, GridError> {
        self.config.check_agent_size(agent_size)?;
        Ok(self.admits(p, agent_size))
    }

    /// Whether the `agent_size`×`agent_size` block anchored at `p` is free
    /// of obstacles.
    pub fn check_square_size(&mut self, p: Point, agent_size: u32) -> Result<bool, GridError> {
        self.config.check_agent_size(agent_size)?;
        Ok(self.square_is_free(p, agent_size))
    }

    pub(crate) fn update_wall_distance(&mut self, p: Point, agent_size: u32) -> f64 {
        let generation = self.generation;
        let cell = self.cell_mut(p);
        if cell.is_obstacle() {
            return 0.0;
        }
        if let Some(&d) = cell.memo(generation).wall_distance.get(&agent_size) {
            return d;
        }

        let s = side(agent_size);
        let mut best = f64::from(agent_size) + 1.0;
        for dx in 0..s {
            for dy in 0..s {
                if dx == 0 && dy == 0 {
                    continue;
                }
                // Offsets past the edge of the plane have no cell to probe.
                for q in reflections(dx, dy).filter_map(|d| p.checked_add(d)) {
                    if self.get_cell(q).is_obstacle() {
                        best = best.min(q.distance(p));
                    }
                }
            }
        }

        self.cell_mut(p)
            .memo(generation)
            .wall_distance
            .insert(agent_size, best);
        best
    }

    pub(crate) fn square_is_free(&mut self, p: Point, agent_size: u32) -> bool {
        let generation = self.generation;
        if let Some(&free) = self.cell_mut(p).memo(generation).footprint.get(&agent_size) {
            return free;
        }
        let free = Range::square(p, side(agent_size))
            .iter()
            .all(|q| !self.get_cell(q).is_obstacle());
        self.cell_mut(p)
            .memo(generation)
            .footprint
            .insert(agent_size, free);
        free
    }

    /// Whether an agent of `agent_size` may stand on `p` and move away.
    pub(crate) fn occupiable(&mut self, p: Point, agent_size: u32) -> bool {
        match self.config.clearance {
            Clearance::WallDistance => self.update_wall_distance(p, agent_size) >= half(agent_size),
            Clearance::Footprint => !self.get_cell(p).is_obstacle(),
        }
    }

    /// Whether an agent of `agent_size` may step onto `p`.
    pub(crate) fn admits(&mut self, p: Point, agent_size: u32) -> bool {
        match self.config.clearance {
            Clearance::WallDistance => self.update_wall_distance(p, agent_size) > half(agent_size),
            Clearance::Footprint => {
                !self.get_cell(p).is_obstacle() && self.square_is_free(p, agent_size)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;

    fn footprint_grid() -> Grid {
        Grid::with_config(GridConfig {
            clearance: Clearance::Footprint,
            ..GridConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn reflections_cover_quadrants_and_axes() {
        let diag: Vec<_> = reflections(1, 2).collect();
        assert_eq!(diag.len(), 4);
        assert!(diag.contains(&Point::new(-1, 2)));
        assert!(diag.contains(&Point::new(1, -2)));
        assert_eq!(
            reflections(3, 0).collect::<Vec<_>>(),
            vec![Point::new(3, 0), Point::new(-3, 0)]
        );
        assert_eq!(
            reflections(0, 2).collect::<Vec<_>>(),
            vec![Point::new(0, 2), Point::new(0, -2)]
        );
    }

    #[test]
    fn open_space_is_clamped() {
        let mut g = Grid::new();
        assert_eq!(g.wall_distance(Point::ZERO, 1).unwrap(), 2.0);
        assert_eq!(g.wall_distance(Point::ZERO, 4).unwrap(), 5.0);
    }

    #[test]
    fn nearest_obstacle_distance() {
        let mut g = Grid::new();
        g.set_obstacle(Point::new(2, 1), true);
        g.set_obstacle(Point::new(-3, 0), true);
        let d = g.wall_distance(Point::ZERO, 4).unwrap();
        assert!((d - 5f64.sqrt()).abs() < 1e-12);
        assert_eq!(g.wall_distance(Point::new(2, 1), 4).unwrap(), 0.0);
        // Outside the scanned quadrant for a smaller agent.
        assert_eq!(g.wall_distance(Point::ZERO, 2).unwrap(), 3.0);
    }

    #[test]
    fn wall_distance_is_recomputed_after_edit() {
        let mut g = Grid::new();
        let p = Point::new(10, 10);
        assert_eq!(g.wall_distance(p, 3).unwrap(), 4.0);
        g.set_obstacle(Point::new(11, 10), true);
        assert_eq!(g.wall_distance(p, 3).unwrap(), 1.0);
        g.set_obstacle(Point::new(11, 10), false);
        assert_eq!(g.wall_distance(p, 3).unwrap(), 4.0);
    }

    #[test]
    fn wall_distance_memo_is_tagged_with_generation() {
        let mut g = Grid::new();
        let p = Point::new(1, 1);
        g.wall_distance(p, 2).unwrap();
        let generation = g.generation();
        assert_eq!(g.cell(p).unwrap().cached_wall_distance(2, generation), Some(3.0));
        g.bump_generation();
        assert_eq!(g.cell(p).unwrap().cached_wall_distance(2, g.generation()), None);
    }

    #[test]
    fn wall_distance_admission_thresholds() {
        let mut g = Grid::new();
        g.set_obstacle(Point::new(1, 0), true);
        // Orthogonally adjacent to a wall: distance 1, exactly half of 2.
        assert!(g.occupiable(Point::ZERO, 2));
        assert!(!g.admits(Point::ZERO, 2));
        // Diagonally adjacent: sqrt(2) > 1.
        assert!(g.admits(Point::new(0, 1), 2));
        assert!(!g.admits(Point::new(0, 1), 3));
        assert!(!g.admits(Point::new(1, 0), 1));
        assert!(g.admits(Point::ZERO, 1));
    }

    #[test]
    fn square_check_is_anchored_top_left() {
        let mut g = footprint_grid();
        g.set_obstacle(Point::new(2, 2), true);
        assert!(!g.check_square_size(Point::new(1, 1), 2).unwrap());
        assert!(!g.check_square_size(Point::new(0, 0), 3).unwrap());
        assert!(g.check_square_size(Point::new(0, 0), 2).unwrap());
        assert!(g.check_square_size(Point::new(3, 3), 5).unwrap());
        assert!(!g.admits_footprint(Point::new(2, 2), 1).unwrap());
        assert!(g.admits_footprint(Point::new(3, 2), 1).unwrap());
    }

    #[test]
    fn square_check_sees_edits() {
        let mut g = footprint_grid();
        let anchor = Point::new(-5, -5);
        assert!(g.admits_footprint(anchor, 4).unwrap());
        g.set_obstacle(Point::new(-2, -2), true);
        assert!(!g.admits_footprint(anchor, 4).unwrap());
        g.set_obstacle(Point::new(-2, -2), false);
        assert!(g.admits_footprint(anchor, 4).unwrap());
    }

    #[test]
    fn scans_stop_at_the_plane_edge() {
        let mut g = Grid::new();
        let corner = Point::new(i32::MAX, i32::MIN);
        assert_eq!(g.wall_distance(corner, 3).unwrap(), 4.0);
        g.set_obstacle(Point::new(i32::MAX - 1, i32::MIN), true);
        assert_eq!(g.wall_distance(corner, 3).unwrap(), 1.0);

        let mut f = footprint_grid();
        let edge = Point::new(i32::MAX - 1, 0);
        assert!(f.check_square_size(edge, 4).unwrap());
        f.set_obstacle(Point::new(i32::MAX - 1, 3), true);
        assert!(!f.check_square_size(edge, 4).unwrap());
    }

    #[test]
    fn oversized_agents_are_rejected_before_scanning() {
        let mut g = Grid::new();
        assert_eq!(
            g.wall_distance(Point::ZERO, 3_000_000_000),
            Err(GridError::InvalidAgentSize {
                size: 3_000_000_000,
                max: 10
            })
        );
        assert!(g.is_empty());
    }

    #[test]
    fn invalid_sizes_are_rejected() {
        let mut g = Grid::new();
        assert!(g.wall_distance(Point::ZERO, 0).is_err());
        assert!(g.admits_footprint(Point::ZERO, 11).is_err());
        assert!(g.check_square_size(Point::ZERO, 0).is_err());
    }
}
