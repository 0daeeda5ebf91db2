//! The sparse grid store.
//!
//! A [`Grid`] maps coordinates to [`Cell`]s and creates a free cell the first
//! time any coordinate is touched, so the addressable plane is unbounded
//! while memory only grows with what has actually been visited.
//!
//! Every obstacle edit bumps a generation counter. Memoized per-cell data
//! (wall distances, footprint checks, neighbor lists) is tagged with the
//! generation it was computed in and is recomputed lazily once the tags no
//! longer match. Nothing is ever eagerly cleared.

use std::collections::HashMap;

use clearpath_core::{Point, Range};

use crate::cell::Cell;
use crate::config::GridConfig;
use crate::error::GridError;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Sparse, lazily materialized grid with generation-based cache
/// invalidation.
#[derive(Debug, Clone)]
pub struct Grid {
    pub(crate) cells: HashMap<Point, Cell>,
    pub(crate) generation: u64,
    pub(crate) config: GridConfig,
    bounds: Range,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an empty grid with the default configuration.
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
            generation: 0,
            config: GridConfig::default(),
            bounds: Range::default(),
        }
    }

    /// Create an empty grid with `config`, after validating it.
    pub fn with_config(config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// The grid's configuration.
    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Current cache generation.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of materialized cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell has been materialized yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bounding box of every coordinate materialized so far.
    ///
    /// Half-open, so cells on the `i32::MAX` row or column are not covered.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Return the cell at `p`, creating a free one on first access.
    pub fn get_cell(&mut self, p: Point) -> &Cell {
        self.cell_mut(p)
    }

    /// Return the cell at `p` if it has been materialized.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.cells.get(&p)
    }

    pub(crate) fn cell_mut(&mut self, p: Point) -> &mut Cell {
        if !self.cells.contains_key(&p) {
            self.bounds = self.bounds.include(p);
        }
        self.cells.entry(p).or_default()
    }

    /// Whether `p` is an obstacle. Unseen coordinates are free and are not
    /// materialized by this call.
    #[inline]
    pub fn is_obstacle(&self, p: Point) -> bool {
        self.cells.get(&p).is_some_and(Cell::is_obstacle)
    }

    /// Mark `p` obstructed or free.
    ///
    /// Changing the state invalidates every memoized value in the grid.
    /// Setting the state a cell already has is a no-op.
    pub fn set_obstacle(&mut self, p: Point, obstacle: bool) {
        let cell = self.cell_mut(p);
        if cell.is_obstacle() == obstacle {
            return;
        }
        cell.set_obstacle(obstacle);
        self.bump_generation();
        log::trace!("cell {p} obstacle={obstacle}, generation {}", self.generation);
    }

    /// Flip the obstacle state of `p` and return the new state.
    pub fn toggle_obstacle(&mut self, p: Point) -> bool {
        let obstacle = !self.is_obstacle(p);
        self.set_obstacle(p, obstacle);
        obstacle
    }

    /// Free every obstacle. Cells stay materialized.
    pub fn clear_obstacles(&mut self) {
        let mut changed = false;
        for cell in self.cells.values_mut() {
            if cell.is_obstacle() {
                cell.set_obstacle(false);
                changed = true;
            }
        }
        if changed {
            self.bump_generation();
        }
    }

    /// Coordinates of every obstacle, in no particular order.
    pub fn obstacles(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells
            .iter()
            .filter(|(_, c)| c.is_obstacle())
            .map(|(p, _)| *p)
    }

    /// Invalidate all memoized data.
    #[inline]
    pub fn bump_generation(&mut self) {
        self.generation += 1;
    }

    /// Call after the agent footprint a caller works with has changed.
    ///
    /// Memoized data is already keyed by size, so this only forces every
    /// cell to recompute on its next access.
    pub fn update_agent_size(&mut self) {
        self.bump_generation();
        log::trace!("agent size changed, generation {}", self.generation);
    }
}

// ---------------------------------------------------------------------------
// Search interface
// ---------------------------------------------------------------------------

impl Pather for Grid {
    fn neighbors(&mut self, p: Point, agent_size: u32, buf: &mut Vec<Point>) {
        self.resolve_neighbors(p, agent_size, buf);
    }
}

impl WeightedPather for Grid {
    fn cost(&mut self, from: Point, to: Point, max_cost: f64) -> f64 {
        if self.get_cell(from).is_obstacle() || self.get_cell(to).is_obstacle() {
            return max_cost;
        }
        from.distance(to)
    }
}

impl AstarPather for Grid {
    fn estimate(&self, from: Point, to: Point) -> f64 {
        self.config.heuristic.estimate(from, to)
    }
}
