//! Per-coordinate state owned by a [`Grid`](crate::Grid).

use std::collections::HashMap;

use clearpath_core::Point;

/// The state of one grid coordinate: its obstacle flag plus data memoized
/// for the grid generation in which it was computed.
///
/// Cells never reference each other; everything that involves more than one
/// cell goes through the grid by coordinate.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    obstacle: bool,
    memo: Memo,
}

/// Memoized per-size data. Valid only while `generation` equals the grid's
/// current generation; a mismatch empties it on next access.
#[derive(Debug, Clone, Default)]
pub(crate) struct Memo {
    generation: Option<u64>,
    pub(crate) wall_distance: HashMap<u32, f64>,
    pub(crate) footprint: HashMap<u32, bool>,
    pub(crate) neighbors: HashMap<u32, Vec<Point>>,
}

impl Memo {
    fn reset(&mut self, generation: u64) {
        self.generation = Some(generation);
        self.wall_distance.clear();
        self.footprint.clear();
        self.neighbors.clear();
    }
}

impl Cell {
    /// Whether the cell blocks movement.
    #[inline]
    pub fn is_obstacle(&self) -> bool {
        self.obstacle
    }

    /// The grid generation this cell's memoized data belongs to, or `None`
    /// if nothing has been computed for it yet.
    #[inline]
    pub fn cache_generation(&self) -> Option<u64> {
        self.memo.generation
    }

    /// The wall distance memoized for `agent_size`, if it is still valid in
    /// `generation`. Obstacles always report `0`.
    pub fn cached_wall_distance(&self, agent_size: u32, generation: u64) -> Option<f64> {
        if self.obstacle {
            return Some(0.0);
        }
        if self.memo.generation != Some(generation) {
            return None;
        }
        self.memo.wall_distance.get(&agent_size).copied()
    }

    /// The neighbor list memoized for `agent_size`, if it is still valid in
    /// `generation`.
    pub fn cached_neighbors(&self, agent_size: u32, generation: u64) -> Option<&[Point]> {
        if self.memo.generation != Some(generation) {
            return None;
        }
        self.memo.neighbors.get(&agent_size).map(Vec::as_slice)
    }

    #[inline]
    pub(crate) fn set_obstacle(&mut self, obstacle: bool) {
        self.obstacle = obstacle;
    }

    /// Memo for `generation`, emptied first if it was computed for another.
    #[inline]
    pub(crate) fn memo(&mut self, generation: u64) -> &mut Memo {
        if self.memo.generation != Some(generation) {
            self.memo.reset(generation);
        }
        &mut self.memo
    }
}
