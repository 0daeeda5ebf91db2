use clearpath_core::Point;

/// Minimal pathfinding interface: admissible neighbor enumeration for an
/// agent of a given footprint.
///
/// Methods take `&mut self` because implementors are allowed to materialize
/// cells and memoize results while answering.
pub trait Pather {
    /// Append the neighbors an agent of `agent_size` standing on `p` may
    /// step to into `buf`. The caller clears `buf` before calling.
    fn neighbors(&mut self, p: Point, agent_size: u32, buf: &mut Vec<Point>);
}

/// Pather with weighted edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Returns `max_cost` when
    /// the move is forbidden (either endpoint is an obstacle).
    fn cost(&mut self, from: Point, to: Point, max_cost: f64) -> f64;
}

/// Full A* pather with a remaining-cost estimate.
pub trait AstarPather: WeightedPather {
    /// Estimate of the cost from `from` to `to`.
    fn estimate(&self, from: Point, to: Point) -> f64;
}
