use std::collections::HashMap;

use clearpath_core::Point;

use crate::astar::astar_search;
use crate::config::check_max_cost;
use crate::error::GridError;
use crate::grid::Grid;

/// Cost reported for a goal that cannot be reached.
pub const UNREACHABLE_COST: f64 = -1.0;

/// Which end a reconstructed path starts from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PathOrder {
    #[default]
    StartFirst,
    GoalFirst,
}

/// A route and its total cost.
///
/// An unreachable goal is an empty route with cost [`UNREACHABLE_COST`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub points: Vec<Point>,
    pub cost: f64,
}

impl Path {
    /// The "no route" result.
    pub fn unreachable() -> Self {
        Self {
            points: Vec::new(),
            cost: UNREACHABLE_COST,
        }
    }

    /// Whether this is an actual route.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        !self.points.is_empty()
    }

    /// Number of cells on the route, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Walk `came_from` back from `goal` to `start`.
///
/// Returns an empty vector if the chain breaks before reaching `start`
/// (the goal was never reached).
pub fn reconstruct_path(
    came_from: &HashMap<Point, Option<Point>>,
    start: Point,
    goal: Point,
    order: PathOrder,
) -> Vec<Point> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match came_from.get(&current) {
            Some(Some(prev)) => {
                current = *prev;
                path.push(current);
            }
            _ => return Vec::new(),
        }
    }
    if order == PathOrder::StartFirst {
        path.reverse();
    }
    path
}

impl Grid {
    /// Least-cost route for an agent of `agent_size` from `start` to
    /// `goal`, bounded by the configured default max cost.
    pub fn get_path(&mut self, start: Point, goal: Point, agent_size: u32) -> Result<Path, GridError> {
        let max_cost = self.config.default_max_cost;
        self.get_path_within(start, goal, agent_size, max_cost)
    }

    /// Least-cost route whose total cost stays strictly below `max_cost`.
    ///
    /// Returns [`Path::unreachable`] when no such route exists.
    pub fn get_path_within(
        &mut self,
        start: Point,
        goal: Point,
        agent_size: u32,
        max_cost: f64,
    ) -> Result<Path, GridError> {
        self.config.check_agent_size(agent_size)?;
        check_max_cost(max_cost)?;

        let search = astar_search(self, start, goal, agent_size, max_cost);
        let Some(cost) = search.cost_to(goal) else {
            log::debug!(
                "no path {start} -> {goal} (size {agent_size}, max cost {max_cost}) after {} expansions",
                search.expanded
            );
            return Ok(Path::unreachable());
        };

        let points = reconstruct_path(&search.came_from, start, goal, PathOrder::StartFirst);
        debug_assert!(
            !points.is_empty(),
            "goal {goal} reached but predecessor chain is broken"
        );
        if points.is_empty() {
            log::warn!("broken predecessor chain {start} -> {goal}");
            return Ok(Path::unreachable());
        }

        log::debug!(
            "path {start} -> {goal} (size {agent_size}): {} cells, cost {cost:.3}, {} expansions",
            points.len(),
            search.expanded
        );
        Ok(Path { points, cost })
    }
}
