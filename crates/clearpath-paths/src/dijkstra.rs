use std::collections::{HashMap, HashSet};

use clearpath_core::Point;

use crate::config::check_max_cost;
use crate::error::GridError;
use crate::frontier::Frontier;
use crate::grid::Grid;
use crate::traits::WeightedPather;

/// A position with its least cost from the flood origin.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: f64,
}

/// Flood outward from `start` and return every cell an agent of
/// `agent_size` can reach for less than `max_cost`, cheapest first.
///
/// Uses the same moves and costs as [`astar_search`](crate::astar_search).
/// Empty if `start` is an obstacle.
pub fn dijkstra_reach<P: WeightedPather>(
    pather: &mut P,
    start: Point,
    agent_size: u32,
    max_cost: f64,
) -> Vec<PathNode> {
    let mut results = Vec::new();
    if pather.cost(start, start, max_cost) >= max_cost {
        return results;
    }

    let mut best: HashMap<Point, f64> = HashMap::new();
    let mut settled: HashSet<Point> = HashSet::new();
    let mut frontier = Frontier::new();
    best.insert(start, 0.0);
    frontier.push(start, 0.0, 0.0);

    let mut nbuf = Vec::with_capacity(8);

    while let Some(current) = frontier.pop() {
        let cp = current.pos;
        if !settled.insert(cp) {
            continue;
        }
        results.push(PathNode {
            pos: cp,
            cost: current.g,
        });

        nbuf.clear();
        pather.neighbors(cp, agent_size, &mut nbuf);

        for &np in nbuf.iter() {
            if settled.contains(&np) {
                continue;
            }
            let tentative = current.g + pather.cost(cp, np, max_cost);
            if tentative >= max_cost {
                continue;
            }
            if best.get(&np).is_some_and(|&g| tentative >= g) {
                continue;
            }
            best.insert(np, tentative);
            frontier.push(np, tentative, tentative);
        }
    }

    results
}

impl Grid {
    /// Every cell an agent of `agent_size` standing on `start` can reach for
    /// less than `max_cost`, cheapest first.
    ///
    /// Useful to preview movement range or drive radius-based visibility.
    pub fn reachable(
        &mut self,
        start: Point,
        agent_size: u32,
        max_cost: f64,
    ) -> Result<Vec<PathNode>, GridError> {
        self.config.check_agent_size(agent_size)?;
        check_max_cost(max_cost)?;
        let nodes = dijkstra_reach(self, start, agent_size, max_cost);
        log::debug!(
            "{} cells reachable from {start} (size {agent_size}, max cost {max_cost})",
            nodes.len()
        );
        Ok(nodes)
    }
}
