use std::collections::HashMap;

use clearpath_core::Point;

use crate::frontier::Frontier;
use crate::traits::AstarPather;

/// The working set left behind by one A* search.
///
/// `came_from` maps every reached cell to its predecessor, with the start
/// mapped to `None`. Both maps are empty when the goal was not reached.
#[derive(Debug, Clone, Default)]
pub struct Search {
    pub came_from: HashMap<Point, Option<Point>>,
    pub cost_so_far: HashMap<Point, f64>,
    /// Number of frontier entries expanded.
    pub expanded: usize,
}

impl Search {
    /// Whether the search produced no result.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.came_from.is_empty()
    }

    /// Least cost found from the start to `p`.
    #[inline]
    pub fn cost_to(&self, p: Point) -> Option<f64> {
        self.cost_so_far.get(&p).copied()
    }
}

/// Search for the cheapest route from `start` to `goal` for an agent of
/// `agent_size`.
///
/// Any move whose cumulative cost reaches `max_cost` is discarded, so
/// `max_cost` bounds both the answer and the explored area. If the direct
/// cost between the endpoints already reaches it (an endpoint is an
/// obstacle, or they are too far apart) nothing is explored.
pub fn astar_search<P: AstarPather>(
    pather: &mut P,
    start: Point,
    goal: Point,
    agent_size: u32,
    max_cost: f64,
) -> Search {
    let mut search = Search::default();
    if pather.cost(start, goal, max_cost) >= max_cost {
        return search;
    }

    let mut frontier = Frontier::new();
    frontier.push(start, 0.0, 0.0);
    search.came_from.insert(start, None);
    search.cost_so_far.insert(start, 0.0);

    let mut nbuf = Vec::with_capacity(8);

    let found = 'search: loop {
        let Some(current) = frontier.pop() else {
            break 'search false;
        };

        let cp = current.pos;
        // Skip entries superseded by a cheaper push.
        if search.cost_so_far.get(&cp).is_some_and(|&g| current.g > g) {
            continue;
        }
        search.expanded += 1;

        if cp == goal {
            break 'search true;
        }

        nbuf.clear();
        pather.neighbors(cp, agent_size, &mut nbuf);

        for &np in nbuf.iter() {
            let tentative = current.g + pather.cost(cp, np, max_cost);
            if tentative >= max_cost {
                continue;
            }
            if search.cost_so_far.get(&np).is_some_and(|&g| tentative >= g) {
                continue;
            }
            search.cost_so_far.insert(np, tentative);
            search.came_from.insert(np, Some(cp));
            frontier.push(np, tentative, tentative + pather.estimate(np, goal));
        }
    };

    if !found {
        let expanded = search.expanded;
        return Search {
            expanded,
            ..Search::default()
        };
    }
    search
}
