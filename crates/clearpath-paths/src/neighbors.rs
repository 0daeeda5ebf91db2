use clearpath_core::Point;

use crate::error::GridError;
use crate::grid::Grid;

/// 4-directional move template.
pub const CARDINAL: [Point; 4] = [
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(-1, 0),
];

/// 8-directional move template.
pub const ALL: [Point; 8] = [
    Point::new(0, 1),
    Point::new(1, 1),
    Point::new(1, 0),
    Point::new(1, -1),
    Point::new(0, -1),
    Point::new(-1, -1),
    Point::new(-1, 0),
    Point::new(-1, 1),
];

impl Grid {
    /// Cells an agent of `agent_size` standing on `p` may step to.
    ///
    /// Empty when `p` is an obstacle or lacks clearance for the agent.
    pub fn neighbors(&mut self, p: Point, agent_size: u32) -> Result<Vec<Point>, GridError> {
        self.config.check_agent_size(agent_size)?;
        let mut buf = Vec::with_capacity(8);
        self.resolve_neighbors(p, agent_size, &mut buf);
        Ok(buf)
    }

    /// Append the admissible neighbors of `p` to `buf`, memoizing the list
    /// on `p`'s cell for the current generation.
    pub(crate) fn resolve_neighbors(&mut self, p: Point, agent_size: u32, buf: &mut Vec<Point>) {
        let generation = self.generation;
        if let Some(cached) = self.cell_mut(p).memo(generation).neighbors.get(&agent_size) {
            buf.extend_from_slice(cached);
            return;
        }

        let start = buf.len();
        if !self.get_cell(p).is_obstacle() && self.occupiable(p, agent_size) {
            let template: &[Point] = if self.config.connectivity.diagonal(agent_size) {
                &ALL
            } else {
                &CARDINAL
            };
            for q in template.iter().filter_map(|&d| p.checked_add(d)) {
                if self.admits(q, agent_size) {
                    buf.push(q);
                }
            }
        }

        let list = buf[start..].to_vec();
        self.cell_mut(p)
            .memo(generation)
            .neighbors
            .insert(agent_size, list);
    }
}
