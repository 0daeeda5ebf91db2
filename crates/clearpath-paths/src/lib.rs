//! Footprint-aware pathfinding on an unbounded, sparse 2D grid.
//!
//! A [`Grid`] materializes cells on first touch and keeps a cache
//! generation counter that every obstacle edit bumps. On top of it:
//!
//! - **Clearance** per cell, either as distance to the nearest obstacle or
//!   as an anchored footprint check ([`Clearance`], [`Grid::wall_distance`],
//!   [`Grid::admits_footprint`])
//! - **Neighbor resolution** for an agent of a given size, 4-connected for
//!   single-cell agents and 8-connected above ([`Grid::neighbors`])
//! - **A\*** search with Euclidean move costs and a hard cost bound
//!   ([`Grid::get_path`], [`astar_search`])
//! - **Reachable region** flood within a cost bound ([`Grid::reachable`])
//!
//! Memoized per-cell data is tagged with the generation it was computed in
//! and recomputed lazily, so edits are O(1) and queries only pay for the
//! cells they actually visit.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | reachable flood |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod cell;
mod clearance;
mod config;
mod dijkstra;
mod distance;
mod error;
mod frontier;
mod grid;
mod neighbors;
mod path;
mod snapshot;
mod traits;

pub use astar::{Search, astar_search};
pub use cell::Cell;
pub use config::{
    AGENT_SIZE_LIMIT, Agent, Clearance, Connectivity, DEFAULT_MAX_AGENT_SIZE, DEFAULT_MAX_COST,
    GridConfig, Heuristic,
};
pub use dijkstra::{PathNode, dijkstra_reach};
pub use distance::{euclidean, manhattan};
pub use error::GridError;
pub use grid::Grid;
pub use neighbors::{ALL, CARDINAL};
pub use path::{Path, PathOrder, UNREACHABLE_COST, reconstruct_path};
pub use snapshot::GridSnapshot;
pub use traits::{AstarPather, Pather, WeightedPather};
