//! Level utilities for clearpath grids: ASCII layouts and random obstacle
//! fields, both replayed into a [`Grid`](clearpath_paths::Grid) through
//! `set_obstacle`.

pub mod layout;
pub mod scatter;

pub use layout::{Layout, LayoutError};
pub use scatter::Scatter;
