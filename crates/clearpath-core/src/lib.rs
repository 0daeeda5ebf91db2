//! **clearpath-core**: coordinate types shared by the *clearpath* crates.
//!
//! A [`Point`] names one cell of an unbounded 2D grid; a [`Range`] names a
//! finite rectangle of such cells.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
