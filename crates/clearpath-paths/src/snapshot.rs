//! Obstacle layout snapshots.
//!
//! Only the configuration and the obstacle coordinates are captured; memoized
//! clearance data is rebuilt on demand after a restore.

use clearpath_core::Point;

use crate::config::GridConfig;
use crate::error::GridError;
use crate::grid::Grid;

/// Configuration plus obstacle coordinates, sorted row-major.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSnapshot {
    pub config: GridConfig,
    pub obstacles: Vec<Point>,
}

impl Grid {
    /// Capture the grid's configuration and obstacles.
    pub fn snapshot(&self) -> GridSnapshot {
        let mut obstacles: Vec<Point> = self.obstacles().collect();
        obstacles.sort_unstable_by_key(|p| (p.y, p.x));
        GridSnapshot {
            config: self.config.clone(),
            obstacles,
        }
    }

    /// Build a grid from a snapshot by replaying its obstacles.
    pub fn from_snapshot(snapshot: &GridSnapshot) -> Result<Self, GridError> {
        let mut grid = Grid::with_config(snapshot.config.clone())?;
        for &p in &snapshot.obstacles {
            grid.set_obstacle(p, true);
        }
        Ok(grid)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.snapshot().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let snapshot = GridSnapshot::deserialize(deserializer)?;
        Grid::from_snapshot(&snapshot).map_err(serde::de::Error::custom)
    }
}
