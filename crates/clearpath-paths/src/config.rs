//! Grid configuration: admission strategy, move template, heuristic and the
//! accepted agent sizes.

use crate::error::GridError;

/// Cost bound used by [`Grid::get_path`](crate::Grid::get_path) when the
/// caller does not pass one.
pub const DEFAULT_MAX_COST: f64 = 50.0;

/// Largest footprint accepted by a default configuration.
pub const DEFAULT_MAX_AGENT_SIZE: u32 = 10;

/// Upper bound for [`GridConfig::max_agent_size`]. Clearance scans cost
/// O(size²) per cell, and sizes must stay usable as coordinate offsets.
pub const AGENT_SIZE_LIMIT: u32 = 64;

/// How a cell decides whether it admits an agent of a given footprint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Clearance {
    /// Center-anchored: compare the cell's distance to the nearest obstacle
    /// against half the footprint.
    #[default]
    WallDistance,
    /// Corner-anchored: the `size`×`size` block whose top-left cell is the
    /// candidate must contain no obstacle.
    Footprint,
}

/// Which move template the neighbor resolver uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Size-1 agents move on 4 neighbors (no corner cutting), larger agents
    /// on 8.
    #[default]
    Adaptive,
    /// Every agent moves on 8 neighbors.
    Eight,
}

impl Connectivity {
    /// Whether an agent of `agent_size` may take diagonal steps.
    #[inline]
    pub fn diagonal(self, agent_size: u32) -> bool {
        match self {
            Self::Adaptive => agent_size > 1,
            Self::Eight => true,
        }
    }
}

/// Remaining-cost estimate used to order the A* frontier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// `|dx| + |dy|`. Never overestimates on 4-connected moves; on the
    /// 8-connected template it can overestimate diagonal runs.
    #[default]
    Manhattan,
    /// Straight-line distance; never overestimates on either template.
    Euclidean,
}

/// Configuration for a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub clearance: Clearance,
    pub connectivity: Connectivity,
    pub heuristic: Heuristic,
    /// Largest accepted agent size, at most [`AGENT_SIZE_LIMIT`]; sizes
    /// outside `1..=max_agent_size` are rejected with
    /// [`GridError::InvalidAgentSize`].
    pub max_agent_size: u32,
    /// Cost bound for path queries that do not pass one explicitly.
    pub default_max_cost: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            clearance: Clearance::default(),
            connectivity: Connectivity::default(),
            heuristic: Heuristic::default(),
            max_agent_size: DEFAULT_MAX_AGENT_SIZE,
            default_max_cost: DEFAULT_MAX_COST,
        }
    }
}

impl GridConfig {
    /// Check the configuration for values no query could work with.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.max_agent_size == 0 || self.max_agent_size > AGENT_SIZE_LIMIT {
            return Err(GridError::InvalidAgentSize {
                size: self.max_agent_size,
                max: AGENT_SIZE_LIMIT,
            });
        }
        check_max_cost(self.default_max_cost)
    }

    /// Reject agent sizes outside `1..=max_agent_size`. The bound is also
    /// capped at [`AGENT_SIZE_LIMIT`], so an unvalidated configuration
    /// cannot let an oversized footprint through.
    #[inline]
    pub fn check_agent_size(&self, size: u32) -> Result<(), GridError> {
        let max = self.max_agent_size.min(AGENT_SIZE_LIMIT);
        if size == 0 || size > max {
            return Err(GridError::InvalidAgentSize { size, max });
        }
        Ok(())
    }
}

#[inline]
pub(crate) fn check_max_cost(max_cost: f64) -> Result<(), GridError> {
    // Also rejects NaN.
    if max_cost > 0.0 {
        Ok(())
    } else {
        Err(GridError::InvalidMaxCost(max_cost))
    }
}

/// A footprint size already validated against a configuration.
///
/// Callers that keep a "current agent" hold one of these and call
/// [`Grid::update_agent_size`](crate::Grid::update_agent_size) when they
/// replace it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    size: u32,
}

impl Agent {
    /// Validate `size` against `config`.
    pub fn new(size: u32, config: &GridConfig) -> Result<Self, GridError> {
        config.check_agent_size(size)?;
        Ok(Self { size })
    }

    /// Side length of the agent's square footprint, in cells.
    #[inline]
    pub fn size(self) -> u32 {
        self.size
    }
}
