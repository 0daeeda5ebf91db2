use std::fmt;

/// Errors returned for invalid query arguments or grid configuration.
///
/// A query with valid arguments never fails: an unreachable goal is reported
/// through [`Path::unreachable`](crate::Path::unreachable), not as an error.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// The agent footprint is outside `1..=max`.
    InvalidAgentSize { size: u32, max: u32 },
    /// A cost bound that is not a positive number.
    InvalidMaxCost(f64),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAgentSize { size, max } => {
                write!(f, "agent size {size} is outside the supported range 1..={max}")
            }
            Self::InvalidMaxCost(c) => write!(f, "max cost must be a positive number, got {c}"),
        }
    }
}

impl std::error::Error for GridError {}
