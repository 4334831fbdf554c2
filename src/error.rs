use crate::cell::Cell;
use core::fmt;

/// Failures of a path query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathError {
    /// The start or goal lies outside the grid.
    InvalidBounds { cell: Cell, rows: usize, cols: usize },
    /// The start or goal is occupied.
    BlockedEndpoint { cell: Cell },
    /// The grid has no rows or no columns.
    EmptyGrid,
    /// Every reachable cell was expanded without meeting the goal.
    NoPathFound,
    /// A minimum was requested from an empty frontier.
    EmptyFrontier,
    /// The per-iteration hook asked the search to stop.
    Interrupted,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds { cell, rows, cols } => {
                write!(f, "cell {cell} lies outside the {rows}x{cols} grid")
            }
            Self::BlockedEndpoint { cell } => write!(f, "endpoint {cell} is blocked"),
            Self::EmptyGrid => write!(f, "grid has no cells"),
            Self::NoPathFound => write!(f, "no path between start and goal"),
            Self::EmptyFrontier => write!(f, "minimum requested from an empty frontier"),
            Self::Interrupted => write!(f, "search interrupted"),
        }
    }
}

impl std::error::Error for PathError {}
