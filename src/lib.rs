//! # grid_astar
//!
//! A grid-based pathfinding engine. Implements [A*](https://en.wikipedia.org/wiki/A*_search_algorithm)
//! with an explicit open list ([Frontier]) and closed set over the free cells of an
//! [OccupancyGrid]. Movement is 8-directional and every move, including diagonal ones, costs 1.
//! The heuristic is the straight-line distance truncated to an integer, see
//! [euclidean_heuristic].
//!
//! Connected components can be pre-computed with
//! [OccupancyGrid::generate_components] to avoid flood-filling behaviour if no path exists.
//!
//! ```
//! use grid_astar::{find_path, Cell, OccupancyGrid};
//!
//! let mut grid = OccupancyGrid::new(3, 3);
//! grid.set(Cell::new(1, 1), true);
//! let path = find_path(&grid, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
//! assert_eq!(path.len(), 4);
//! ```
pub mod cell;
pub mod error;
pub mod frontier;
pub mod occupancy_grid;
pub mod path;
pub mod solver;

pub use cell::{euclidean_heuristic, Cell, NEIGHBOUR_OFFSETS};
pub use error::PathError;
pub use frontier::{Frontier, NodeId, SearchNode};
pub use occupancy_grid::OccupancyGrid;
pub use path::{is_valid_path, path_cost};
pub use solver::{AstarSolver, SearchOutcome, SearchProgress, SearchStats};

/// Computes a path from `start` to `goal`, both inclusive, using an [AstarSolver] with default
/// settings.
pub fn find_path(grid: &OccupancyGrid, start: Cell, goal: Cell) -> Result<Vec<Cell>, PathError> {
    AstarSolver::new().find_path(grid, start, goal)
}
