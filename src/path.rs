use crate::cell::Cell;
use crate::occupancy_grid::OccupancyGrid;
use itertools::Itertools;

/// Number of moves along a path. Every move, straight or diagonal, costs 1.
pub fn path_cost(path: &[Cell]) -> usize {
    path.len().saturating_sub(1)
}

/// Checks that a path is non-empty, only visits free cells and only takes single king moves.
pub fn is_valid_path(grid: &OccupancyGrid, path: &[Cell]) -> bool {
    !path.is_empty()
        && path.iter().all(|c| grid.is_free(c))
        && path.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
}
