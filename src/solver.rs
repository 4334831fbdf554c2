use crate::cell::{euclidean_heuristic, Cell};
use crate::error::PathError;
use crate::frontier::{Frontier, NodeId, SearchNode};
use crate::occupancy_grid::OccupancyGrid;
use fxhash::FxHashMap;
use log::{debug, trace, warn};
use std::ops::ControlFlow;

/// Counters collected over one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped from the frontier.
    pub expanded: usize,
    /// Closed cells moved back to the frontier after a cheaper route was found.
    pub reopened: usize,
    pub max_frontier_len: usize,
}

/// Passed to the per-iteration hook of [AstarSolver::search_with_hook].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchProgress {
    pub iteration: usize,
    pub frontier_len: usize,
    pub expanded: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Cells from start to goal, both inclusive.
    pub path: Vec<Cell>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// Number of moves along the path.
    pub fn cost(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// A* over the 8-connected free cells of an [OccupancyGrid]. Every move costs 1 and the heuristic
/// is [euclidean_heuristic].
#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Reject goals on a different connected component before searching, provided the
    /// components of the grid are up to date.
    pub use_components: bool,
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            use_components: true,
        }
    }

    /// Computes a path from start to goal, both inclusive.
    pub fn find_path(
        &self,
        grid: &OccupancyGrid,
        start: Cell,
        goal: Cell,
    ) -> Result<Vec<Cell>, PathError> {
        self.search(grid, start, goal).map(|outcome| outcome.path)
    }

    /// Like [find_path](Self::find_path), but also reports [SearchStats].
    pub fn search(
        &self,
        grid: &OccupancyGrid,
        start: Cell,
        goal: Cell,
    ) -> Result<SearchOutcome, PathError> {
        self.search_with_hook(grid, start, goal, |_| ControlFlow::Continue(()))
    }

    /// Runs the search, calling `hook` before every expansion. Returning
    /// [ControlFlow::Break] from the hook ends the search with [PathError::Interrupted].
    pub fn search_with_hook<F>(
        &self,
        grid: &OccupancyGrid,
        start: Cell,
        goal: Cell,
        mut hook: F,
    ) -> Result<SearchOutcome, PathError>
    where
        F: FnMut(&SearchProgress) -> ControlFlow<()>,
    {
        validate_endpoints(grid, start, goal)?;
        let components_fresh = self.use_components && !grid.components_dirty;
        if components_fresh && grid.unreachable(&start, &goal) {
            debug!("{} is not reachable from {}", goal, start);
            return Err(PathError::NoPathFound);
        }
        debug!("Searching path from {} to {}", start, goal);

        let mut frontier = Frontier::new();
        let mut closed: FxHashMap<Cell, NodeId> = FxHashMap::default();
        let mut nodes: Vec<SearchNode> = Vec::new();
        let mut stats = SearchStats::default();
        let mut goal_id = None;

        frontier.insert_or_improve(SearchNode::new(
            start,
            None,
            0,
            euclidean_heuristic(&start, &goal),
        ));
        let mut iteration = 0;
        while !frontier.is_empty() {
            let progress = SearchProgress {
                iteration,
                frontier_len: frontier.len(),
                expanded: stats.expanded,
            };
            if hook(&progress).is_break() {
                debug!("Search interrupted after {} iterations", iteration);
                return Err(PathError::Interrupted);
            }
            iteration += 1;

            let current = match frontier.extract_min() {
                Ok(node) => node,
                Err(e) => unreachable!("non-empty frontier failed to yield a node: {e}"),
            };
            let current_id = NodeId(nodes.len());
            nodes.push(current);
            closed.insert(current.cell, current_id);
            stats.expanded += 1;

            if current.cell == goal {
                goal_id = Some(current_id);
                break;
            }

            for neighbour in grid.neighbours(&current.cell) {
                let candidate = SearchNode::new(
                    neighbour,
                    Some(current_id),
                    current.g + 1,
                    euclidean_heuristic(&neighbour, &goal),
                );
                match closed.get(&neighbour).copied() {
                    Some(closed_id) => {
                        // Equal costs do not reopen
                        if nodes[closed_id.0].f > candidate.f {
                            trace!("Reopening {} at f = {}", neighbour, candidate.f);
                            closed.remove(&neighbour);
                            frontier.reinsert(candidate);
                            stats.reopened += 1;
                        }
                    }
                    None => {
                        frontier.insert_or_improve(candidate);
                    }
                }
            }
        }
        stats.max_frontier_len = frontier.max_len();

        match goal_id {
            Some(id) => {
                let path = reconstruct_path(&nodes, id);
                debug!(
                    "Found path of {} moves after expanding {} nodes",
                    path.len() - 1,
                    stats.expanded
                );
                Ok(SearchOutcome { path, stats })
            }
            None => {
                if components_fresh {
                    warn!("Reachable goal could not be pathed to, are the components correct?");
                }
                debug!(
                    "Frontier exhausted after expanding {} nodes, no path from {} to {}",
                    stats.expanded, start, goal
                );
                Err(PathError::NoPathFound)
            }
        }
    }
}

/// Checks the endpoints of a query, in the order: empty grid, bounds, occupancy.
pub fn validate_endpoints(grid: &OccupancyGrid, start: Cell, goal: Cell) -> Result<(), PathError> {
    if grid.is_empty() {
        return Err(PathError::EmptyGrid);
    }
    for cell in [start, goal] {
        if !grid.in_bounds(&cell) {
            return Err(PathError::InvalidBounds {
                cell,
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
    }
    for cell in [start, goal] {
        if grid.is_blocked(&cell) {
            return Err(PathError::BlockedEndpoint { cell });
        }
    }
    Ok(())
}

/// Follows parent links from `end` back to the root and returns the cells root first.
fn reconstruct_path(nodes: &[SearchNode], end: NodeId) -> Vec<Cell> {
    let mut path: Vec<Cell> = std::iter::successors(Some(end), |id| nodes[id.0].parent)
        .map(|id| nodes[id.0].cell)
        .collect();
    path.reverse();
    path
}
