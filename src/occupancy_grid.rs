use crate::cell::Cell;
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [OccupancyGrid] stores which cells are blocked ([true]) or free ([false]) in a [BoolGrid], and
/// optionally maintains 8-connected components of the free cells using a [UnionFind] structure.
/// Cells are addressed by row and column; internally the column is the `x` and the row the `y`
/// coordinate of the [BoolGrid].
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
    rows: usize,
    cols: usize,
}

impl Default for OccupancyGrid {
    fn default() -> OccupancyGrid {
        OccupancyGrid::new(0, 0)
    }
}

impl OccupancyGrid {
    /// Creates a grid with every cell free. Components are marked dirty until
    /// [generate_components](Self::generate_components) is called.
    pub fn new(rows: usize, cols: usize) -> OccupancyGrid {
        OccupancyGrid::filled(rows, cols, false)
    }

    /// Creates a grid with every cell set to `blocked`.
    pub fn filled(rows: usize, cols: usize, blocked: bool) -> OccupancyGrid {
        OccupancyGrid {
            grid: BoolGrid::new(cols, rows, blocked),
            components: UnionFind::new(rows * cols),
            components_dirty: true,
            rows,
            cols,
        }
    }

    /// Builds a grid from rows of occupancy flags. All rows must have the same length as the
    /// first; shorter rows are padded with free cells and longer rows truncated.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> OccupancyGrid {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut grid = OccupancyGrid::new(rows.len(), cols);
        for (row, values) in rows.iter().enumerate() {
            for (col, &blocked) in values.as_ref().iter().take(cols).enumerate() {
                if blocked {
                    grid.grid.set(col as i32, row as i32, true);
                }
            }
        }
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn in_bounds(&self, cell: &Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows
            && (cell.col as usize) < self.cols
    }

    /// Whether the cell is blocked. Out of bounds cells count as blocked.
    pub fn is_blocked(&self, cell: &Cell) -> bool {
        !self.in_bounds(cell) || self.grid.get(cell.col, cell.row)
    }

    pub fn is_free(&self, cell: &Cell) -> bool {
        !self.is_blocked(cell)
    }

    pub fn blocked_count(&self) -> usize {
        self.cells().filter(|c| self.is_blocked(c)).count()
    }

    /// All cells of the grid in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows as i32)
            .flat_map(move |row| (0..self.cols as i32).map(move |col| Cell::new(row, col)))
    }

    /// Free cells among the 8 neighbours of `cell`, in row-offset-major order.
    pub fn neighbours(&self, cell: &Cell) -> SmallVec<[Cell; 8]> {
        cell.moore_neighbourhood()
            .filter(|n| self.is_free(n))
            .collect::<SmallVec<[Cell; 8]>>()
    }

    /// Updates a cell. Joins newly connected components when a cell is freed and flags the
    /// components as dirty if they are (potentially) broken apart by blocking a cell.
    ///
    /// Panics if the cell lies outside the grid.
    pub fn set(&mut self, cell: Cell, blocked: bool) {
        assert!(self.in_bounds(&cell), "cell {cell} outside the grid");
        if blocked {
            if !self.is_blocked(&cell) {
                self.components_dirty = true;
            }
        } else {
            let ix = self.index(&cell);
            for n in self.neighbours(&cell) {
                self.components.union(ix, self.index(&n));
            }
        }
        self.grid.set(cell.col, cell.row, blocked);
    }

    pub fn set_point(&mut self, point: Point, blocked: bool) {
        self.set(point.into(), blocked)
    }

    /// Row-major index of an in-bounds cell.
    fn index(&self, cell: &Cell) -> usize {
        cell.row as usize * self.cols + cell.col as usize
    }

    /// Retrieves the component id a given [Cell] belongs to.
    pub fn get_component(&self, cell: &Cell) -> usize {
        self.components.find(self.index(cell))
    }

    /// Checks if start and goal are on the same component. Only meaningful while the components
    /// are not dirty.
    pub fn reachable(&self, start: &Cell, goal: &Cell) -> bool {
        self.in_bounds(start)
            && self.in_bounds(goal)
            && self
                .components
                .equiv(self.index(start), self.index(goal))
    }

    pub fn unreachable(&self, start: &Cell, goal: &Cell) -> bool {
        !self.reachable(start, goal)
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up free grid neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.rows * self.cols);
        self.components_dirty = false;
        for cell in self.cells().collect::<Vec<_>>() {
            if self.is_blocked(&cell) {
                continue;
            }
            let parent_ix = self.index(&cell);
            // The other half of the neighbourhood is covered by the cells visited later
            [
                cell.offset(0, 1),
                cell.offset(1, -1),
                cell.offset(1, 0),
                cell.offset(1, 1),
            ]
            .iter()
            .filter(|n| self.is_free(n))
            .map(|n| self.index(n))
            .collect::<SmallVec<[usize; 4]>>()
            .into_iter()
            .for_each(|ix| {
                self.components.union(parent_ix, ix);
            });
        }
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows as i32 {
            let line = (0..self.cols as i32)
                .map(|col| {
                    if self.is_blocked(&Cell::new(row, col)) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests whether cells are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // Corresponds to the following 2x3 grid:
        //  ___
        // | # |
        // | # |
        //  ___
        let mut grid = OccupancyGrid::new(2, 3);
        grid.set(Cell::new(0, 1), true);
        grid.set(Cell::new(1, 1), true);
        grid.generate_components();
        let c1 = Cell::new(0, 0);
        let c2 = Cell::new(1, 1);
        let c3 = Cell::new(1, 0);
        let c4 = Cell::new(0, 2);
        assert_ne!(grid.get_component(&c1), grid.get_component(&c2));
        assert_eq!(grid.get_component(&c1), grid.get_component(&c3));
        assert_ne!(grid.get_component(&c1), grid.get_component(&c4));
        assert!(grid.unreachable(&c1, &c4));
        assert!(grid.reachable(&c1, &c3));
    }

    // Diagonal neighbours are connected even if both shared orthogonal cells are blocked.
    #[test]
    fn diagonal_connection() {
        //  __
        // | #|
        // |# |
        //  __
        let mut grid = OccupancyGrid::filled(2, 2, true);
        grid.set(Cell::new(0, 0), false);
        grid.set(Cell::new(1, 1), false);
        grid.generate_components();
        assert!(grid.reachable(&Cell::new(0, 0), &Cell::new(1, 1)));
    }

    #[test]
    fn anti_diagonal_connection() {
        let grid_rows = [[true, false], [false, true]];
        let mut grid = OccupancyGrid::from_rows(&grid_rows);
        grid.generate_components();
        assert!(grid.reachable(&Cell::new(0, 1), &Cell::new(1, 0)));
    }

    #[test]
    fn blocking_marks_components_dirty() {
        let mut grid = OccupancyGrid::new(3, 3);
        assert!(grid.components_dirty);
        grid.generate_components();
        assert!(!grid.components_dirty);
        grid.set(Cell::new(1, 1), false);
        assert!(!grid.components_dirty);
        grid.set(Cell::new(1, 1), true);
        assert!(grid.components_dirty);
        grid.update();
        assert!(!grid.components_dirty);
    }

    /// Freeing a cell that bridges two regions joins their components without regeneration.
    #[test]
    fn freeing_joins_components() {
        let mut grid = OccupancyGrid::from_rows(&[[false, true, false]]);
        grid.generate_components();
        assert!(grid.unreachable(&Cell::new(0, 0), &Cell::new(0, 2)));
        grid.set(Cell::new(0, 1), false);
        assert!(!grid.components_dirty);
        assert!(grid.reachable(&Cell::new(0, 0), &Cell::new(0, 2)));
    }

    #[test]
    fn neighbours_respect_bounds_and_obstacles() {
        let mut grid = OccupancyGrid::new(3, 3);
        grid.set(Cell::new(0, 1), true);
        let corner = grid.neighbours(&Cell::new(0, 0));
        assert_eq!(corner.as_slice(), &[Cell::new(1, 0), Cell::new(1, 1)]);
        assert_eq!(grid.neighbours(&Cell::new(1, 1)).len(), 7);
    }

    #[test]
    fn out_of_bounds_is_blocked() {
        let grid = OccupancyGrid::new(2, 4);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 4);
        assert!(grid.is_free(&Cell::new(1, 3)));
        assert!(grid.is_blocked(&Cell::new(2, 0)));
        assert!(grid.is_blocked(&Cell::new(0, 4)));
        assert!(grid.is_blocked(&Cell::new(-1, 0)));
    }

    #[test]
    fn set_by_point() {
        let mut grid = OccupancyGrid::new(2, 3);
        grid.set_point(Point::new(2, 1), true);
        assert!(grid.is_blocked(&Cell::new(1, 2)));
        assert_eq!(grid.blocked_count(), 1);
    }

    #[test]
    fn display() {
        let grid = OccupancyGrid::from_rows(&[vec![false, true], vec![false, false]]);
        assert_eq!(grid.to_string(), ".#\n..\n");
        assert_eq!(grid.blocked_count(), 1);
        assert!(OccupancyGrid::default().is_empty());
    }
}
