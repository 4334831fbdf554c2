use grid_astar::{AstarSolver, Cell, OccupancyGrid};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have an 8-neighbourhood

fn main() {
    let mut grid = OccupancyGrid::new(3, 3);
    grid.set(Cell::new(1, 1), true);
    grid.generate_components();
    println!("{}", grid);
    let start = Cell::new(0, 0);
    let end = Cell::new(2, 2);
    let outcome = AstarSolver::new().search(&grid, start, end).unwrap();
    println!("Path ({} moves):", outcome.cost());
    for c in outcome.path {
        println!("{}", c);
    }
    println!("{:?}", outcome.stats);
}
