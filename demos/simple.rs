use grid_astar::{find_path, Cell, OccupancyGrid};

// In this example a path is found on a grid with shape
// #####
// #S  #
// # # #
// #  E#
// #####
// S marks the start
// E marks the end
fn main() {
    let mut grid = OccupancyGrid::filled(5, 5, true);
    for row in 1..4 {
        for col in 1..4 {
            grid.set(Cell::new(row, col), false);
        }
    }
    grid.set(Cell::new(2, 2), true);
    let start = Cell::new(1, 1);
    let end = Cell::new(3, 3);
    if let Ok(path) = find_path(&grid, start, end) {
        println!("A path has been found:");
        for c in path {
            println!("{}", c);
        }
    }
}
