/// Fuzzes the search by checking for many random boards that a path is found exactly when the goal
/// is reachable by being part of the same connected component, and that every path found is valid.
use grid_astar::{is_valid_path, AstarSolver, Cell, OccupancyGrid, PathError};
use grid_astar_boards::{generate_board, BoardConfig};
use rand::prelude::*;

fn random_grid(n: u32, rng: &mut StdRng) -> OccupancyGrid {
    let config = BoardConfig {
        resolution: (n, n),
        scale_factor: 1,
        terrain_chance: 0.4,
    };
    let mut grid = generate_board(&config, rng).unwrap();
    grid.generate_components();
    grid
}

fn visualize_grid(grid: &OccupancyGrid, start: &Cell, end: &Cell) {
    for row in 0..grid.rows() as i32 {
        for col in 0..grid.cols() as i32 {
            let c = Cell::new(row, col);
            if *start == c {
                print!("S");
            } else if *end == c {
                print!("G");
            } else if grid.is_blocked(&c) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

#[test]
fn fuzz() {
    const N: u32 = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let mut solver = AstarSolver::new();
    // The full search has to agree with the components on its own
    solver.use_components = false;

    let start = Cell::new(0, 0);
    let end = Cell::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, &mut rng);
        grid.set(start, false);
        grid.set(end, false);
        let reachable = grid.reachable(&start, &end);
        let path = solver.find_path(&grid, start, end);
        // Show the grid if a path is not found
        if path.is_ok() != reachable {
            visualize_grid(&grid, &start, &end);
        }
        assert_eq!(path.is_ok(), reachable);
        match path {
            Ok(path) => {
                assert!(is_valid_path(&grid, &path));
                assert_eq!(path.first(), Some(&start));
                assert_eq!(path.last(), Some(&end));
            }
            Err(e) => assert_eq!(e, PathError::NoPathFound),
        }
    }
}

/// With and without the component check, the same path or the same error is returned.
#[test]
fn fuzz_component_shortcut() {
    const N: u32 = 8;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(1);
    let with_components = AstarSolver::new();
    let mut without_components = AstarSolver::new();
    without_components.use_components = false;

    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, &mut rng);
        let start = Cell::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let goal = Cell::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        grid.set(start, false);
        grid.set(goal, false);
        assert_eq!(
            with_components.find_path(&grid, start, goal),
            without_components.find_path(&grid, start, goal)
        );
    }
}
