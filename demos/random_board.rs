use grid_astar::{find_path, Cell, PathError};
use grid_astar_boards::{generate_board, BoardConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Generates random boards from a config and paths from the top left to the bottom right corner,
// regenerating the board whenever the corners are blocked or not connected.
fn main() {
    let config = BoardConfig::from_toml_str(
        "
        resolution = [200, 300]
        scale_factor = 10
        terrain_chance = 0.3
        ",
    )
    .unwrap();
    let (rows, cols) = config.dimensions();
    let start = Cell::new(0, 0);
    let end = Cell::new(rows as i32 - 1, cols as i32 - 1);
    let mut rng = StdRng::seed_from_u64(42);
    for attempt in 1.. {
        let grid = generate_board(&config, &mut rng).unwrap();
        match find_path(&grid, start, end) {
            Ok(path) => {
                println!("{}", grid);
                println!("Attempt {attempt}: path of {} moves", path.len() - 1);
                for c in path {
                    println!("{}", c);
                }
                break;
            }
            Err(e @ (PathError::NoPathFound | PathError::BlockedEndpoint { .. })) => {
                println!("Attempt {attempt}: {e}, regenerating");
            }
            Err(e) => {
                eprintln!("{e}");
                break;
            }
        }
    }
}
