use criterion::{criterion_group, criterion_main, Criterion};
use grid_astar::{AstarSolver, Cell, OccupancyGrid};
use grid_astar_boards::{generate_board, BoardConfig};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const N_SCENARIOS: usize = 64;

fn random_scenarios(grid: &OccupancyGrid, rng: &mut StdRng) -> Vec<(Cell, Cell)> {
    let mut random_free_cell = || loop {
        let cell = Cell::new(
            rng.gen_range(0..grid.rows() as i32),
            rng.gen_range(0..grid.cols() as i32),
        );
        if grid.is_free(&cell) {
            return cell;
        }
    };
    (0..N_SCENARIOS)
        .map(|_| (random_free_cell(), random_free_cell()))
        .collect()
}

fn random_board_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for terrain_chance in [0.1, 0.3] {
        let config = BoardConfig {
            terrain_chance,
            ..BoardConfig::default()
        };
        let mut grid = generate_board(&config, &mut rng).unwrap();
        let scenarios = random_scenarios(&grid, &mut rng);
        let (rows, cols) = config.dimensions();
        for use_components in [false, true] {
            if use_components {
                grid.generate_components();
            }
            let solver = AstarSolver { use_components };
            let components_str = if use_components { " (components)" } else { "" };
            c.bench_function(
                format!("{rows}x{cols}, terrain {terrain_chance}{components_str}").as_str(),
                |b| {
                    b.iter(|| {
                        for (start, end) in &scenarios {
                            black_box(solver.find_path(&grid, *start, *end).ok());
                        }
                    })
                },
            );
        }
    }
}

criterion_group!(benches, random_board_bench);
criterion_main!(benches);
