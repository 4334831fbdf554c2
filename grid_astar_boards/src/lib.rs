//! Boards for `grid_astar`: random boards generated from a [BoardConfig], and boards drawn as
//! text. The search itself never generates boards; tests, benches and demos get them from here.
use core::fmt;
use grid_astar::{Cell, OccupancyGrid};
use log::debug;
use rand::Rng;
use serde::Deserialize;

/// Parameters of a randomly generated board. A screen of `resolution` pixels is divided into
/// square cells of `scale_factor` pixels, and each cell is blocked with probability
/// `terrain_chance`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub resolution: (u32, u32),
    pub scale_factor: u32,
    pub terrain_chance: f64,
}

impl Default for BoardConfig {
    fn default() -> BoardConfig {
        BoardConfig {
            resolution: (600, 600),
            scale_factor: 10,
            terrain_chance: 0.1,
        }
    }
}

impl BoardConfig {
    /// Parses a config from TOML. Missing keys take their default value.
    pub fn from_toml_str(s: &str) -> Result<BoardConfig, BoardError> {
        let config: BoardConfig =
            toml::from_str(s).map_err(|e| BoardError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BoardError> {
        if self.scale_factor == 0 {
            return Err(BoardError::Config("scale_factor must be positive".to_owned()));
        }
        if !(0.0..=1.0).contains(&self.terrain_chance) {
            return Err(BoardError::Config(format!(
                "terrain_chance {} outside [0, 1]",
                self.terrain_chance
            )));
        }
        Ok(())
    }

    /// Rows and columns of the board.
    pub fn dimensions(&self) -> (usize, usize) {
        let scale = self.scale_factor.max(1);
        (
            (self.resolution.0 / scale) as usize,
            (self.resolution.1 / scale) as usize,
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    Config(String),
    UnknownTile { line: usize, column: usize, tile: char },
    RaggedRow { line: usize, expected: usize, found: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "invalid board config: {msg}"),
            Self::UnknownTile { line, column, tile } => {
                write!(f, "unknown tile {tile:?} at line {line}, column {column}")
            }
            Self::RaggedRow {
                line,
                expected,
                found,
            } => write!(f, "line {line} has {found} tiles, expected {expected}"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Generates a board with randomly placed walls.
pub fn generate_board<R: Rng>(config: &BoardConfig, rng: &mut R) -> Result<OccupancyGrid, BoardError> {
    config.validate()?;
    let (rows, cols) = config.dimensions();
    let mut grid = OccupancyGrid::new(rows, cols);
    for row in 0..rows as i32 {
        for col in 0..cols as i32 {
            if rng.gen_bool(config.terrain_chance) {
                grid.set(Cell::new(row, col), true);
            }
        }
    }
    debug!(
        "Generated {}x{} board with {} walls",
        rows,
        cols,
        grid.blocked_count()
    );
    Ok(grid)
}

/// Parses a board drawn as text, one line per row. `.` is free and `#` is blocked; `S` and `G`
/// mark free start and goal cells and are returned alongside the grid. Blank lines are skipped.
pub fn parse_board(text: &str) -> Result<(OccupancyGrid, Option<Cell>, Option<Cell>), BoardError> {
    let mut rows: Vec<Vec<bool>> = Vec::new();
    let mut start = None;
    let mut goal = None;
    for (line_ix, line) in text.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
        let row = rows.len() as i32;
        let mut flags = Vec::with_capacity(line.len());
        for (column, tile) in line.chars().enumerate() {
            match tile {
                '.' => flags.push(false),
                '#' => flags.push(true),
                'S' => {
                    start = Some(Cell::new(row, column as i32));
                    flags.push(false);
                }
                'G' => {
                    goal = Some(Cell::new(row, column as i32));
                    flags.push(false);
                }
                _ => {
                    return Err(BoardError::UnknownTile {
                        line: line_ix + 1,
                        column: column + 1,
                        tile,
                    })
                }
            }
        }
        if let Some(first) = rows.first() {
            if first.len() != flags.len() {
                return Err(BoardError::RaggedRow {
                    line: line_ix + 1,
                    expected: first.len(),
                    found: flags.len(),
                });
            }
        }
        rows.push(flags);
    }
    Ok((OccupancyGrid::from_rows(&rows), start, goal))
}
