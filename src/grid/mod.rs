use std::fmt;

use num_traits::{Num, Signed};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::GridError;


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed,
{
    (x1 - x2).abs() + (y1 - y2).abs()
}


/// Grid coordinate, 1-indexed: (1, 1) is the top left cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The adjacent cell one step away, without bounds checking
    pub fn step(self, direction: Direction) -> Cell {
        let (dr, dc) = direction.offset();
        Cell::new(self.row + dr, self.col + dc)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}


/// Compass direction on the grid
/// North points toward row 1, West toward column 1
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// (row, col) delta of one step in this direction
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Single letter code used in move strings
    pub fn as_char(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Direction> {
        match c {
            'N' => Some(Direction::North),
            'S' => Some(Direction::South),
            'E' => Some(Direction::East),
            'W' => Some(Direction::West),
            _ => None,
        }
    }
}


/// Open or closed state of the four walls around one cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Passages {
    north: bool,
    south: bool,
    east: bool,
    west: bool,
}

impl Passages {
    pub fn is_open(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    fn set_open(&mut self, direction: Direction) {
        match direction {
            Direction::North => self.north = true,
            Direction::South => self.south = true,
            Direction::East => self.east = true,
            Direction::West => self.west = true,
        }
    }
}


/// Rectangular maze grid with one passage record per cell
///
/// Passages are carved symmetrically: opening a passage also opens the
/// reciprocal side of the neighbor, so a well formed grid never has a
/// one way wall and an open passage always leads to an in-bounds cell.
/// Deserialization rejects payloads that break either rule.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Grid {
    rows: i32,
    cols: i32,
    cells: Vec<Passages>,
}

impl Grid {
    /// Create a grid with every wall closed
    /// Dimensions must be positive and small enough that every flat cell
    /// index stays representable in i32 arithmetic
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        if rows < 1 || cols < 1 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let Some(count) = rows.checked_mul(cols) else {
            return Err(GridError::InvalidDimensions { rows, cols });
        };
        Ok(Self {
            rows,
            cols,
            cells: vec![Passages::default(); count as usize],
        })
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Number of cells in the grid
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Conventional start cell, the top left corner (1, 1)
    pub fn near_corner(&self) -> Cell {
        Cell::new(1, 1)
    }

    /// Conventional goal cell, the bottom right corner (rows, cols)
    pub fn far_corner(&self) -> Cell {
        Cell::new(self.rows, self.cols)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= 1 && cell.row <= self.rows && cell.col >= 1 && cell.col <= self.cols
    }

    /// Row-major index of the cell, None when out of bounds
    fn idx(&self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        Some(((cell.row - 1) * self.cols + (cell.col - 1)) as usize)
    }

    /// Whether the passage out of `cell` in `direction` is open
    /// Cells outside the grid have no open passages
    pub fn passage(&self, cell: Cell, direction: Direction) -> bool {
        match self.idx(cell) {
            Some(i) => self.cells[i].is_open(direction),
            None => false,
        }
    }

    /// Open the passage between `cell` and its neighbor in `direction`
    /// Carves both sides; does nothing when either end is outside the grid
    pub fn open_passage(&mut self, cell: Cell, direction: Direction) {
        let neighbor = cell.step(direction);
        let (Some(i), Some(j)) = (self.idx(cell), self.idx(neighbor)) else {
            return;
        };
        self.cells[i].set_open(direction);
        self.cells[j].set_open(direction.opposite());
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (rows, cols) = (self.rows, self.cols);
        (1..=rows).flat_map(move |row| (1..=cols).map(move |col| Cell::new(row, col)))
    }
}

// Grids can arrive from another process, so deserialization funnels
// through Grid::new and re-checks the carving invariants instead of
// trusting the payload.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct RawGrid {
            rows: i32,
            cols: i32,
            cells: Vec<Passages>,
        }

        let raw = RawGrid::deserialize(deserializer)?;
        let mut grid = Grid::new(raw.rows, raw.cols).map_err(serde::de::Error::custom)?;
        if raw.cells.len() != grid.cells.len() {
            return Err(serde::de::Error::custom(format!(
                "expected {} passage records, got {}",
                grid.cells.len(),
                raw.cells.len()
            )));
        }
        grid.cells = raw.cells;

        for cell in grid.cells() {
            for direction in [
                Direction::North,
                Direction::South,
                Direction::East,
                Direction::West,
            ] {
                // Covers border leaks too: a neighbor outside the grid
                // never reports an open passage back
                if grid.passage(cell, direction)
                    && !grid.passage(cell.step(direction), direction.opposite())
                {
                    return Err(serde::de::Error::custom(format!(
                        "one way passage out of {cell} heading {}",
                        direction.as_char()
                    )));
                }
            }
        }

        Ok(grid)
    }
}
