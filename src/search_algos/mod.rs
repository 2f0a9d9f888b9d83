pub mod a_star;
pub mod bfs;
pub mod dfs;
mod trace_path;

use trace_path::trace_path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collections::FxIndexMap;
use crate::grid::{Cell, Direction};

/// Neighbor iteration order for the queue and stack searches
/// Load bearing for determinism: it decides which of several equal
/// length routes gets recorded in the parent map first
pub const EXPANSION_ORDER: [Direction; 4] = [
    Direction::East,
    Direction::South,
    Direction::North,
    Direction::West,
];

/// Type alias for the parent map used by the searches
/// The value is the index of the cell's parent within this same map
/// The start cell has no parent and stores usize::MAX instead
pub type ParentMap = FxIndexMap<Cell, usize>;

/// Outcome of a queue or stack search
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchResult {
    /// Cells from start to goal inclusive
    pub path: Vec<Cell>,
    /// Cells in the order the search explored them
    pub trace: Vec<Cell>,
}

impl SearchResult {
    /// Number of moves along the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}




#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::grid::Grid;
    use crate::search_algos::bfs::Bfs;

    #[test]
    fn search_results_round_trip_through_json() {
        let mut maze = Grid::new(1, 3).unwrap();
        maze.open_passage(Cell::new(1, 1), Direction::East);
        maze.open_passage(Cell::new(1, 2), Direction::East);

        let found = Bfs::new(&maze, maze.near_corner()).unwrap().solve().unwrap();
        let json = serde_json::to_string(&found).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();

        assert_eq!(back, found);
        assert_eq!(back.hops(), 2);
    }
}
