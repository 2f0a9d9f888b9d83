use crate::errors::SolveError;
use crate::grid::{Cell, Grid};
use super::{EXPANSION_ORDER, ParentMap, SearchResult, trace_path};

use std::collections::VecDeque;

use log::debug;


/// Breadth first search over a maze grid
/// https://en.wikipedia.org/wiki/Breadth-first_search
///
/// Explores in FIFO order, so every cell at hop distance k is reached
/// before any cell at k + 1 and the first route to the goal is shortest.
pub struct Bfs<'a> {
    maze: &'a Grid,
    start: Cell,
    goal: Cell,
}

impl<'a> Bfs<'a> {

    /// Set up a solver from `start` to the far corner of `maze`
    /// Both endpoints must lie inside the grid
    pub fn new(maze: &'a Grid, start: Cell) -> Result<Self, SolveError> {
        let goal = maze.far_corner();
        if !maze.contains(start) {
            return Err(SolveError::InvalidStart(start));
        }
        if !maze.contains(goal) {
            return Err(SolveError::InvalidGoal(goal));
        }
        Ok(Self { maze, start, goal })
    }

    /// Run the search to completion
    /// The trace lists cells in discovery order, start excluded
    pub fn solve(self) -> Result<SearchResult, SolveError> {
        let mut frontier: VecDeque<(usize, Cell)> = VecDeque::new();
        let mut parents = ParentMap::default();
        let mut trace = Vec::new();

        // The start cell counts as visited up front; usize::MAX marks the
        // end of the walk back
        let start_index = parents.insert_full(self.start, usize::MAX).0;
        frontier.push_back((start_index, self.start));

        while let Some((index, cell)) = frontier.pop_front() {

            if cell == self.goal {
                let path = trace_path(&parents, index)?;
                debug!("bfs visited {} cells, path has {} hops", parents.len(), path.len() - 1);
                return Ok(SearchResult { path, trace });
            }

            for direction in EXPANSION_ORDER {
                if !self.maze.passage(cell, direction) {
                    continue;
                }
                let neighbor = cell.step(direction);

                // Visited check before enqueueing keeps the frontier linear
                if parents.contains_key(&neighbor) {
                    continue;
                }

                let neighbor_index = parents.insert_full(neighbor, index).0;
                frontier.push_back((neighbor_index, neighbor));
                trace.push(neighbor);
            }
        }

        Err(SolveError::Unreachable)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction;

    fn corridor(cols: i32) -> Grid {
        let mut maze = Grid::new(1, cols).unwrap();
        for col in 1..cols {
            maze.open_passage(Cell::new(1, col), Direction::East);
        }
        maze
    }

    fn open_grid(rows: i32, cols: i32) -> Grid {
        let mut maze = Grid::new(rows, cols).unwrap();
        let cells: Vec<Cell> = maze.cells().collect();
        for cell in cells {
            maze.open_passage(cell, Direction::East);
            maze.open_passage(cell, Direction::South);
        }
        maze
    }

    #[test]
    fn solves_a_straight_corridor() {
        let maze = corridor(5);
        let found = Bfs::new(&maze, maze.near_corner()).unwrap().solve().unwrap();

        let expected: Vec<Cell> = (1..=5).map(|col| Cell::new(1, col)).collect();
        assert_eq!(found.path, expected);
        assert_eq!(found.hops(), 4);

        // Discovery order on a corridor is the path minus the start
        assert_eq!(found.trace, expected[1..].to_vec());
    }

    #[test]
    fn single_cell_grid_is_already_solved() {
        let maze = Grid::new(1, 1).unwrap();
        let found = Bfs::new(&maze, maze.near_corner()).unwrap().solve().unwrap();
        assert_eq!(found.path, vec![Cell::new(1, 1)]);
        assert!(found.trace.is_empty());
    }

    #[test]
    fn starts_away_from_the_corner() {
        let maze = corridor(5);
        let found = Bfs::new(&maze, Cell::new(1, 3)).unwrap().solve().unwrap();

        let expected: Vec<Cell> = (3..=5).map(|col| Cell::new(1, col)).collect();
        assert_eq!(found.path, expected);
        assert_eq!(found.hops(), 2);
    }

    #[test]
    fn open_square_follows_the_east_first_order() {
        let maze = open_grid(2, 2);
        let found = Bfs::new(&maze, maze.near_corner()).unwrap().solve().unwrap();

        assert_eq!(
            found.path,
            vec![Cell::new(1, 1), Cell::new(1, 2), Cell::new(2, 2)]
        );
        assert_eq!(
            found.trace,
            vec![Cell::new(1, 2), Cell::new(2, 1), Cell::new(2, 2)]
        );
    }

    #[test]
    fn walled_off_goal_is_unreachable() {
        let mut maze = Grid::new(2, 2).unwrap();
        maze.open_passage(Cell::new(1, 1), Direction::East);

        let result = Bfs::new(&maze, maze.near_corner()).unwrap().solve();
        assert!(matches!(result, Err(SolveError::Unreachable)));
    }

    #[test]
    fn start_outside_the_grid_is_rejected() {
        let maze = Grid::new(2, 2).unwrap();
        assert!(matches!(
            Bfs::new(&maze, Cell::new(0, 1)),
            Err(SolveError::InvalidStart(_))
        ));
    }
}
