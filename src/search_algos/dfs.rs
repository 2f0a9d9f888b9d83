use crate::errors::SolveError;
use crate::grid::{Cell, Grid};
use super::{EXPANSION_ORDER, ParentMap, SearchResult, trace_path};

use log::debug;


/// Depth first search over a maze grid
/// https://en.wikipedia.org/wiki/Depth-first_search
///
/// Dives along the most recently discovered branch first. The returned
/// path reaches the goal but is not necessarily shortest; that is the
/// contract, not a defect.
pub struct Dfs<'a> {
    maze: &'a Grid,
    start: Cell,
    goal: Cell,
}

impl<'a> Dfs<'a> {

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
    /// The trace lists cells in pop order, start first and goal last
    pub fn solve(self) -> Result<SearchResult, SolveError> {
        let mut frontier: Vec<(usize, Cell)> = Vec::new();
        let mut parents = ParentMap::default();
        let mut trace = Vec::new();

        let start_index = parents.insert_full(self.start, usize::MAX).0;
        frontier.push((start_index, self.start));

        while let Some((index, cell)) = frontier.pop() {
            trace.push(cell);

            if cell == self.goal {
                let path = trace_path(&parents, index)?;
                debug!("dfs visited {} cells, path has {} hops", parents.len(), path.len() - 1);
                return Ok(SearchResult { path, trace });
            }

            for direction in EXPANSION_ORDER {
                if !self.maze.passage(cell, direction) {
                    continue;
                }
                let neighbor = cell.step(direction);

                // The visited check happens at push, so a cell can never
                // enter the stack twice
                if parents.contains_key(&neighbor) {
                    continue;
                }

                let neighbor_index = parents.insert_full(neighbor, index).0;
                frontier.push((neighbor_index, neighbor));
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

    // Two disjoint routes to the far corner: a straight one along the top
    // and a winding one through the bottom rows
    fn forked_maze() -> Grid {
        let mut maze = Grid::new(3, 3).unwrap();
        maze.open_passage(Cell::new(1, 1), Direction::East);
        maze.open_passage(Cell::new(1, 2), Direction::East);
        maze.open_passage(Cell::new(1, 3), Direction::South);
        maze.open_passage(Cell::new(2, 3), Direction::South);
        maze.open_passage(Cell::new(1, 1), Direction::South);
        maze.open_passage(Cell::new(2, 1), Direction::South);
        maze.open_passage(Cell::new(3, 1), Direction::East);
        maze.open_passage(Cell::new(3, 2), Direction::North);
        maze.open_passage(Cell::new(2, 2), Direction::East);
        maze
    }

    #[test]
    fn solves_a_straight_corridor() {
        let maze = corridor(5);
        let found = Dfs::new(&maze, maze.near_corner()).unwrap().solve().unwrap();

        let expected: Vec<Cell> = (1..=5).map(|col| Cell::new(1, col)).collect();
        assert_eq!(found.path, expected);

        // Pop order on a corridor includes the start
        assert_eq!(found.trace, expected);
    }

    #[test]
    fn single_cell_grid_is_already_solved() {
        let maze = Grid::new(1, 1).unwrap();
        let found = Dfs::new(&maze, maze.near_corner()).unwrap().solve().unwrap();
        assert_eq!(found.path, vec![Cell::new(1, 1)]);
        assert_eq!(found.trace, vec![Cell::new(1, 1)]);
    }

    #[test]
    fn open_square_dives_south_first() {
        // East is pushed before South, so South pops first
        let maze = open_grid(2, 2);
        let found = Dfs::new(&maze, maze.near_corner()).unwrap().solve().unwrap();

        assert_eq!(
            found.path,
            vec![Cell::new(1, 1), Cell::new(2, 1), Cell::new(2, 2)]
        );
        assert_eq!(
            found.trace,
            vec![Cell::new(1, 1), Cell::new(2, 1), Cell::new(2, 2)]
        );
    }

    #[test]
    fn takes_the_winding_fork_over_the_short_one() {
        let maze = forked_maze();
        let found = Dfs::new(&maze, maze.near_corner()).unwrap().solve().unwrap();

        // The bottom route costs six hops where four would do
        assert_eq!(
            found.path,
            vec![
                Cell::new(1, 1),
                Cell::new(2, 1),
                Cell::new(3, 1),
                Cell::new(3, 2),
                Cell::new(2, 2),
                Cell::new(2, 3),
                Cell::new(3, 3),
            ]
        );
    }

    #[test]
    fn never_revisits_a_cell() {
        let maze = open_grid(3, 3);
        let found = Dfs::new(&maze, maze.near_corner()).unwrap().solve().unwrap();

        let mut seen = found.trace.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), found.trace.len());
    }

    #[test]
    fn walled_off_goal_is_unreachable() {
        let mut maze = Grid::new(2, 2).unwrap();
        maze.open_passage(Cell::new(1, 1), Direction::East);

        let result = Dfs::new(&maze, maze.near_corner()).unwrap().solve();
        assert!(matches!(result, Err(SolveError::Unreachable)));
    }

    #[test]
    fn start_outside_the_grid_is_rejected() {
        let maze = Grid::new(2, 2).unwrap();
        assert!(matches!(
            Dfs::new(&maze, Cell::new(3, 1)),
            Err(SolveError::InvalidStart(_))
        ));
    }
}
