//! Maze solving strategies over a shared grid abstraction.
//!
//! A [`Grid`] stores one passage record per cell. [`AStar`], [`Bfs`] and
//! [`Dfs`] search it globally and reconstruct their route from a
//! predecessor map; [`WallFollower`] walks it with the left hand rule
//! using nothing but local passage queries. The searches report the order
//! cells were explored in alongside the path, the wall follower reports
//! its moves as direction strings.
//!
//! ```
//! use mazeway::{Bfs, Cell, Direction, Grid};
//!
//! let mut maze = Grid::new(2, 2)?;
//! maze.open_passage(Cell::new(1, 1), Direction::East);
//! maze.open_passage(Cell::new(1, 2), Direction::South);
//!
//! let found = Bfs::new(&maze, maze.near_corner())?.solve()?;
//! assert_eq!(found.path.last(), Some(&maze.far_corner()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod errors;
pub mod grid;
pub mod reactive_algos;
pub mod search_algos;

mod collections;

pub use grid::{Cell, Direction, Grid};
pub use reactive_algos::wall_follower::{FollowResult, WallFollower};
pub use search_algos::SearchResult;
pub use search_algos::a_star::AStar;
pub use search_algos::bfs::Bfs;
pub use search_algos::dfs::Dfs;
