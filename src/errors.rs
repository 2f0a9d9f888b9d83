use thiserror::Error;

use crate::grid::Cell;

/// Failure modes shared by every solver
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("goal is unreachable from the start cell")]
    Unreachable, // Frontier drained before the goal was popped
    #[error("start cell {0} is outside the grid")]
    InvalidStart(Cell),
    #[error("goal cell {0} is outside the grid")]
    InvalidGoal(Cell),
    #[error("stopped after {0} steps without reaching the goal")]
    NoProgress(usize), // Wall follower hit its step cap
}

/// Grid construction failures
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows} x {cols}")]
    InvalidDimensions { rows: i32, cols: i32 },
}
