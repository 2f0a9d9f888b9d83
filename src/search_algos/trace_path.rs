use super::ParentMap;
use crate::errors::SolveError;
use crate::grid::Cell;

/// Construct the path from the start cell to the goal cell
/// Returns the ordered path as a vector of cells from start to goal
/// parents: ParentMap - map of cells with the index of their parent
/// goal_index: usize - index of the goal cell in the map
pub(crate) fn trace_path(parents: &ParentMap, goal_index: usize) -> Result<Vec<Cell>, SolveError> {
    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Walk back from goal to start
    while current_index != usize::MAX {
        if let Some((&cell, &parent_index)) = parents.get_index(current_index) {
            path.push(cell);
            current_index = parent_index;
        } else {
            return Err(SolveError::Unreachable);
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    if path.is_empty() {
        return Err(SolveError::Unreachable);
    }

    Ok(path)
}
