use crate::collections::FxIndexMap;
use crate::errors::SolveError;
use crate::grid::{Cell, Direction, Grid, manhattan_distance};
use super::{ParentMap, trace_path};

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;


/// Cost assigned to cells the search has not reached yet
const INFINITY: i32 = i32::MAX;

/// Neighbor iteration order used during relaxation
/// Deliberately different from the queue and stack searches; it shows in
/// which of several equal cost frontier entries gets pushed first
pub const RELAXATION_ORDER: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];


/// Frontier entry on the open list
#[derive(Debug)]
struct OpenCell {
    f_cost: i32,
    h_cost: i32,
    cell: Cell,
    index: usize, // index of the cell in the parent map
}

impl Ord for OpenCell {
    /// Reversed so the BinaryHeap pops the smallest entry first
    /// Ties on f_cost fall back to h_cost, then to cell order
    fn cmp(&self, other: &Self) -> Ordering {
        (other.f_cost, other.h_cost, other.cell).cmp(&(self.f_cost, self.h_cost, self.cell))
    }
}
impl PartialOrd for OpenCell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for OpenCell {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for OpenCell {}


/// A* search over a maze grid
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// Edge weight is uniformly 1 and the Manhattan heuristic never
/// overestimates on a 4-connected grid, so the returned path is shortest
/// in hop count.
pub struct AStar<'a> {
    maze: &'a Grid,
    start: Cell,
    goal: Cell,
    g_cost: FxIndexMap<Cell, i32>,
    f_cost: FxIndexMap<Cell, i32>,
}

impl<'a> AStar<'a> {

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

        // Every cell starts out unreached
        let mut g_cost: FxIndexMap<Cell, i32> = FxIndexMap::default();
        let mut f_cost: FxIndexMap<Cell, i32> = FxIndexMap::default();
        for cell in maze.cells() {
            g_cost.insert(cell, INFINITY);
            f_cost.insert(cell, INFINITY);
        }
        g_cost.insert(start, 0);
        f_cost.insert(start, heuristic(start, goal));

        Ok(Self {
            maze,
            start,
            goal,
            g_cost,
            f_cost,
        })
    }

    /// Run the search to completion
    /// Returns the cells from start to goal inclusive
    pub fn solve(mut self) -> Result<Vec<Cell>, SolveError> {
        let mut frontier: BinaryHeap<OpenCell> = BinaryHeap::new();
        let mut parents = ParentMap::default();

        let start_index = parents.insert_full(self.start, usize::MAX).0;
        frontier.push(OpenCell {
            f_cost: self.f_cost[&self.start],
            h_cost: heuristic(self.start, self.goal),
            cell: self.start,
            index: start_index,
        });

        while let Some(OpenCell { cell, index, .. }) = frontier.pop() {

            // Goal is done once popped, not when first enqueued
            if cell == self.goal {
                let path = trace_path(&parents, index)?;
                debug!(
                    "a_star reached {} through {} relaxed cells",
                    self.goal,
                    parents.len()
                );
                return Ok(path);
            }

            for direction in RELAXATION_ORDER {
                if !self.maze.passage(cell, direction) {
                    continue;
                }
                let neighbor = cell.step(direction);

                let tentative_g = self.g_cost[&cell] + 1;
                let h_cost = heuristic(neighbor, self.goal);
                let tentative_f = tentative_g + h_cost;

                // The improvement test is on f_cost, not g_cost
                if tentative_f < self.f_cost[&neighbor] {
                    self.g_cost.insert(neighbor, tentative_g);
                    self.f_cost.insert(neighbor, tentative_f);

                    // Re-inserting keeps the neighbor's index stable
                    let neighbor_index = parents.insert_full(neighbor, index).0;
                    frontier.push(OpenCell {
                        f_cost: tentative_f,
                        h_cost,
                        cell: neighbor,
                        index: neighbor_index,
                    });
                }
            }
        }

        Err(SolveError::Unreachable)
    }
}

/// Manhattan estimate of the cost left to the goal
fn heuristic(cell: Cell, goal: Cell) -> i32 {
    manhattan_distance(cell.row, cell.col, goal.row, goal.col)
}
