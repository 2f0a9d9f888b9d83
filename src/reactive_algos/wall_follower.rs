use crate::errors::SolveError;
use crate::grid::{Cell, Direction, Grid};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use log::{debug, warn};


/// Default step allowance per grid cell
/// Generous enough for a full left hand tour of every passage
const STEPS_PER_CELL: usize = 16;

/// Headings laid out counter clockwise, starting from the initial forward
const COMPASS_RING: [Direction; 4] = [
    Direction::North,
    Direction::West,
    Direction::South,
    Direction::East,
];

/// Rotating compass of the four logical roles forward, left, back, right
/// The headings never move; turning only shifts the ring offset
#[derive(Clone, Copy, Debug)]
struct Compass {
    offset: usize,
}

impl Compass {
    fn forward(self) -> Direction {
        COMPASS_RING[self.offset % 4]
    }

    fn left(self) -> Direction {
        COMPASS_RING[(self.offset + 1) % 4]
    }

    /// Counter clockwise: the old left heading becomes forward
    fn turn_left(&mut self) {
        self.offset = (self.offset + 1) % 4;
    }

    /// Clockwise: the old right heading becomes forward
    fn turn_right(&mut self) {
        self.offset = (self.offset + 3) % 4;
    }
}


/// Moves of a finished wall follower run
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FollowResult {
    /// Direction letters with every dead end detour cancelled out
    pub path: String,
    /// Raw direction letters of every move taken, detours included
    pub trace: String,
}


/// Left hand wall follower
/// https://en.wikipedia.org/wiki/Maze-solving_algorithm#Wall_follower
///
/// Models an agent with no map, only local wall sensing: keep a hand on
/// the left wall and walk until the goal appears. Works on any maze whose
/// outer boundary is walled and whose goal sits on a connected wall; the
/// step cap turns the remaining degenerate layouts into an error instead
/// of a hang.
pub struct WallFollower<'a> {
    maze: &'a Grid,
    start: Cell,
    goal: Cell,
    compass: Compass,
    step_limit: usize,
}

impl<'a> WallFollower<'a> {

    /// Set up a follower from `start` to the far corner of `maze`
    /// Both endpoints must lie inside the grid
    pub fn new(maze: &'a Grid, start: Cell) -> Result<Self, SolveError> {
        let goal = maze.far_corner();
        if !maze.contains(start) {
            return Err(SolveError::InvalidStart(start));
        }
        if !maze.contains(goal) {
            return Err(SolveError::InvalidGoal(goal));
        }
        Ok(Self {
            maze,
            start,
            goal,
            compass: Compass { offset: 0 },
            step_limit: maze.cell_count() * STEPS_PER_CELL,
        })
    }

    /// Replace the default step cap
    pub fn set_step_limit(&mut self, limit: usize) {
        self.step_limit = limit;
    }

    /// Walk until the goal is reached or the step cap runs out
    /// In-place turns count against the cap too, so a sealed start cell
    /// cannot spin forever
    pub fn solve(mut self) -> Result<FollowResult, SolveError> {
        let mut trace = String::new();
        let mut cell = self.start;

        for _ in 0..self.step_limit {
            if cell == self.goal {
                let path = cancel_dead_ends(&trace);
                debug!(
                    "wall_follower took {} moves, {} after cancellation",
                    trace.len(),
                    path.len()
                );
                return Ok(FollowResult { path, trace });
            }

            if self.maze.passage(cell, self.compass.left()) {
                // Opening on the left: turn into it and step through
                self.compass.turn_left();
                cell = cell.step(self.compass.forward());
                trace.push(self.compass.forward().as_char());
            } else if self.maze.passage(cell, self.compass.forward()) {
                cell = cell.step(self.compass.forward());
                trace.push(self.compass.forward().as_char());
            } else {
                // Walls on the left and ahead: spin right in place
                self.compass.turn_right();
            }
        }

        warn!("wall_follower gave up after {} steps", self.step_limit);
        Err(SolveError::NoProgress(self.step_limit))
    }
}

/// Strip immediately adjacent opposite moves until none remain
/// "EW", "WE", "NS" and "SN" pairs cancel, which erases every dead end
/// detour from a raw move string; characters that are no direction
/// letter are dropped
pub fn cancel_dead_ends(moves: &str) -> String {
    let mut reduced: Vec<Direction> = Vec::new();
    for step in moves.chars().filter_map(Direction::from_char) {
        if reduced.last() == Some(&step.opposite()) {
            reduced.pop();
        } else {
            reduced.push(step);
        }
    }
    reduced.into_iter().map(Direction::as_char).collect()
}
