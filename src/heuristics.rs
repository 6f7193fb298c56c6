//! Distance estimates from a `State` to a goal `State`.
//!
//! Both estimators ignore the blank and are admissible: each move shifts a
//! single tile by one cell, so neither can exceed the true number of moves left.
//! `manhattan` is also consistent, which A* relies on to close states on their
//! first generation.
use crate::engine::{State, BLANK, CELL_COUNT, GRID_SIZE};

/// Goal coordinates of every tile value, precomputed once per search.
#[derive(Clone, Copy, Debug)]
pub struct GoalPositions {
    positions: [(usize, usize); CELL_COUNT],
}

impl GoalPositions {
    pub fn new(goal: &State) -> Self {
        let mut positions = [(0, 0); CELL_COUNT];
        for (idx, &value) in goal.cells().iter().enumerate() {
            positions[value as usize] = (idx / GRID_SIZE, idx % GRID_SIZE);
        }
        GoalPositions { positions }
    }

    /// Goal `(row, col)` of `value`.
    pub fn of(&self, value: u8) -> (usize, usize) {
        self.positions[value as usize]
    }

    /// Manhattan distance of `state` against these goal positions.
    pub fn manhattan(&self, state: &State) -> u32 {
        state
            .cells()
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != BLANK)
            .map(|(idx, &value)| {
                let (goal_row, goal_col) = self.of(value);
                let row = idx / GRID_SIZE;
                let col = idx % GRID_SIZE;
                (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32
            })
            .sum()
    }
}

/// Sum over all non-blank tiles of the row and column distance between the
/// tile's cell in `state` and its cell in `goal`.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::State;
/// use eight_puzzle_solver::heuristics::manhattan;
///
/// let goal = State::goal();
/// assert_eq!(manhattan(&goal, &goal), 0);
///
/// let state = State::new([[1, 2, 3], [4, 5, 6], [0, 7, 8]]).unwrap();
/// assert_eq!(manhattan(&state, &goal), 2);
/// ```
pub fn manhattan(state: &State, goal: &State) -> u32 {
    GoalPositions::new(goal).manhattan(state)
}

/// Number of non-blank tiles not on their goal cell.
pub fn misplaced_tiles(state: &State, goal: &State) -> u32 {
    state
        .cells()
        .iter()
        .zip(goal.cells().iter())
        .filter(|&(&value, &target)| value != BLANK && value != target)
        .count() as u32
}
