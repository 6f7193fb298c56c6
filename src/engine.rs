//! Core puzzle model for the 3x3 sliding-tile puzzle.
//!
//! This module defines the fundamental components shared by the solver and the
//! interactive driver:
//! - `Action`: a direction the blank moves in.
//! - `State`: an immutable arrangement of the eight tiles and the blank, with
//!   action enumeration/application, goal testing and solvability checks.
//! - `Game`: a manual-play session built on top of `State`, with a move counter
//!   and an undo history.
use crate::error::{PuzzleError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width and height of the board.
pub const GRID_SIZE: usize = 3;

/// Number of cells on the board, blank included.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Value used for the blank cell.
pub const BLANK: u8 = 0;

/// A direction the blank moves in.
///
/// Moving the blank `Up` is the same as sliding the tile above it down into the
/// empty cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// All actions in the fixed expansion order used by every search strategy.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Row and column delta applied to the blank.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Action::Up => (-1, 0),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
            Action::Right => (0, 1),
        }
    }

    /// The action that undoes this one.
    ///
    /// ```
    /// use eight_puzzle_solver::engine::Action;
    /// assert_eq!(Action::Up.opposite(), Action::Down);
    /// assert_eq!(Action::Right.opposite(), Action::Left);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Action::Up => Action::Down,
            Action::Down => Action::Up,
            Action::Left => Action::Right,
            Action::Right => Action::Left,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Up => "Up",
            Action::Down => "Down",
            Action::Left => "Left",
            Action::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// One arrangement of the 3x3 board.
///
/// Cells are stored row-major; `0` is the blank. The blank index is cached and
/// always points at the cell holding `0`, so the derived equality and hash are
/// equivalent to comparing the nine cell values.
///
/// A `State` is plain value data: it is `Copy`, and every transition produces
/// a new `State` instead of mutating the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[[u8; 3]; 3]", into = "[[u8; 3]; 3]")]
pub struct State {
    cells: [u8; CELL_COUNT],
    blank: usize,
}

impl State {
    /// Builds a state from a literal grid.
    ///
    /// # Errors
    /// Returns `PuzzleError::MalformedState` unless the grid holds each of the
    /// values 0 through 8 exactly once.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::State;
    /// let state = State::new([[1, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap();
    /// assert_eq!(state.blank_position(), (2, 1));
    ///
    /// assert!(State::new([[1, 1, 3], [4, 5, 6], [7, 0, 8]]).is_err());
    /// ```
    pub fn new(grid: [[u8; GRID_SIZE]; GRID_SIZE]) -> Result<Self> {
        let mut cells = [0u8; CELL_COUNT];
        for (r, row) in grid.iter().enumerate() {
            cells[r * GRID_SIZE..(r + 1) * GRID_SIZE].copy_from_slice(row);
        }
        Self::from_cells(cells)
    }

    /// Builds a state from nine row-major cell values.
    ///
    /// # Errors
    /// Returns `PuzzleError::MalformedState` if a value is out of range or
    /// appears more than once.
    pub fn from_cells(cells: [u8; CELL_COUNT]) -> Result<Self> {
        let mut seen = [false; CELL_COUNT];
        for (idx, &value) in cells.iter().enumerate() {
            let slot = seen.get_mut(value as usize).ok_or_else(|| PuzzleError::MalformedState {
                reason: format!("value {} at cell {} is outside 0..={}", value, idx, CELL_COUNT - 1),
            })?;
            if *slot {
                return Err(PuzzleError::MalformedState {
                    reason: format!("value {} appears more than once", value),
                });
            }
            *slot = true;
        }
        // Nine distinct values in 0..=8 always include the blank.
        let blank = cells.iter().position(|&v| v == BLANK).unwrap_or_default();
        Ok(State { cells, blank })
    }

    /// The canonical goal: tiles 1 to 8 in ascending order with the blank last.
    pub fn goal() -> Self {
        State {
            cells: [1, 2, 3, 4, 5, 6, 7, 8, BLANK],
            blank: CELL_COUNT - 1,
        }
    }

    /// Row-major cell values.
    pub fn cells(&self) -> &[u8; CELL_COUNT] {
        &self.cells
    }

    /// The board as a 3x3 grid.
    pub fn rows(&self) -> [[u8; GRID_SIZE]; GRID_SIZE] {
        let mut grid = [[0u8; GRID_SIZE]; GRID_SIZE];
        for (idx, &value) in self.cells.iter().enumerate() {
            grid[idx / GRID_SIZE][idx % GRID_SIZE] = value;
        }
        grid
    }

    /// Value at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is not below `GRID_SIZE`.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(row < GRID_SIZE && col < GRID_SIZE, "cell ({}, {}) is off the board", row, col);
        self.cells[row * GRID_SIZE + col]
    }

    /// `(row, col)` of the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank / GRID_SIZE, self.blank % GRID_SIZE)
    }

    /// `(row, col)` of the cell holding `value`, or `None` if `value > 8`.
    pub fn position_of(&self, value: u8) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|&v| v == value)
            .map(|idx| (idx / GRID_SIZE, idx % GRID_SIZE))
    }

    /// Whether the blank can move in the given direction.
    pub fn can_apply(&self, action: Action) -> bool {
        let (row, col) = self.blank_position();
        match action {
            Action::Up => row > 0,
            Action::Down => row < GRID_SIZE - 1,
            Action::Left => col > 0,
            Action::Right => col < GRID_SIZE - 1,
        }
    }

    /// Legal actions from this state, in the order Up, Down, Left, Right.
    ///
    /// ```
    /// use eight_puzzle_solver::engine::{Action, State};
    /// // Blank in the bottom-right corner.
    /// assert_eq!(State::goal().possible_actions(), vec![Action::Up, Action::Left]);
    /// ```
    pub fn possible_actions(&self) -> Vec<Action> {
        Action::ALL
            .iter()
            .copied()
            .filter(|&action| self.can_apply(action))
            .collect()
    }

    /// Returns the state reached by moving the blank in `action`'s direction.
    ///
    /// # Errors
    /// Returns `PuzzleError::IllegalAction` when the blank sits on the boundary
    /// in that direction. Check `possible_actions` first to avoid it.
    pub fn apply(&self, action: Action) -> Result<State> {
        if !self.can_apply(action) {
            let (blank_row, blank_col) = self.blank_position();
            return Err(PuzzleError::IllegalAction {
                action,
                blank_row,
                blank_col,
            });
        }
        Ok(self.slide(action))
    }

    /// Moves the blank without checking the boundary.
    ///
    /// Callers must have filtered `action` through `can_apply`.
    pub(crate) fn slide(&self, action: Action) -> State {
        let (row, col) = self.blank_position();
        let (dr, dc) = action.offset();
        let target_row = (row as isize + dr) as usize;
        let target_col = (col as isize + dc) as usize;
        let target = target_row * GRID_SIZE + target_col;

        let mut cells = self.cells;
        cells.swap(self.blank, target);
        State { cells, blank: target }
    }

    /// Goal test against a caller-supplied goal.
    pub fn is_goal(&self, goal: &State) -> bool {
        self == goal
    }

    /// Number of tile pairs that appear out of order in the row-major reading,
    /// ignoring the blank.
    ///
    /// ```
    /// use eight_puzzle_solver::engine::State;
    /// assert_eq!(State::goal().inversion_count(), 0);
    /// let swapped = State::new([[2, 1, 3], [4, 5, 6], [7, 8, 0]]).unwrap();
    /// assert_eq!(swapped.inversion_count(), 1);
    /// ```
    pub fn inversion_count(&self) -> usize {
        let tiles: Vec<u8> = self.cells.iter().copied().filter(|&v| v != BLANK).collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, &value)| tiles[i + 1..].iter().filter(|&&next| next < value).count())
            .sum()
    }

    /// Whether `goal` is reachable from this state.
    ///
    /// On an odd-width board every move preserves inversion parity, so two
    /// states are connected exactly when their parities agree. The solvers do
    /// not call this; an unreachable goal simply exhausts their frontier.
    pub fn is_solvable_to(&self, goal: &State) -> bool {
        self.inversion_count() % 2 == goal.inversion_count() % 2
    }

    /// Performs `moves` random legal moves starting from this state.
    ///
    /// The result is always reachable from (and back to) `self`. Moves may undo
    /// each other, so the true distance can be lower than `moves`.
    pub fn scrambled<R: Rng + ?Sized>(&self, moves: usize, rng: &mut R) -> State {
        let mut current = *self;
        for _ in 0..moves {
            let actions = current.possible_actions();
            if let Some(&action) = actions.choose(rng) {
                current = current.slide(action);
            }
        }
        current
    }
}

impl Default for State {
    fn default() -> Self {
        State::goal()
    }
}

impl TryFrom<[[u8; GRID_SIZE]; GRID_SIZE]> for State {
    type Error = PuzzleError;

    fn try_from(grid: [[u8; GRID_SIZE]; GRID_SIZE]) -> Result<Self> {
        State::new(grid)
    }
}

impl From<State> for [[u8; GRID_SIZE]; GRID_SIZE] {
    fn from(state: State) -> Self {
        state.rows()
    }
}

impl fmt::Display for State {
    /// Renders one row per line, the blank as `_`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|&v| if v == BLANK { "_".to_string() } else { v.to_string() })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// A manual-play session.
///
/// Wraps the current `State` with the goal being played towards, a counter of
/// moves made and a history of previous states for undo.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::{Action, Game, State};
/// let start = State::new([[1, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap();
/// let mut game = Game::new_with_state(start);
///
/// assert!(!game.slide(Action::Down)); // blank already on the bottom row
/// assert!(game.slide(Action::Right));
/// assert!(game.is_solved());
/// assert_eq!(game.moves(), 1);
///
/// assert!(game.undo_last_move());
/// assert_eq!(game.state(), &start);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    state: State,
    goal: State,
    moves: u32,
    history: Vec<State>,
}

impl Game {
    /// Starts at the canonical goal.
    pub fn new() -> Self {
        Self::new_with_state(State::goal())
    }

    /// Starts at `initial`, playing towards the canonical goal.
    pub fn new_with_state(initial: State) -> Self {
        Game {
            state: initial,
            goal: State::goal(),
            moves: 0,
            history: Vec::new(),
        }
    }

    /// Replaces the goal being played towards.
    pub fn with_goal(mut self, goal: State) -> Self {
        self.goal = goal;
        self
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn goal(&self) -> &State {
        &self.goal
    }

    /// Moves made since the session started or was last reset.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_solved(&self) -> bool {
        self.state.is_goal(&self.goal)
    }

    /// Moves the blank in `action`'s direction.
    ///
    /// Returns `false` and leaves the session untouched if the move is illegal.
    pub fn slide(&mut self, action: Action) -> bool {
        match self.state.apply(action) {
            Ok(next) => {
                self.history.push(self.state);
                self.state = next;
                self.moves += 1;
                true
            }
            Err(_) => false,
        }
    }

    /// Slides the tile at `(row, col)` into the blank.
    ///
    /// Returns `false` if the coordinates are off the board or the tile is not
    /// orthogonally adjacent to the blank.
    pub fn move_tile(&mut self, row: usize, col: usize) -> bool {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return false;
        }
        let (blank_row, blank_col) = self.state.blank_position();
        let action = match (row as isize - blank_row as isize, col as isize - blank_col as isize) {
            (-1, 0) => Action::Up,
            (1, 0) => Action::Down,
            (0, -1) => Action::Left,
            (0, 1) => Action::Right,
            _ => return false,
        };
        self.slide(action)
    }

    /// Reverts the most recent move. Returns `false` when there is nothing to undo.
    pub fn undo_last_move(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.state = previous;
                self.moves -= 1;
                true
            }
            None => false,
        }
    }

    /// Replaces the board, clearing the move counter and history.
    pub fn set_state(&mut self, state: State) {
        self.state = state;
        self.moves = 0;
        self.history.clear();
    }

    /// Returns to the goal arrangement.
    pub fn reset(&mut self) {
        self.set_state(self.goal);
    }

    /// Scrambles the board with `moves` random legal moves from the goal.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, moves: usize, rng: &mut R) {
        let scrambled = self.goal.scrambled(moves, rng);
        self.set_state(scrambled);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
