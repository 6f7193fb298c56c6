//! # 8-Puzzle Solver Library
//!
//! This library models the 3x3 sliding-tile puzzle (eight numbered tiles and
//! one blank) and solves it with three interchangeable search strategies:
//! breadth-first search, depth-limited depth-first search and A* with the
//! Manhattan-distance heuristic.
//!
//! It is used by three binaries:
//! - `ai_solver`: solves one board with a chosen strategy and prints the path
//!   and metrics (or JSON).
//! - `benchmark`: runs every strategy over scrambled boards and prints a
//!   comparison report.
//! - `human_player`: interactive manual play on the terminal.
//!
//! ## Modules
//! - `engine`: the board representation (`State`), moves (`Action`),
//!   solvability and scrambling, and the manual-play session (`Game`).
//! - `heuristics`: admissible distance estimates used by A*.
//! - `solver`: the search tree, the frontier disciplines and the `solve_*`
//!   entry points returning a `SolveResult`.
//! - `metrics`: batch benchmarking, summaries and the comparison report.
//! - `utils`: parsing boards from text.
//! - `error`: the crate's `PuzzleError`.

pub mod engine;
pub mod error;
pub mod heuristics;
pub mod metrics;
pub mod solver;
pub mod utils;

pub use crate::engine::{Action, State};
pub use crate::error::PuzzleError;
pub use crate::solver::{solve_astar, solve_bfs, solve_dfs_limited, SolveResult, Strategy};
