use crate::engine::{State, BLANK, CELL_COUNT, GRID_SIZE};
use crate::error::{PuzzleError, Result};

/// Parses one row-per-string description of the board into a `State`.
///
/// Each row holds three cells separated by whitespace or commas. Tiles are the
/// digits `1` to `8`; the blank may be written as `0`, `_` or `.`. A row may
/// also be written without separators (`"123"`).
///
/// # Arguments
/// * `rows`: exactly `GRID_SIZE` row strings, top row first.
///
/// # Returns
/// * `Ok(State)` if the rows describe a permutation of 0 to 8.
/// * `Err(PuzzleError::Parse)` if the row count or a row's cell count is wrong,
///   or a cell is not a recognised token.
/// * `Err(PuzzleError::MalformedState)` if a value repeats.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::State;
/// use eight_puzzle_solver::utils::state_from_str_array;
///
/// let state = state_from_str_array(&["1 2 3", "4 5 6", "7 _ 8"]).unwrap();
/// assert_eq!(state.rows(), [[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
///
/// assert!(state_from_str_array(&["1 2 3", "4 5 6"]).is_err());
/// assert!(state_from_str_array(&["1 2 3", "4 5 6", "7 9 8"]).is_err());
/// ```
pub fn state_from_str_array(rows: &[&str]) -> Result<State> {
    if rows.len() != GRID_SIZE {
        return Err(PuzzleError::Parse {
            reason: format!("expected {} rows, found {}", GRID_SIZE, rows.len()),
        });
    }

    let mut grid = [[BLANK; GRID_SIZE]; GRID_SIZE];
    for (r, row_str) in rows.iter().enumerate() {
        let tokens = split_cells(row_str);
        if tokens.len() != GRID_SIZE {
            return Err(PuzzleError::Parse {
                reason: format!(
                    "row {} has {} cells, expected {}",
                    r,
                    tokens.len(),
                    GRID_SIZE
                ),
            });
        }
        for (c, token) in tokens.iter().enumerate() {
            grid[r][c] = parse_cell(token).map_err(|reason| PuzzleError::Parse {
                reason: format!("row {} col {}: {}", r, c, reason),
            })?;
        }
    }
    State::new(grid)
}

/// Parses a whole board from free-form text.
///
/// Accepts either three non-empty lines (see `state_from_str_array`) or all
/// nine cells on one line, e.g. `"1,2,3,4,5,6,7,0,8"` or `"12345678_"`.
pub fn parse_state(text: &str) -> Result<State> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    match lines.as_slice() {
        [single] => {
            let tokens = split_cells(single);
            if tokens.len() != CELL_COUNT {
                return Err(PuzzleError::Parse {
                    reason: format!("expected {} cells, found {}", CELL_COUNT, tokens.len()),
                });
            }
            let mut cells = [BLANK; CELL_COUNT];
            for (idx, token) in tokens.iter().enumerate() {
                cells[idx] = parse_cell(token).map_err(|reason| PuzzleError::Parse {
                    reason: format!("cell {}: {}", idx, reason),
                })?;
            }
            State::from_cells(cells)
        }
        _ => state_from_str_array(&lines),
    }
}

// Splits on whitespace/commas; a lone run of single-char cells is split per char.
fn split_cells(s: &str) -> Vec<String> {
    let tokens: Vec<String> = s
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    if tokens.len() == 1 && tokens[0].chars().count() > 1 {
        tokens[0].chars().map(String::from).collect()
    } else {
        tokens
    }
}

fn parse_cell(token: &str) -> std::result::Result<u8, String> {
    match token {
        "_" | "." => Ok(BLANK),
        _ => token
            .parse::<u8>()
            .map_err(|_| format!("unrecognized cell '{}'", token)),
    }
}
