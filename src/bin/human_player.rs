use eight_puzzle_solver::engine::{Action, Game, GRID_SIZE};
use eight_puzzle_solver::solver::solve_astar;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::{self, Write};

const SHUFFLE_MOVES: usize = 100;

fn parse_action(input: &str) -> Option<Action> {
    match input {
        "w" | "up" => Some(Action::Up),
        "s" | "down" => Some(Action::Down),
        "a" | "left" => Some(Action::Left),
        "d" | "right" => Some(Action::Right),
        _ => None,
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut rng = SmallRng::from_entropy();
    let mut game = Game::new();
    game.shuffle(SHUFFLE_MOVES, &mut rng);
    println!("Welcome to the 8-puzzle!");

    loop {
        println!("---------------------");
        println!("Moves: {}", game.moves());
        println!("{}", game.state());

        if game.is_solved() {
            println!("Solved in {} moves!", game.moves());
            break;
        }

        print!("Move the blank (w/a/s/d), 'row col' to slide a tile, 'h' for a hint, 'u' to undo, 'r' to reshuffle, 'q' to quit: ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => {
                println!("Error reading input. Please try again.");
                continue;
            }
        }
        let trimmed_input = input.trim().to_ascii_lowercase();

        match trimmed_input.as_str() {
            "q" => {
                println!("Thanks for playing!");
                break;
            }
            "u" => {
                if game.undo_last_move() {
                    println!("Move undone.");
                } else {
                    println!("Nothing to undo.");
                }
                continue;
            }
            "r" => {
                game.shuffle(SHUFFLE_MOVES, &mut rng);
                println!("Board reshuffled.");
                continue;
            }
            "h" => {
                let result = solve_astar(game.state(), game.goal());
                match result.path.first() {
                    Some((action, _)) => println!(
                        "Hint: move the blank {} ({} moves left at best).",
                        action, result.path_length
                    ),
                    None => println!("No hint available."),
                }
                continue;
            }
            _ => {}
        }

        if let Some(action) = parse_action(&trimmed_input) {
            if !game.slide(action) {
                println!("Invalid move: the blank cannot move {}.", action);
            }
            continue;
        }

        let parts: Vec<&str> = trimmed_input.split_whitespace().collect();
        if let [r, c] = parts.as_slice() {
            if let (Ok(r), Ok(c)) = (r.parse::<usize>(), c.parse::<usize>()) {
                if r >= GRID_SIZE || c >= GRID_SIZE {
                    println!(
                        "Invalid coordinates: row and column must be between 0 and {}.",
                        GRID_SIZE - 1
                    );
                } else if !game.move_tile(r, c) {
                    println!("Invalid move: the tile at ({}, {}) is not next to the blank.", r, c);
                }
                continue;
            }
        }
        println!("Invalid input. Use w/a/s/d, 'row col', 'h', 'u', 'r' or 'q'.");
    }
}
