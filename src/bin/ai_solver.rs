use clap::{Parser, ValueEnum};
use eight_puzzle_solver::engine::State;
use eight_puzzle_solver::error::PuzzleError;
use eight_puzzle_solver::solver::{SolverConfig, Strategy, DEFAULT_DEPTH_LIMIT};
use eight_puzzle_solver::utils::parse_state;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    Bfs,
    Dfs,
    Astar,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Board as nine cells on one line, e.g. "1,2,3,4,5,6,7,0,8" (0 or _ is the blank)
    board: Option<String>,

    /// Path to a board file (three rows of three cells)
    #[clap(short, long, conflicts_with = "board")]
    file: Option<PathBuf>,

    /// Search strategy
    #[clap(short, long, value_enum, default_value = "astar")]
    strategy: StrategyArg,

    /// Depth limit for the depth-limited DFS
    #[clap(short, long, default_value_t = DEFAULT_DEPTH_LIMIT)]
    depth: u32,

    /// Goal board, same format as BOARD (defaults to 1..8 with the blank last)
    #[clap(short, long)]
    goal: Option<String>,

    /// Print the result as JSON instead of text
    #[clap(long)]
    json: bool,
}

fn read_initial(args: &Args) -> Result<State, String> {
    let text = match (&args.board, &args.file) {
        (Some(board), _) => board.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?,
        (None, None) => return Err("Provide a BOARD argument or --file".to_string()),
    };
    parse_state(&text).map_err(|e: PuzzleError| format!("Invalid board: {}", e))
}

fn build_config(args: &Args) -> Result<SolverConfig, String> {
    let strategy = match args.strategy {
        StrategyArg::Bfs => Strategy::Bfs,
        StrategyArg::Dfs => Strategy::BoundedDfs {
            depth_limit: args.depth,
        },
        StrategyArg::Astar => Strategy::AStar,
    };
    let goal = match &args.goal {
        Some(text) => parse_state(text).map_err(|e| format!("Invalid goal: {}", e))?,
        None => State::goal(),
    };
    Ok(SolverConfig { strategy, goal })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let (initial, config) = match read_initial(&args).and_then(|s| Ok((s, build_config(&args)?))) {
        Ok(pair) => pair,
        Err(e) => {
            log::error!("{}", e);
            process::exit(1);
        }
    };

    if !initial.is_solvable_to(&config.goal) {
        log::warn!("Inversion parity differs from the goal: this board has no solution");
    }

    if !args.json {
        println!("Initial state:\n{}", initial);
        println!("Searching with {}...\n", config.strategy);
    }

    let result = config.solve(&initial);

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                log::error!("Cannot serialize result: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    if result.success {
        println!("Solution found ({} moves):", result.path_length);
        if result.path.is_empty() {
            println!("  Already solved.");
        }
        for (i, (action, state)) in result.path.iter().enumerate() {
            println!("  Move {}: {}\n{}", i + 1, action, state);
        }
    } else {
        println!("No solution found.");
    }
    println!("Nodes expanded: {}", result.nodes_expanded);
    println!("Execution time: {:.6} s", result.execution_secs());
}
