use clap::Parser;
use eight_puzzle_solver::engine::State;
use eight_puzzle_solver::metrics::{
    comparison_report, generate_test_cases, recommend, run_benchmark, summarize, StrategySummary,
};
use eight_puzzle_solver::solver::{SolveResult, Strategy, DEFAULT_DEPTH_LIMIT};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compare BFS, depth-limited DFS and A* on scrambled boards", long_about = None)]
struct Args {
    /// Number of scrambled boards to evaluate
    #[clap(short = 'n', long, default_value_t = 5)]
    cases: usize,

    /// Minimum number of random moves applied to the goal
    #[clap(long, default_value_t = 5)]
    min_difficulty: usize,

    /// Maximum number of random moves applied to the goal
    #[clap(long, default_value_t = 25)]
    max_difficulty: usize,

    /// Seed for board generation
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Depth limit for the depth-limited DFS
    #[clap(short, long, default_value_t = DEFAULT_DEPTH_LIMIT)]
    depth: u32,

    /// Write the text report to this file as well as stdout
    #[clap(long)]
    report: Option<PathBuf>,

    /// Write per-strategy summaries as JSON to this file
    #[clap(long)]
    json: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.min_difficulty > args.max_difficulty {
        log::error!(
            "--min-difficulty ({}) must not exceed --max-difficulty ({})",
            args.min_difficulty,
            args.max_difficulty
        );
        process::exit(1);
    }

    let goal = State::goal();
    let strategies = [
        Strategy::Bfs,
        Strategy::BoundedDfs {
            depth_limit: args.depth,
        },
        Strategy::AStar,
    ];

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let states = generate_test_cases(
        args.cases,
        args.min_difficulty,
        args.max_difficulty,
        &goal,
        &mut rng,
    );

    log::info!(
        "Starting benchmark over {} boards (seed {})",
        states.len(),
        args.seed
    );
    let results = run_benchmark(&states, &strategies, &goal);

    for (idx, state) in states.iter().enumerate() {
        let runs: Vec<(Strategy, SolveResult)> = results
            .iter()
            .map(|entry| (entry.strategy, entry.results[idx].clone()))
            .collect();
        println!("Board {}:\n{}", idx + 1, state);
        for (strategy, result) in &runs {
            println!(
                "  {:<24} success: {:<5} length: {:<3} nodes: {:<8} time: {:.6}s",
                strategy.to_string(),
                result.success,
                result.path_length,
                result.nodes_expanded,
                result.execution_secs()
            );
        }
        match recommend(&runs) {
            Some(best) => println!("  Recommended: {}\n", best),
            None => println!("  No strategy found a solution.\n"),
        }
    }

    let summaries: Vec<StrategySummary> = results.iter().map(summarize).collect();
    let report = comparison_report(&summaries);
    println!("{}", report);

    if let Some(path) = &args.report {
        match fs::write(path, &report) {
            Ok(()) => log::info!("Saved report: {}", path.display()),
            Err(e) => log::error!("Failed to write report {}: {}", path.display(), e),
        }
    }

    if let Some(path) = &args.json {
        let written = serde_json::to_string_pretty(&summaries)
            .map_err(|e| e.to_string())
            .and_then(|json| fs::write(path, json).map_err(|e| e.to_string()));
        match written {
            Ok(()) => log::info!("Saved summaries: {}", path.display()),
            Err(e) => log::error!("Failed to write summaries {}: {}", path.display(), e),
        }
    }
}
