//! Strategy comparison over batches of boards.
//!
//! The solver itself only produces one `SolveResult` per call; this module
//! generates reproducible test boards, runs every requested strategy on each,
//! and condenses the results into per-strategy averages and a text report.
use crate::engine::State;
use crate::solver::{SolveResult, Strategy};
use log::info;
use rand::Rng;
use serde::Serialize;

/// Weights of path length, time and expanded nodes in `recommend`.
const RECOMMEND_WEIGHTS: (f64, f64, f64) = (0.5, 0.3, 0.2);

/// All results of one strategy over a batch, in board order.
#[derive(Clone, Debug, Serialize)]
pub struct StrategyResults {
    pub strategy: Strategy,
    pub results: Vec<SolveResult>,
}

/// Averages of one strategy over a batch.
///
/// Time, node and length averages only cover successful runs and are zero
/// when nothing succeeded.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StrategySummary {
    pub name: String,
    pub cases: usize,
    pub successes: usize,
    /// Percentage in `0.0..=100.0`.
    pub success_rate: f64,
    pub avg_time_secs: f64,
    pub avg_nodes_expanded: f64,
    pub avg_path_length: f64,
}

/// Scrambles `count` boards, each `min_difficulty..=max_difficulty` random
/// moves away from `goal`.
///
/// # Panics
/// Panics if `min_difficulty > max_difficulty`.
pub fn generate_test_cases<R: Rng + ?Sized>(
    count: usize,
    min_difficulty: usize,
    max_difficulty: usize,
    goal: &State,
    rng: &mut R,
) -> Vec<State> {
    assert!(
        min_difficulty <= max_difficulty,
        "min difficulty {} exceeds max difficulty {}",
        min_difficulty,
        max_difficulty
    );
    (0..count)
        .map(|_| {
            let difficulty = rng.gen_range(min_difficulty..=max_difficulty);
            goal.scrambled(difficulty, rng)
        })
        .collect()
}

/// Runs each strategy on each board.
pub fn run_benchmark(states: &[State], strategies: &[Strategy], goal: &State) -> Vec<StrategyResults> {
    let mut all: Vec<StrategyResults> = strategies
        .iter()
        .map(|&strategy| StrategyResults {
            strategy,
            results: Vec::with_capacity(states.len()),
        })
        .collect();

    for (idx, state) in states.iter().enumerate() {
        info!("Evaluating board {}/{}", idx + 1, states.len());
        for entry in all.iter_mut() {
            entry.results.push(entry.strategy.solve(state, goal));
        }
    }
    all
}

/// Condenses one strategy's results.
pub fn summarize(entry: &StrategyResults) -> StrategySummary {
    let cases = entry.results.len();
    let successful: Vec<&SolveResult> = entry.results.iter().filter(|r| r.success).collect();
    let successes = successful.len();

    let average = |value: fn(&SolveResult) -> f64| -> f64 {
        if successes == 0 {
            0.0
        } else {
            successful.iter().map(|r| value(*r)).sum::<f64>() / successes as f64
        }
    };

    StrategySummary {
        name: entry.strategy.to_string(),
        cases,
        successes,
        success_rate: if cases == 0 {
            0.0
        } else {
            successes as f64 / cases as f64 * 100.0
        },
        avg_time_secs: average(|r: &SolveResult| r.execution_secs()),
        avg_nodes_expanded: average(|r: &SolveResult| r.nodes_expanded as f64),
        avg_path_length: average(|r: &SolveResult| r.path_length as f64),
    }
}

/// Renders a comparison table followed by the fastest, leanest and
/// shortest-path strategies among those with at least one success.
pub fn comparison_report(summaries: &[StrategySummary]) -> String {
    let rule = "-".repeat(72);
    let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();

    let mut out = String::new();
    out.push_str("8-PUZZLE SEARCH STRATEGY COMPARISON\n");
    out.push_str(&format!("{}\n", "=".repeat(72)));
    out.push_str(&format!("Strategies: {}\n", names.join(", ")));
    out.push_str(&format!(
        "Test cases: {}\n\n",
        summaries.first().map_or(0, |s| s.cases)
    ));

    out.push_str(&format!("{}\n", rule));
    out.push_str(&format!(
        "{:<24} | {:>8} | {:>12} | {:>10} | {:>8}\n",
        "Strategy", "Success%", "Time (s)", "Nodes", "Length"
    ));
    out.push_str(&format!("{}\n", rule));
    for s in summaries {
        out.push_str(&format!(
            "{:<24} | {:>8.1} | {:>12.6} | {:>10.1} | {:>8.1}\n",
            s.name, s.success_rate, s.avg_time_secs, s.avg_nodes_expanded, s.avg_path_length
        ));
    }
    out.push_str(&format!("{}\n\n", rule));

    let solved: Vec<&StrategySummary> = summaries.iter().filter(|s| s.successes > 0).collect();
    if solved.is_empty() {
        out.push_str("No strategy solved any test case.\n");
        return out;
    }

    let best_by = |key: fn(&StrategySummary) -> f64| {
        solved
            .iter()
            .copied()
            .min_by(|a, b| key(*a).total_cmp(&key(*b)))
    };
    if let Some(s) = best_by(|s: &StrategySummary| s.avg_time_secs) {
        out.push_str(&format!(
            "- Fastest: {} ({:.6} s on average)\n",
            s.name, s.avg_time_secs
        ));
    }
    if let Some(s) = best_by(|s: &StrategySummary| s.avg_nodes_expanded) {
        out.push_str(&format!(
            "- Fewest nodes expanded: {} ({:.0} on average)\n",
            s.name, s.avg_nodes_expanded
        ));
    }
    if let Some(s) = best_by(|s: &StrategySummary| s.avg_path_length) {
        out.push_str(&format!(
            "- Shortest paths: {} ({:.1} moves on average)\n",
            s.name, s.avg_path_length
        ));
    }
    out
}

/// Picks the best strategy for a single board.
///
/// Only successful runs compete. Each metric is normalised by its maximum
/// across those runs, then weighted 50% path length, 30% time and 20% expanded
/// nodes; the lowest score wins, earlier entries winning ties.
pub fn recommend(runs: &[(Strategy, SolveResult)]) -> Option<Strategy> {
    let successful: Vec<&(Strategy, SolveResult)> = runs.iter().filter(|(_, r)| r.success).collect();

    let max_of = |value: fn(&SolveResult) -> f64| {
        successful.iter().map(|(_, r)| value(r)).fold(0.0_f64, f64::max)
    };
    let max_path = max_of(|r: &SolveResult| r.path_length as f64);
    let max_time = max_of(|r: &SolveResult| r.execution_secs());
    let max_nodes = max_of(|r: &SolveResult| r.nodes_expanded as f64);

    let normalise = |value: f64, max: f64| if max > 0.0 { value / max } else { 0.0 };
    let (w_path, w_time, w_nodes) = RECOMMEND_WEIGHTS;

    successful
        .iter()
        .map(|(strategy, r)| {
            let score = w_path * normalise(r.path_length as f64, max_path)
                + w_time * normalise(r.execution_secs(), max_time)
                + w_nodes * normalise(r.nodes_expanded as f64, max_nodes);
            (*strategy, score)
        })
        .fold(None, |best: Option<(Strategy, f64)>, (strategy, score)| match best {
            Some((_, best_score)) if best_score <= score => best,
            _ => Some((strategy, score)),
        })
        .map(|(strategy, _)| strategy)
}
