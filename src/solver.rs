//! Search strategies for the 8-puzzle.
//!
//! Every strategy runs the same loop over a per-call search tree and visited
//! set; they differ only in the `Frontier` that decides which node is expanded
//! next:
//! - `FifoFrontier`: breadth-first search.
//! - `DepthLimitedStack`: depth-first search with a depth cutoff.
//! - `AStarFrontier`: A* ordered by `depth + manhattan`.
//!
//! Goals are tested when a child is generated, before it enters the frontier or
//! the visited set. A state is never generated twice within one call.
use crate::engine::{Action, State};
use crate::error::{PuzzleError, Result};
use crate::heuristics::GoalPositions;
use log::{debug, info, trace};
use serde::{Serialize, Serializer};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet, VecDeque};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Depth limit used by `Strategy::default_dfs` and the command-line drivers.
pub const DEFAULT_DEPTH_LIMIT: u32 = 20;

const TRACE_INTERVAL: usize = 50_000;

/// Handle of a node inside a `SearchTree`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A node of the search tree.
///
/// Deduplication is keyed on the node's `State` alone, never on its depth,
/// parent or action.
#[derive(Clone, Debug)]
pub struct SearchNode {
    state: State,
    parent: Option<NodeId>,
    action: Option<Action>,
    depth: u32,
}

impl SearchNode {
    fn root(state: State) -> Self {
        SearchNode {
            state,
            parent: None,
            action: None,
            depth: 0,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The action that produced this node; `None` at the root.
    pub fn action(&self) -> Option<Action> {
        self.action
    }

    /// Moves from the root. Doubles as path cost since every move costs 1.
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

/// Append-only arena of search nodes.
///
/// Children refer to their parent by `NodeId`, so the tree never holds a
/// cycle and is dropped in one piece at the end of a solve call.
#[derive(Debug)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    /// Creates a tree holding only the root.
    pub fn new(root: State) -> Self {
        SearchTree {
            nodes: vec![SearchNode::root(root)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Adds a node and returns its handle.
    pub fn push(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Builds (without inserting) the children of `id`, one per legal action,
    /// in the order Up, Down, Left, Right.
    pub fn expand(&self, id: NodeId) -> Vec<SearchNode> {
        let node = &self[id];
        node.state
            .possible_actions()
            .into_iter()
            .map(|action| SearchNode {
                state: node.state.slide(action),
                parent: Some(id),
                action: Some(action),
                depth: node.depth + 1,
            })
            .collect()
    }

    /// The `(action, resulting state)` pairs leading from the root to `id`.
    ///
    /// The root itself is not part of the path, so the root's path is empty.
    pub fn reconstruct_path(&self, id: NodeId) -> Vec<(Action, State)> {
        let mut path = Vec::with_capacity(self[id].depth as usize);
        let mut current = id;
        while let Some(parent) = self[current].parent {
            if let Some(action) = self[current].action {
                path.push((action, self[current].state));
            }
            current = parent;
        }
        path.reverse();
        path
    }
}

impl Index<NodeId> for SearchTree {
    type Output = SearchNode;

    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }
}

/// Expansion order of a search strategy.
pub trait Frontier {
    /// Adds a freshly generated node.
    fn insert(&mut self, id: NodeId, node: &SearchNode);

    /// Removes the next node to expand.
    fn pop_next(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a popped node should have its children generated.
    fn should_expand(&self, _node: &SearchNode) -> bool {
        true
    }

    /// Reorders children before they are tested and inserted.
    fn order_children(&self, _children: &mut Vec<SearchNode>) {}
}

/// First-in first-out queue: breadth-first search.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn insert(&mut self, id: NodeId, _node: &SearchNode) {
        self.queue.push_back(id);
    }

    fn pop_next(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last-in first-out stack with a depth cutoff: bounded depth-first search.
///
/// Nodes at the limit are still popped (and counted) but not expanded.
/// Children are pushed in reverse so they pop in the Up, Down, Left, Right
/// order.
#[derive(Debug)]
pub struct DepthLimitedStack {
    stack: Vec<NodeId>,
    depth_limit: u32,
}

impl DepthLimitedStack {
    pub fn new(depth_limit: u32) -> Self {
        DepthLimitedStack {
            stack: Vec::new(),
            depth_limit,
        }
    }
}

impl Frontier for DepthLimitedStack {
    fn insert(&mut self, id: NodeId, _node: &SearchNode) {
        self.stack.push(id);
    }

    fn pop_next(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn should_expand(&self, node: &SearchNode) -> bool {
        node.depth < self.depth_limit
    }

    fn order_children(&self, children: &mut Vec<SearchNode>) {
        children.reverse();
    }
}

/// Min-priority queue on `f = depth + manhattan`: A* search.
///
/// Entries are keyed `(f, depth, seq, id)`: among equal `f`, shallower nodes
/// pop first, and the insertion sequence number orders what remains, so
/// states are never compared. Popping shallower nodes first keeps a state from
/// being generated (and closed) through a deeper parent of equal `f`.
#[derive(Debug)]
pub struct AStarFrontier {
    heap: BinaryHeap<Reverse<(u32, u32, u64, NodeId)>>,
    goal: GoalPositions,
    next_seq: u64,
}

impl AStarFrontier {
    pub fn new(goal: &State) -> Self {
        AStarFrontier {
            heap: BinaryHeap::new(),
            goal: GoalPositions::new(goal),
            next_seq: 0,
        }
    }

    /// Estimated total cost of a path through `node`.
    pub fn f_cost(&self, node: &SearchNode) -> u32 {
        node.depth + self.goal.manhattan(&node.state)
    }
}

impl Frontier for AStarFrontier {
    fn insert(&mut self, id: NodeId, node: &SearchNode) {
        let f = self.f_cost(node);
        self.heap.push(Reverse((f, node.depth, self.next_seq, id)));
        self.next_seq += 1;
    }

    fn pop_next(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|Reverse((_, _, _, id))| id)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Which search to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Strategy {
    /// Uninformed breadth-first search. Finds minimum-move solutions.
    Bfs,
    /// Depth-first search that does not expand nodes at `depth_limit`.
    /// The visited set is shared across branches, so it may miss solutions
    /// and may return longer-than-optimal paths.
    BoundedDfs { depth_limit: u32 },
    /// A* with the Manhattan-distance heuristic. Finds minimum-move solutions.
    AStar,
}

impl Strategy {
    /// Bounded DFS with `DEFAULT_DEPTH_LIMIT`.
    pub fn default_dfs() -> Self {
        Strategy::BoundedDfs {
            depth_limit: DEFAULT_DEPTH_LIMIT,
        }
    }

    /// BFS, bounded DFS (default limit) and A*, in that order.
    pub fn all() -> [Strategy; 3] {
        [Strategy::Bfs, Strategy::default_dfs(), Strategy::AStar]
    }

    /// Short human-facing name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Bfs => "BFS",
            Strategy::BoundedDfs { .. } => "DFS Limited",
            Strategy::AStar => "A* Manhattan",
        }
    }

    /// Runs this strategy from `initial` towards `goal`.
    pub fn solve(&self, initial: &State, goal: &State) -> SolveResult {
        let start = Instant::now();
        debug!("{} search started from\n{}", self, initial);

        let outcome = match *self {
            Strategy::Bfs => run_search(initial, goal, FifoFrontier::new()),
            Strategy::BoundedDfs { depth_limit } => {
                run_search(initial, goal, DepthLimitedStack::new(depth_limit))
            }
            Strategy::AStar => run_search(initial, goal, AStarFrontier::new(goal)),
        };

        let result = SolveResult::from_outcome(outcome, start.elapsed());
        info!(
            "{} finished: success={}, nodes_expanded={}, path_length={}, time={:.6}s",
            self,
            result.success,
            result.nodes_expanded,
            result.path_length,
            result.execution_secs()
        );
        result
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::BoundedDfs { depth_limit } => write!(f, "{} (limit {})", self.name(), depth_limit),
            _ => write!(f, "{}", self.name()),
        }
    }
}

impl FromStr for Strategy {
    type Err = PuzzleError;

    /// Accepts `bfs`, `dfs` (default limit), `dfs:<limit>` and `astar`/`a*`,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "bfs" => Ok(Strategy::Bfs),
            "dfs" => Ok(Strategy::default_dfs()),
            "astar" | "a*" => Ok(Strategy::AStar),
            other => match other.strip_prefix("dfs:") {
                Some(limit) => limit
                    .parse::<u32>()
                    .map(|depth_limit| Strategy::BoundedDfs { depth_limit })
                    .map_err(|e| PuzzleError::Parse {
                        reason: format!("invalid depth limit '{}': {}", limit, e),
                    }),
                None => Err(PuzzleError::Parse {
                    reason: format!("unknown strategy '{}'", s),
                }),
            },
        }
    }
}

/// What a solve call hands back to its caller.
///
/// `success == false` means the frontier ran out (unreachable goal, or the
/// depth limit cut every path); it is not an error.
#[derive(Clone, Debug, Serialize)]
pub struct SolveResult {
    pub success: bool,
    /// `(action, resulting state)` pairs from the initial state to the goal.
    pub path: Vec<(Action, State)>,
    /// Nodes popped from the frontier; the root's initial push is not counted.
    pub nodes_expanded: usize,
    pub path_length: usize,
    #[serde(serialize_with = "serialize_secs")]
    pub execution_time: Duration,
}

fn serialize_secs<S: Serializer>(duration: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

impl SolveResult {
    fn from_outcome(outcome: SearchOutcome, execution_time: Duration) -> Self {
        let success = outcome.path.is_some();
        let path = outcome.path.unwrap_or_default();
        SolveResult {
            success,
            path_length: path.len(),
            path,
            nodes_expanded: outcome.nodes_expanded,
            execution_time,
        }
    }

    /// Wall-clock time of the call in seconds.
    pub fn execution_secs(&self) -> f64 {
        self.execution_time.as_secs_f64()
    }

    /// The actions of the path, without the intermediate states.
    pub fn actions(&self) -> Vec<Action> {
        self.path.iter().map(|&(action, _)| action).collect()
    }

    /// Applies the path's actions to `initial` and returns the state reached.
    ///
    /// # Errors
    /// Returns `PuzzleError::IllegalAction` if `initial` is not the state the
    /// path was computed from and one of the actions does not fit.
    pub fn replay(&self, initial: &State) -> Result<State> {
        self.path
            .iter()
            .try_fold(*initial, |state, &(action, _)| state.apply(action))
    }
}

/// Solver settings: which strategy to run and which goal to aim for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    pub strategy: Strategy,
    pub goal: State,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            strategy: Strategy::Bfs,
            goal: State::goal(),
        }
    }
}

impl SolverConfig {
    pub fn solve(&self, initial: &State) -> SolveResult {
        self.strategy.solve(initial, &self.goal)
    }
}

/// Breadth-first search from `initial` to `goal`.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::{Action, State};
/// use eight_puzzle_solver::solver::solve_bfs;
///
/// let initial = State::new([[1, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap();
/// let result = solve_bfs(&initial, &State::goal());
/// assert!(result.success);
/// assert_eq!(result.actions(), vec![Action::Right]);
/// ```
pub fn solve_bfs(initial: &State, goal: &State) -> SolveResult {
    Strategy::Bfs.solve(initial, goal)
}

/// Depth-first search that stops expanding at `depth_limit`.
pub fn solve_dfs_limited(initial: &State, goal: &State, depth_limit: u32) -> SolveResult {
    Strategy::BoundedDfs { depth_limit }.solve(initial, goal)
}

/// A* search with the Manhattan-distance heuristic.
pub fn solve_astar(initial: &State, goal: &State) -> SolveResult {
    Strategy::AStar.solve(initial, goal)
}

struct SearchOutcome {
    path: Option<Vec<(Action, State)>>,
    nodes_expanded: usize,
}

fn run_search<F: Frontier>(initial: &State, goal: &State, mut frontier: F) -> SearchOutcome {
    if initial.is_goal(goal) {
        return SearchOutcome {
            path: Some(Vec::new()),
            nodes_expanded: 0,
        };
    }

    let mut tree = SearchTree::new(*initial);
    let mut visited: HashSet<State> = HashSet::new();
    let root = tree.root();
    visited.insert(*initial);
    frontier.insert(root, &tree[root]);

    let mut nodes_expanded = 0;
    while let Some(id) = frontier.pop_next() {
        nodes_expanded += 1;
        if nodes_expanded % TRACE_INTERVAL == 0 {
            trace!(
                "expanded {} nodes, frontier holds {}, visited {}",
                nodes_expanded,
                frontier.len(),
                visited.len()
            );
        }

        if !frontier.should_expand(&tree[id]) {
            continue;
        }

        let mut children = tree.expand(id);
        frontier.order_children(&mut children);

        for child in children {
            if visited.contains(&child.state) {
                continue;
            }
            let state = child.state;
            let child_id = tree.push(child);
            if state.is_goal(goal) {
                return SearchOutcome {
                    path: Some(tree.reconstruct_path(child_id)),
                    nodes_expanded,
                };
            }
            frontier.insert(child_id, &tree[child_id]);
            visited.insert(state);
        }
    }

    SearchOutcome {
        path: None,
        nodes_expanded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::manhattan;
    use crate::metrics::generate_test_cases;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    /// Size of the component of the 3x3 state graph reachable from any state.
    const REACHABLE_STATES: usize = 181_440;

    fn state(grid: [[u8; 3]; 3]) -> State {
        State::new(grid).unwrap()
    }

    fn six_moves_away() -> State {
        // Goal with the blank walked Left, Left, Up, Up, Right, Right; every
        // move displaced a new tile, so Manhattan distance (6) is exact.
        state([[2, 3, 0], [1, 5, 6], [4, 7, 8]])
    }

    fn assert_replays_to_goal(initial: &State, result: &SolveResult, goal: &State) {
        assert_eq!(&result.replay(initial).unwrap(), goal);
        let mut current = *initial;
        for &(action, recorded) in &result.path {
            current = current.apply(action).unwrap();
            assert_eq!(current, recorded);
        }
    }

    #[test]
    fn test_tree_expand_order_and_depth() {
        let tree = SearchTree::new(state([[1, 2, 3], [4, 0, 5], [6, 7, 8]]));
        let children = tree.expand(tree.root());
        let actions: Vec<Action> = children.iter().filter_map(|c| c.action()).collect();
        assert_eq!(actions, Action::ALL.to_vec());
        for child in &children {
            assert_eq!(child.depth(), 1);
            assert_eq!(child.parent(), Some(tree.root()));
        }
    }

    #[test]
    fn test_tree_reconstruct_path() {
        let mut tree = SearchTree::new(State::goal());
        assert!(tree.reconstruct_path(tree.root()).is_empty());

        let first = tree.expand(tree.root()).remove(0); // Up
        let first_id = tree.push(first);
        let second = tree
            .expand(first_id)
            .into_iter()
            .find(|c| c.action() == Some(Action::Left))
            .unwrap();
        let second_state = *second.state();
        let second_id = tree.push(second);

        let path = tree.reconstruct_path(second_id);
        assert_eq!(path.len(), 2);
        assert_eq!(path[0].0, Action::Up);
        assert_eq!(path[1], (Action::Left, second_state));
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_astar_frontier_prefers_shallower_on_equal_f() {
        let goal = State::goal();
        let mut tree = SearchTree::new(goal);
        let mut frontier = AStarFrontier::new(&goal);
        let up = tree.expand(tree.root()).remove(0);
        let up_id = tree.push(up);
        let deep = tree
            .expand(up_id)
            .into_iter()
            .find(|c| c.action() == Some(Action::Left))
            .unwrap();
        let deep_id = tree.push(deep);
        let shallow_id = tree.push(SearchNode::root(state([[0, 1, 2], [4, 5, 3], [7, 8, 6]])));

        frontier.insert(deep_id, &tree[deep_id]);
        frontier.insert(shallow_id, &tree[shallow_id]);
        assert_eq!(frontier.f_cost(&tree[deep_id]), 4);
        assert_eq!(frontier.f_cost(&tree[shallow_id]), 4);
        assert_eq!(frontier.pop_next(), Some(shallow_id));
        assert_eq!(frontier.pop_next(), Some(deep_id));
    }

    #[test]
    fn test_astar_frontier_ties_pop_in_insertion_order() {
        let goal = State::goal();
        let mut tree = SearchTree::new(state([[1, 2, 3], [4, 5, 6], [7, 0, 8]]));
        let mut frontier = AStarFrontier::new(&goal);
        let children = tree.expand(tree.root());
        let mut ids = Vec::new();
        for child in children {
            let id = tree.push(child);
            frontier.insert(id, &tree[id]);
            ids.push(id);
        }
        // Up: f = 1 + 2, Left: f = 1 + 2, Right: f = 1 + 0.
        assert_eq!(frontier.f_cost(&tree[ids[0]]), 3);
        assert_eq!(frontier.f_cost(&tree[ids[1]]), 3);
        assert_eq!(frontier.pop_next(), Some(ids[2]));
        assert_eq!(frontier.pop_next(), Some(ids[0]));
        assert_eq!(frontier.pop_next(), Some(ids[1]));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_depth_limited_stack_pops_in_action_order() {
        let mut tree = SearchTree::new(state([[1, 2, 3], [4, 0, 5], [6, 7, 8]]));
        let mut frontier = DepthLimitedStack::new(1);
        let mut children = tree.expand(tree.root());
        frontier.order_children(&mut children);
        for child in children {
            let id = tree.push(child);
            frontier.insert(id, &tree[id]);
        }
        let popped: Vec<Action> = std::iter::from_fn(|| frontier.pop_next())
            .filter_map(|id| tree[id].action())
            .collect();
        assert_eq!(popped, Action::ALL.to_vec());

        assert!(frontier.should_expand(&tree[tree.root()]));
        assert!(!frontier.should_expand(&tree[NodeId(1)]));
    }

    #[test]
    fn test_initial_is_goal_for_every_strategy() {
        let goal = State::goal();
        for strategy in Strategy::all() {
            let result = strategy.solve(&goal, &goal);
            assert!(result.success, "{}", strategy);
            assert!(result.path.is_empty());
            assert_eq!(result.path_length, 0);
            assert_eq!(result.nodes_expanded, 0);
        }
    }

    #[test]
    fn test_one_move_from_goal() {
        let goal = State::goal();
        let initial = state([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
        for strategy in Strategy::all() {
            let result = strategy.solve(&initial, &goal);
            assert!(result.success, "{}", strategy);
            assert_eq!(result.path_length, 1);
            assert_eq!(result.path, vec![(Action::Right, goal)]);
        }
    }

    #[test]
    fn test_bfs_two_moves_hand_computed() {
        let goal = State::goal();
        let initial = state([[1, 2, 3], [4, 5, 6], [0, 7, 8]]);
        let result = solve_bfs(&initial, &goal);
        assert!(result.success);
        assert_eq!(result.actions(), vec![Action::Right, Action::Right]);
        // Root, then Up child, then Right child whose Right child is the goal.
        assert_eq!(result.nodes_expanded, 3);

        let astar = solve_astar(&initial, &goal);
        assert_eq!(astar.actions(), vec![Action::Right, Action::Right]);
        assert_eq!(astar.nodes_expanded, 2);
    }

    #[test]
    fn test_six_move_instance() {
        let goal = State::goal();
        let initial = six_moves_away();
        assert_eq!(manhattan(&initial, &goal), 6);

        let bfs = solve_bfs(&initial, &goal);
        let astar = solve_astar(&initial, &goal);
        assert!(bfs.success && astar.success);
        assert_eq!(bfs.path_length, 6);
        assert_eq!(astar.path_length, 6);
        assert!(astar.nodes_expanded <= bfs.nodes_expanded);
        assert_replays_to_goal(&initial, &bfs, &goal);
        assert_replays_to_goal(&initial, &astar, &goal);

        let dfs = solve_dfs_limited(&initial, &goal, DEFAULT_DEPTH_LIMIT);
        if dfs.success {
            assert!(dfs.path_length >= 6 && dfs.path_length <= 20);
            assert_replays_to_goal(&initial, &dfs, &goal);
        } else {
            assert!(dfs.path.is_empty());
            assert_eq!(dfs.path_length, 0);
        }
    }

    #[test]
    fn test_dfs_limit_below_optimum_fails() {
        let goal = State::goal();
        let result = solve_dfs_limited(&six_moves_away(), &goal, 5);
        assert!(!result.success);
        assert!(result.path.is_empty());
        assert!(result.nodes_expanded > 0);
    }

    #[test]
    fn test_dfs_never_exceeds_limit() {
        let goal = State::goal();
        let initial = state([[8, 1, 3], [4, 0, 2], [7, 6, 5]]);
        for limit in [6, 10, 14, 20] {
            let result = solve_dfs_limited(&initial, &goal, limit);
            if result.success {
                assert!(result.path_length <= limit as usize, "limit {}", limit);
                assert_replays_to_goal(&initial, &result, &goal);
            }
        }
    }

    #[test]
    fn test_astar_prunes_relative_to_bfs() {
        let goal = State::goal();
        let initial = state([[8, 1, 3], [4, 0, 2], [7, 6, 5]]);
        let bfs = solve_bfs(&initial, &goal);
        let astar = solve_astar(&initial, &goal);
        assert!(bfs.success && astar.success);
        assert!(astar.nodes_expanded <= bfs.nodes_expanded);
        assert_eq!(astar.path_length, bfs.path_length);
        assert!(bfs.path_length as u32 >= manhattan(&initial, &goal));
        assert_replays_to_goal(&initial, &bfs, &goal);
        assert_replays_to_goal(&initial, &astar, &goal);
    }

    #[test]
    fn test_astar_matches_bfs_on_scrambled_batch() {
        let goal = State::goal();
        let mut rng = SmallRng::seed_from_u64(9);
        let mut states = generate_test_cases(40, 5, 40, &goal, &mut rng);
        // Boards where equal-f ties between depths used to cost two extra moves.
        states.push(state([[4, 1, 2], [7, 0, 8], [5, 3, 6]]));
        states.push(state([[0, 7, 3], [5, 2, 6], [1, 4, 8]]));
        states.push(state([[5, 4, 3], [0, 7, 6], [1, 2, 8]]));

        for initial in &states {
            let bfs = solve_bfs(initial, &goal);
            let astar = solve_astar(initial, &goal);
            assert!(bfs.success && astar.success, "unsolved board:\n{}", initial);
            assert_eq!(astar.path_length, bfs.path_length, "board:\n{}", initial);
            assert!(astar.nodes_expanded <= bfs.nodes_expanded, "board:\n{}", initial);
            assert_replays_to_goal(initial, &astar, &goal);
        }
    }

    #[test]
    fn test_unreachable_goal_exhausts_component() {
        let goal = State::goal();
        let initial = state([[2, 1, 3], [4, 5, 6], [7, 8, 0]]);

        let bfs = solve_bfs(&initial, &goal);
        assert!(!bfs.success);
        assert!(bfs.path.is_empty());
        assert_eq!(bfs.nodes_expanded, REACHABLE_STATES);

        let astar = solve_astar(&initial, &goal);
        assert!(!astar.success);
        assert_eq!(astar.nodes_expanded, REACHABLE_STATES);

        let dfs = solve_dfs_limited(&initial, &goal, DEFAULT_DEPTH_LIMIT);
        assert!(!dfs.success);
        assert_eq!(dfs.path_length, 0);
    }

    #[test]
    fn test_solves_are_deterministic() {
        let goal = State::goal();
        let initial = state([[4, 1, 3], [7, 2, 6], [0, 5, 8]]);
        for strategy in Strategy::all() {
            let a = strategy.solve(&initial, &goal);
            let b = strategy.solve(&initial, &goal);
            assert_eq!(a.path, b.path, "{}", strategy);
            assert_eq!(a.nodes_expanded, b.nodes_expanded);
        }
    }

    #[test]
    fn test_custom_goal() {
        let goal = state([[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
        let initial = state([[1, 0, 2], [3, 4, 5], [6, 7, 8]]);
        let config = SolverConfig {
            strategy: Strategy::AStar,
            goal,
        };
        let result = config.solve(&initial);
        assert_eq!(result.actions(), vec![Action::Left]);
    }

    #[test]
    fn test_replay_rejects_mismatched_start() {
        let initial = state([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
        let result = solve_bfs(&initial, &State::goal());
        // Right is illegal with the blank already in the corner.
        let err = result.replay(&State::goal()).unwrap_err();
        assert!(matches!(err, PuzzleError::IllegalAction { action: Action::Right, .. }));
    }

    #[test]
    fn test_strategy_from_str_and_display() {
        assert_eq!("bfs".parse::<Strategy>().unwrap(), Strategy::Bfs);
        assert_eq!("A*".parse::<Strategy>().unwrap(), Strategy::AStar);
        assert_eq!("DFS".parse::<Strategy>().unwrap(), Strategy::default_dfs());
        assert_eq!(
            "dfs:12".parse::<Strategy>().unwrap(),
            Strategy::BoundedDfs { depth_limit: 12 }
        );
        assert!("dfs:x".parse::<Strategy>().is_err());
        assert!("greedy".parse::<Strategy>().is_err());

        assert_eq!(Strategy::default_dfs().to_string(), "DFS Limited (limit 20)");
        assert_eq!(Strategy::AStar.to_string(), "A* Manhattan");
    }

    #[test]
    fn test_result_serializes_seconds() {
        let initial = state([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
        let result = solve_astar(&initial, &State::goal());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["path_length"], 1);
        assert_eq!(json["path"][0][0], "Right");
        assert!(json["execution_time"].is_f64());
    }
}
