//! Breadth-first solver for water sort boards.
//!
//! Nodes are board configurations and edges are legal pours. Because the
//! frontier is first-in-first-out, the first solution found uses the fewest
//! moves among those reachable within the configured bounds. Candidate pours
//! are tried in ascending `(from, to)` order, which makes the result
//! deterministic.
use log::{debug, info, warn};
use std::collections::{HashSet, VecDeque};

use crate::config::SolverConfig;
use crate::engine::{Board, Move};

/// A sequence of pours that takes a board to a solved state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// The pours, in the order they must be applied.
    pub moves: Vec<Move>,
    /// Number of search nodes expanded before this solution was found.
    pub nodes_expanded: usize,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Applies every move to `board` in order and returns the final board,
    /// or `None` if some move is not a legal pour at that point.
    pub fn replay(&self, board: &Board) -> Option<Board> {
        self.moves
            .iter()
            .try_fold(board.clone(), |current, mv| current.apply_move(mv))
    }
}

/// Why a search stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The initial board was already solved.
    AlreadySolved,
    /// A solution was found.
    Solved,
    /// Every reachable state within the depth bound was explored.
    Exhausted,
    /// The expansion bound was hit with frontier left to explore.
    ExpansionLimit,
}

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose pours were enumerated.
    pub nodes_expanded: usize,
    /// Boards produced by legal pours, including duplicates.
    pub states_generated: usize,
    /// Distinct boards recorded in the visited set.
    pub states_visited: usize,
    /// Nodes dropped because their path reached `max_depth`.
    pub nodes_pruned: usize,
    pub termination: Termination,
}

/// Result of `search`: the solution, if any, plus the search counters.
#[derive(Clone, Debug)]
pub struct SearchReport {
    pub solution: Option<Solution>,
    pub stats: SearchStats,
}

struct SearchNode {
    board: Board,
    path: Vec<Move>,
}

/// Solves `board` with the default search bounds.
///
/// Returns `Some` with an empty solution if the board is already solved, and
/// `None` if no solution was found within the bounds.
///
/// # Examples
///
/// ```
/// use water_sort_solver::solver::solve;
/// use water_sort_solver::utils::board_from_str_array;
///
/// let board = board_from_str_array(&["AB", "BA", ".", "AB", "BA"], 4).unwrap();
/// let solution = solve(&board).unwrap();
/// let solved = solution.replay(&board).unwrap();
/// assert!(solved.is_solved());
/// ```
pub fn solve(board: &Board) -> Option<Solution> {
    solve_with_config(board, &SolverConfig::default())
}

/// Solves `board` with explicit search bounds.
pub fn solve_with_config(board: &Board, config: &SolverConfig) -> Option<Solution> {
    search(board, config).solution
}

/// Runs the breadth-first search and reports how it ended.
///
/// The caller's board is never modified; the search works on its own copies.
pub fn search(initial_board: &Board, config: &SolverConfig) -> SearchReport {
    let mut stats = SearchStats {
        nodes_expanded: 0,
        states_generated: 0,
        states_visited: 1,
        nodes_pruned: 0,
        termination: Termination::Exhausted,
    };

    if initial_board.is_solved() {
        debug!("board already solved");
        stats.termination = Termination::AlreadySolved;
        return SearchReport {
            solution: Some(Solution {
                moves: Vec::new(),
                nodes_expanded: 0,
            }),
            stats,
        };
    }

    debug!(
        "searching {} tubes (max_depth {}, max_expansions {})",
        initial_board.tube_count(),
        config.max_depth,
        config.max_expansions
    );

    let mut visited: HashSet<Board> = HashSet::new();
    visited.insert(initial_board.clone());
    let mut frontier = VecDeque::new();
    frontier.push_back(SearchNode {
        board: initial_board.clone(),
        path: Vec::new(),
    });

    let tube_count = initial_board.tube_count();

    while let Some(node) = frontier.pop_front() {
        if node.path.len() >= config.max_depth {
            stats.nodes_pruned += 1;
            continue;
        }
        if stats.nodes_expanded >= config.max_expansions {
            warn!(
                "expansion limit {} reached with {} nodes left in the frontier",
                config.max_expansions,
                frontier.len() + 1
            );
            stats.termination = Termination::ExpansionLimit;
            stats.states_visited = visited.len();
            return SearchReport {
                solution: None,
                stats,
            };
        }
        stats.nodes_expanded += 1;

        for from in 0..tube_count {
            for to in 0..tube_count {
                let Some((next_board, count)) = node.board.pour(from, to) else {
                    continue;
                };
                stats.states_generated += 1;
                let mv = Move { from, to, count };

                if next_board.is_solved() {
                    let mut moves = node.path.clone();
                    moves.push(mv);
                    stats.termination = Termination::Solved;
                    stats.states_visited = visited.len();
                    info!(
                        "solution with {} moves found after {} expansions",
                        moves.len(),
                        stats.nodes_expanded
                    );
                    return SearchReport {
                        solution: Some(Solution {
                            moves,
                            nodes_expanded: stats.nodes_expanded,
                        }),
                        stats,
                    };
                }

                if visited.contains(&next_board) {
                    continue;
                }
                visited.insert(next_board.clone());

                let mut path = node.path.clone();
                path.push(mv);
                frontier.push_back(SearchNode {
                    board: next_board,
                    path,
                });
            }
        }
    }

    stats.states_visited = visited.len();
    debug!(
        "search exhausted after {} expansions ({} states visited)",
        stats.nodes_expanded, stats.states_visited
    );
    SearchReport {
        solution: None,
        stats,
    }
}
