//! Step-by-step navigation through a solution.
//!
//! `Playback` owns a copy of the starting board and walks a recorded move list
//! forwards and backwards. Going back restores the previous board from a
//! history stack instead of pouring in reverse, since a reversed pour is not
//! always legal under the pour rules.

use crate::engine::{Board, Move};
use crate::error::PlaybackError;
use crate::solver::Solution;

/// Replays a move list one pour at a time.
///
/// # Examples
/// ```
/// use water_sort_solver::playback::Playback;
/// use water_sort_solver::solver::solve;
/// use water_sort_solver::utils::board_from_str_array;
///
/// let board = board_from_str_array(&["RRR", "R"], 4).unwrap();
/// let solution = solve(&board).unwrap();
/// let mut playback = Playback::from_solution(board, &solution);
///
/// let mv = playback.step_forward().unwrap().unwrap();
/// assert_eq!(mv.count, 3);
/// assert!(playback.is_finished());
/// assert!(playback.board().is_solved());
///
/// playback.step_back();
/// assert_eq!(playback.current_step(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Playback {
    board: Board,
    moves: Vec<Move>,
    history: Vec<Board>, // boards before each applied move
}

impl Playback {
    pub fn new(board: Board, moves: Vec<Move>) -> Self {
        Playback {
            board,
            moves,
            history: Vec::new(),
        }
    }

    pub fn from_solution(board: Board, solution: &Solution) -> Self {
        Self::new(board, solution.moves.clone())
    }

    /// The board after the moves applied so far.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of moves applied so far.
    pub fn current_step(&self) -> usize {
        self.history.len()
    }

    pub fn total_steps(&self) -> usize {
        self.moves.len()
    }

    pub fn is_finished(&self) -> bool {
        self.current_step() == self.total_steps()
    }

    /// The move `step_forward` would apply next.
    pub fn next_move(&self) -> Option<&Move> {
        self.moves.get(self.current_step())
    }

    /// Applies the next move.
    ///
    /// Returns `Ok(None)` when every move has already been applied.
    ///
    /// # Errors
    /// `PlaybackError::IllegalMove` if the recorded move is not a legal pour of
    /// exactly `count` units on the current board. The playback is unchanged.
    pub fn step_forward(&mut self) -> Result<Option<Move>, PlaybackError> {
        let step = self.current_step();
        let Some(&mv) = self.moves.get(step) else {
            return Ok(None);
        };
        let next = self
            .board
            .apply_move(&mv)
            .ok_or(PlaybackError::IllegalMove { step, mv })?;
        self.history.push(std::mem::replace(&mut self.board, next));
        Ok(Some(mv))
    }

    /// Undoes the last applied move, returning it, or `None` at the start.
    pub fn step_back(&mut self) -> Option<Move> {
        let previous = self.history.pop()?;
        self.board = previous;
        self.moves.get(self.current_step()).copied()
    }

    /// Returns to the starting board.
    pub fn reset(&mut self) {
        if !self.history.is_empty() {
            self.board = self.history.swap_remove(0);
            self.history.clear();
        }
    }
}
