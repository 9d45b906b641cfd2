use std::fmt;
use std::ops::{Deref, DerefMut};

use super::board::{Board, get_available_moves};
use super::types::Mark;
use super::win_detector::winner;

const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoMovesAvailable;

impl fmt::Display for NoMovesAvailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No moves available: the board is full")
    }
}

impl std::error::Error for NoMovesAvailable {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveScore {
    pub position: usize,
    pub score: i32,
}

/// A mark placed for the duration of one search branch. The cell is
/// cleared again when the guard drops.
struct TrialMove<'a> {
    board: &'a mut Board,
    position: usize,
}

impl<'a> TrialMove<'a> {
    fn place(board: &'a mut Board, position: usize, mark: Mark) -> Self {
        board.place_unchecked(position, mark);
        Self { board, position }
    }
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.undo(self.position);
    }
}

/// Picks the move for `bot_mark`, which is treated as the maximizing side.
/// Among equally scored moves the lowest position wins.
pub fn select_best_move(board: &Board, bot_mark: Mark) -> Result<usize, NoMovesAvailable> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for MoveScore { position, score } in score_moves(board, bot_mark)? {
        if score > best_score {
            best_score = score;
            best_move = Some(position);
        }
    }

    best_move.ok_or(NoMovesAvailable)
}

/// Minimax score of every empty cell, in position order.
pub fn score_moves(board: &Board, bot_mark: Mark) -> Result<Vec<MoveScore>, NoMovesAvailable> {
    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return Err(NoMovesAvailable);
    }

    let mut board = *board;
    let scores = available_moves
        .into_iter()
        .map(|position| {
            let mut trial = TrialMove::place(&mut board, position, bot_mark);
            let score = minimax(&mut trial, 0, false, bot_mark);
            MoveScore { position, score }
        })
        .collect();

    Ok(scores)
}

fn minimax(board: &mut Board, depth: i32, is_maximizing: bool, bot_mark: Mark) -> i32 {
    let opponent_mark = bot_mark.opponent();

    if winner(board, bot_mark) {
        return WIN_SCORE - depth;
    }
    if winner(board, opponent_mark) {
        return depth - WIN_SCORE;
    }
    if board.is_full() {
        return 0;
    }

    let moves = get_available_moves(board);

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for position in moves {
            let mut trial = TrialMove::place(board, position, bot_mark);
            let eval = minimax(&mut trial, depth + 1, false, bot_mark);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for position in moves {
            let mut trial = TrialMove::place(board, position, opponent_mark);
            let eval = minimax(&mut trial, depth + 1, true, bot_mark);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}
