use super::board::Board;
use super::types::{GameOutcome, Mark, WinningLine};

pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn winner(board: &Board, mark: Mark) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&position| board.get(position) == Some(mark)))
}

/// X is checked before O. Only a board that no legal game reaches can have
/// both sides on a full line, and it resolves as a win for X.
pub fn evaluate(board: &Board) -> GameOutcome {
    if winner(board, Mark::X) {
        return GameOutcome::Win(Mark::X);
    }
    if winner(board, Mark::O) {
        return GameOutcome::Win(Mark::O);
    }
    if board.is_full() {
        return GameOutcome::Draw;
    }
    GameOutcome::InProgress
}

impl Board {
    pub fn outcome(&self) -> GameOutcome {
        evaluate(self)
    }
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    [Mark::X, Mark::O].into_iter().find_map(|mark| {
        WINNING_LINES
            .iter()
            .find(|line| line.iter().all(|&position| board.get(position) == Some(mark)))
            .map(|line| WinningLine::new(mark, *line))
    })
}
