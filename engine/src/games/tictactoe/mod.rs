mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, InvalidMove, apply_move, get_available_moves, is_valid_move};
pub use bot_controller::{MoveScore, NoMovesAvailable, score_moves, select_best_move};
pub use game_state::{GameError, TicTacToeGameState};
pub use types::{BOARD_SIZE, CELL_COUNT, GameOutcome, Mark, WinningLine, row_col};
pub use win_detector::{WINNING_LINES, check_win_with_line, evaluate, winner};
