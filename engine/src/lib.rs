pub mod config;
pub mod games;
pub mod logger;

pub use games::tictactoe::{
    Board, GameOutcome, InvalidMove, Mark, NoMovesAvailable, apply_move, evaluate,
    select_best_move,
};
