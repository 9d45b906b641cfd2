use std::fmt;

use super::board::{Board, InvalidMove};
use super::bot_controller::{NoMovesAvailable, select_best_move};
use super::types::{GameOutcome, Mark, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    InvalidMove(InvalidMove),
    NotYourTurn { expected: Mark, got: Mark },
    GameOver,
    NoMovesAvailable,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidMove(e) => write!(f, "Invalid move: {}", e),
            GameError::NotYourTurn { expected, got } => {
                write!(f, "Not your turn: {} to move, got {}", expected, got)
            }
            GameError::GameOver => write!(f, "Game is already over"),
            GameError::NoMovesAvailable => write!(f, "No moves available"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<InvalidMove> for GameError {
    fn from(e: InvalidMove) -> Self {
        GameError::InvalidMove(e)
    }
}

impl From<NoMovesAvailable> for GameError {
    fn from(_: NoMovesAvailable) -> Self {
        GameError::NoMovesAvailable
    }
}

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    computer_mark: Mark,
    current_mark: Mark,
    status: GameOutcome,
    last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(first_mark: Mark, computer_mark: Mark) -> Self {
        Self {
            board: Board::new(),
            computer_mark,
            current_mark: first_mark,
            status: GameOutcome::InProgress,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn computer_mark(&self) -> Mark {
        self.computer_mark
    }

    pub fn human_mark(&self) -> Mark {
        self.computer_mark.opponent()
    }

    pub fn status(&self) -> GameOutcome {
        self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn is_computer_turn(&self) -> bool {
        self.status == GameOutcome::InProgress && self.current_mark == self.computer_mark
    }

    pub fn winner(&self) -> Option<Mark> {
        self.status.winner()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn place_mark(&mut self, mark: Mark, position: usize) -> Result<(), GameError> {
        if self.status != GameOutcome::InProgress {
            return Err(GameError::GameOver);
        }

        if mark != self.current_mark {
            return Err(GameError::NotYourTurn {
                expected: self.current_mark,
                got: mark,
            });
        }

        self.board.apply(position, mark)?;
        self.last_move = Some(position);
        self.status = evaluate(&self.board);

        if self.status == GameOutcome::InProgress {
            self.current_mark = self.current_mark.opponent();
        }

        Ok(())
    }

    pub fn play_computer_move(&mut self) -> Result<usize, GameError> {
        if self.status != GameOutcome::InProgress {
            return Err(GameError::GameOver);
        }

        if !self.is_computer_turn() {
            return Err(GameError::NotYourTurn {
                expected: self.current_mark,
                got: self.computer_mark,
            });
        }

        let position = select_best_move(&self.board, self.computer_mark)?;
        self.place_mark(self.computer_mark, position)?;
        Ok(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_alternate() {
        let mut state = TicTacToeGameState::new(Mark::X, Mark::O);
        assert_eq!(state.current_mark(), Mark::X);
        assert!(!state.is_computer_turn());

        state.place_mark(Mark::X, 4).unwrap();
        assert_eq!(state.current_mark(), Mark::O);
        assert!(state.is_computer_turn());
        assert_eq!(state.last_move(), Some(4));
    }

    #[test]
    fn test_out_of_turn_move_is_rejected() {
        let mut state = TicTacToeGameState::new(Mark::X, Mark::O);
        assert_eq!(
            state.place_mark(Mark::O, 0),
            Err(GameError::NotYourTurn {
                expected: Mark::X,
                got: Mark::O
            })
        );
        assert_eq!(state.board(), &Board::new());
    }

    #[test]
    fn test_invalid_move_keeps_turn() {
        let mut state = TicTacToeGameState::new(Mark::X, Mark::O);
        assert_eq!(
            state.place_mark(Mark::X, 9),
            Err(GameError::InvalidMove(InvalidMove::OutOfRange { position: 9 }))
        );
        assert_eq!(state.current_mark(), Mark::X);

        state.place_mark(Mark::X, 0).unwrap();
        state.play_computer_move().unwrap();
        assert!(matches!(
            state.place_mark(Mark::X, 0),
            Err(GameError::InvalidMove(InvalidMove::Occupied { position: 0 }))
        ));
    }

    #[test]
    fn test_computer_refuses_to_move_out_of_turn() {
        let mut state = TicTacToeGameState::new(Mark::X, Mark::O);
        assert!(matches!(
            state.play_computer_move(),
            Err(GameError::NotYourTurn { .. })
        ));
    }

    #[test]
    fn test_computer_blocks_and_game_ends() {
        let mut state = TicTacToeGameState::new(Mark::X, Mark::O);
        state.place_mark(Mark::X, 0).unwrap();
        let first_reply = state.play_computer_move().unwrap();
        assert_eq!(first_reply, 4);

        state.place_mark(Mark::X, 1).unwrap();
        assert_eq!(state.play_computer_move().unwrap(), 2);

        while state.status() == GameOutcome::InProgress {
            if state.is_computer_turn() {
                state.play_computer_move().unwrap();
            } else {
                let position = crate::games::tictactoe::get_available_moves(state.board())[0];
                state.place_mark(Mark::X, position).unwrap();
            }
        }

        assert_ne!(state.winner(), Some(Mark::X));
        assert_eq!(state.place_mark(state.current_mark(), 0), Err(GameError::GameOver));
        assert_eq!(state.play_computer_move(), Err(GameError::GameOver));
    }

    #[test]
    fn test_computer_first_game_reports_winner_and_line() {
        let mut state = TicTacToeGameState::new(Mark::O, Mark::O);
        assert!(state.is_computer_turn());
        assert_eq!(state.play_computer_move().unwrap(), 0);

        // a weak human who always takes the highest free cell
        while state.status() == GameOutcome::InProgress {
            if state.is_computer_turn() {
                state.play_computer_move().unwrap();
            } else {
                let moves = crate::games::tictactoe::get_available_moves(state.board());
                state.place_mark(Mark::X, *moves.last().unwrap()).unwrap();
            }
        }

        assert_eq!(state.winner(), Some(Mark::O));
        let line = state.winning_line().unwrap();
        assert_eq!(line.mark, Mark::O);
        assert!(line.cells.iter().all(|&p| state.board().get(p) == Some(Mark::O)));
    }
}
