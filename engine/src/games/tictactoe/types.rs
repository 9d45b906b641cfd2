use std::fmt;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Mark),
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::Win(mark) => Some(*mark),
            _ => None,
        }
    }
}

/// Three cell indices that complete a win, lowest index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }

    pub fn start(&self) -> usize {
        self.cells[0]
    }

    pub fn end(&self) -> usize {
        self.cells[2]
    }
}

pub fn row_col(position: usize) -> (usize, usize) {
    (position / BOARD_SIZE, position % BOARD_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_an_involution() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::X.opponent().opponent(), Mark::X);
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(!GameOutcome::InProgress.is_terminal());
        assert!(GameOutcome::Draw.is_terminal());
        assert!(GameOutcome::Win(Mark::O).is_terminal());
        assert_eq!(GameOutcome::Win(Mark::X).winner(), Some(Mark::X));
        assert_eq!(GameOutcome::Draw.winner(), None);
    }

    #[test]
    fn test_row_col_is_row_major() {
        assert_eq!(row_col(0), (0, 0));
        assert_eq!(row_col(5), (1, 2));
        assert_eq!(row_col(7), (2, 1));
    }
}
