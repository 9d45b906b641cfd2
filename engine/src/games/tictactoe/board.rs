use std::fmt;
use std::str::FromStr;

use super::types::{CELL_COUNT, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    OutOfRange { position: usize },
    Occupied { position: usize },
}

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMove::OutOfRange { position } => {
                write!(f, "Position {} is out of range 0-{}", position, CELL_COUNT - 1)
            }
            InvalidMove::Occupied { position } => {
                write!(f, "Position {} is already taken", position)
            }
        }
    }
}

impl std::error::Error for InvalidMove {}

/// Row-major 3x3 grid. `Copy`, so handing it to the search never aliases
/// the caller's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, position: usize) -> Option<Mark> {
        self.cells.get(position).copied().flatten()
    }

    pub fn is_empty_at(&self, position: usize) -> bool {
        position < CELL_COUNT && self.cells[position].is_none()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(mark)).count()
    }

    pub fn apply(&mut self, position: usize, mark: Mark) -> Result<(), InvalidMove> {
        if position >= CELL_COUNT {
            return Err(InvalidMove::OutOfRange { position });
        }
        if self.cells[position].is_some() {
            return Err(InvalidMove::Occupied { position });
        }
        self.cells[position] = Some(mark);
        Ok(())
    }

    /// Caller guarantees `position` is in range and empty.
    pub(crate) fn place_unchecked(&mut self, position: usize, mark: Mark) {
        debug_assert!(self.cells[position].is_none());
        self.cells[position] = Some(mark);
    }

    pub(crate) fn undo(&mut self, position: usize) {
        self.cells[position] = None;
    }
}

pub fn apply_move(board: &Board, position: usize, mark: Mark) -> Result<Board, InvalidMove> {
    let mut next = *board;
    next.apply(position, mark)?;
    Ok(next)
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_none())
        .map(|(position, _)| position)
        .collect()
}

pub fn is_valid_move(board: &Board, position: usize) -> bool {
    board.is_empty_at(position)
}

/// Parses nine cells, `X`/`O` for marks and `.`, `-`, `_` or a space for
/// empty. Whitespace other than spaces (line breaks, tabs) is ignored.
impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; CELL_COUNT];
        let mut index = 0;

        for ch in s.chars().filter(|c| *c == ' ' || !c.is_whitespace()) {
            if index >= CELL_COUNT {
                return Err(format!("Board must have exactly {} cells", CELL_COUNT));
            }
            cells[index] = match ch {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '-' | '_' | ' ' => None,
                other => return Err(format!("Unexpected cell character '{}'", other)),
            };
            index += 1;
        }

        if index != CELL_COUNT {
            return Err(format!(
                "Board must have exactly {} cells, got {}",
                CELL_COUNT, index
            ));
        }

        Ok(Self { cells })
    }
}
