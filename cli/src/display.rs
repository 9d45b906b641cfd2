use tictactoe_engine::games::tictactoe::{BOARD_SIZE, Board};

pub fn render_board(board: &Board) -> String {
    let mut out = String::from("\nCurrent Board:\n");
    for row in 0..BOARD_SIZE {
        let cell = |col: usize| {
            board
                .get(row * BOARD_SIZE + col)
                .map_or(' ', |mark| mark.symbol())
        };
        out.push_str(&format!(" {} | {} | {} \n", cell(0), cell(1), cell(2)));
        if row + 1 < BOARD_SIZE {
            out.push_str("-----------\n");
        }
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board() {
        let expected = "\nCurrent Board:\n   |   |   \n-----------\n   |   |   \n-----------\n   |   |   \n\n";
        assert_eq!(render_board(&Board::new()), expected);
    }

    #[test]
    fn test_render_marks_in_row_major_order() {
        let board: Board = "XO.\n.X.\n..O".parse().unwrap();
        let rendered = render_board(&board);
        let rows: Vec<&str> = rendered.lines().filter(|l| l.contains('|')).collect();
        assert_eq!(rows, vec![" X | O |   ", "   | X |   ", "   |   | O "]);
    }
}
