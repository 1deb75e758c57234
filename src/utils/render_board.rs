//! Terminal-oriented Unicode board renderer.
//!
//! Produces the exact grid shape the match loop prints: rank-major from
//! rank 0 down, every cell glyph followed by a space, every row followed by
//! a blank line.

use crate::board::{Board, BOARD_SIZE};

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    for rank in 0..BOARD_SIZE {
        for file in 0..BOARD_SIZE {
            out.push(board.square_at((file as i8, rank as i8)).glyph());
            out.push(' ');
        }
        out.push_str("\n\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_board_renders_the_expected_rows() {
        let rendered = render_board(&Board::new_game());
        let rows: Vec<&str> = rendered.split("\n\n").collect();
        assert_eq!(rows.len(), 9); // eight rows plus the trailing empty split
        assert_eq!(rows[0], "♖ ♘ ♗ ♔ ♕ ♗ ♘ ♖ ");
        assert_eq!(rows[1], "♙ ♙ ♙ ♙ ♙ ♙ ♙ ♙ ");
        for row in &rows[2..6] {
            assert_eq!(*row, ". . . . . . . . ");
        }
        assert_eq!(rows[6], "♟ ♟ ♟ ♟ ♟ ♟ ♟ ♟ ");
        assert_eq!(rows[7], "♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ ");
        assert_eq!(rows[8], "");
    }
}
