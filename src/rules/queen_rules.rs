//! Queen rule: orthogonal or diagonal, occupancy ignored.

use crate::board::Board;
use crate::board_location::BoardLocation;
use crate::geometry::{is_diagonal, is_orthogonal};

pub fn validate_queen_move(_board: &Board, start: BoardLocation, stop: BoardLocation) -> bool {
    is_orthogonal(start, stop) || is_diagonal(start, stop)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queen_combines_rook_and_bishop_lines() {
        let board = Board::new_game();
        assert!(validate_queen_move(&board, (3, 7), (3, 0)));
        assert!(validate_queen_move(&board, (3, 7), (0, 7)));
        assert!(validate_queen_move(&board, (3, 7), (7, 3)));
        assert!(!validate_queen_move(&board, (3, 7), (4, 5)));
    }
}
