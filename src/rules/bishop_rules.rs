//! Bishop rule: any diagonal, occupancy ignored.

use crate::board::Board;
use crate::board_location::BoardLocation;
use crate::geometry::is_diagonal;

pub fn validate_bishop_move(_board: &Board, start: BoardLocation, stop: BoardLocation) -> bool {
    is_diagonal(start, stop)
}
