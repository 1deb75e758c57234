//! Rook rule: any orthogonal, occupancy ignored.

use crate::board::Board;
use crate::board_location::BoardLocation;
use crate::geometry::is_orthogonal;

pub fn validate_rook_move(_board: &Board, start: BoardLocation, stop: BoardLocation) -> bool {
    is_orthogonal(start, stop)
}
