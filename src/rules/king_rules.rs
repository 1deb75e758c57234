//! King rule expressed through Manhattan distance.
//!
//! Distance 1 covers the four orthogonal neighbours. Distance 2 is accepted
//! only when diagonal, which admits exactly the four diagonal neighbours.

use crate::board::Board;
use crate::board_location::BoardLocation;
use crate::geometry::{is_diagonal, manhattan_distance};

pub fn validate_king_move(_board: &Board, start: BoardLocation, stop: BoardLocation) -> bool {
    match manhattan_distance(start, stop) {
        1 => true,
        2 => is_diagonal(start, stop),
        _ => false,
    }
}
