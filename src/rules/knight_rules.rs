//! Knight rule: non-orthogonal with Manhattan distance exactly 2.
//!
//! This is not the standard (1,2) offset set. The only non-orthogonal
//! squares at Manhattan distance 2 are the four diagonal neighbours, so this
//! knight steps one square diagonally and can never reach a true L-shaped
//! target. The encoding is reproduced as-is from the game this crate
//! implements.

use crate::board::Board;
use crate::board_location::BoardLocation;
use crate::geometry::{is_orthogonal, manhattan_distance};

pub fn validate_knight_move(_board: &Board, start: BoardLocation, stop: BoardLocation) -> bool {
    !is_orthogonal(start, stop) && manhattan_distance(start, stop) == 2
}
