//! Crate root module declarations for the Peach Chess board project.
//!
//! This file exposes all top-level subsystems (board state, the per-piece
//! rule engine, the interactive match loop, and utility helpers) so binaries,
//! tests, and external tooling can import stable module paths.

pub mod board;
pub mod board_location;
pub mod chess_move;
pub mod errors;
pub mod geometry;
pub mod match_loop;
pub mod piece;
pub mod piece_team;

pub mod rules {
    pub mod bishop_rules;
    pub mod king_rules;
    pub mod knight_rules;
    pub mod pawn_rules;
    pub mod queen_rules;
    pub mod rook_rules;
    pub mod validate_move;
}

pub mod utils {
    pub mod probe_harness;
    pub mod render_board;
}
