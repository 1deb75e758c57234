//! Pawn advance rule with the one-shot double-step latch.
//!
//! A pawn move must be vertically aligned. Light pawns advance toward
//! decreasing rank, Dark pawns toward increasing rank. The two-square
//! advance is gated by `double_step_available`, which every accepted verdict
//! (single or double step) clears in the returned `piece_after`. Diagonal
//! pawn captures do not exist in this rule set.

use crate::board::Board;
use crate::board_location::BoardLocation;
use crate::chess_move::MoveVerdict;
use crate::geometry::is_vertical;
use crate::piece::Piece;
use crate::piece_team::PieceTeam;

pub fn validate_pawn_move(
    _board: &Board,
    team: PieceTeam,
    double_step_available: bool,
    start: BoardLocation,
    stop: BoardLocation,
) -> MoveVerdict {
    let rejected = MoveVerdict {
        legal: false,
        piece_after: Piece::Pawn {
            team,
            double_step_available,
        },
    };
    let accepted = MoveVerdict {
        legal: true,
        piece_after: Piece::Pawn {
            team,
            double_step_available: false,
        },
    };

    if !is_vertical(start, stop) {
        return rejected;
    }

    let delta = stop.1 - start.1;
    match team {
        PieceTeam::Light => {
            if delta < -2 {
                rejected
            } else if delta == -2 && double_step_available {
                accepted
            } else if delta == -1 {
                accepted
            } else {
                rejected
            }
        }
        PieceTeam::Dark => {
            if delta > 2 {
                rejected
            } else if delta == 2 && double_step_available {
                accepted
            } else if delta == 1 {
                accepted
            } else {
                rejected
            }
        }
    }
}
