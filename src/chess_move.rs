use crate::board_location::BoardLocation;
use crate::piece::Piece;

/// A move as read from the input stream: two locations plus the piece that
/// occupied the start square at read time. The board writes this carried
/// piece when the move is applied, not whatever sits on the start square at
/// apply time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChessMove {
    pub start: BoardLocation,
    pub stop: BoardLocation,
    pub piece: Piece,
}

/// Outcome of asking the rule engine about a move.
///
/// `piece_after` carries the updated piece state so the pawn double-step
/// latch is consumed by validation itself rather than mutated behind the
/// caller's back. For every non-pawn variant `piece_after` equals the piece
/// that was queried.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveVerdict {
    pub legal: bool,
    pub piece_after: Piece,
}

impl MoveVerdict {
    #[inline]
    pub const fn unchanged(legal: bool, piece: Piece) -> Self {
        Self {
            legal,
            piece_after: piece,
        }
    }
}
