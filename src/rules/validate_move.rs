//! Single dispatch point from a piece variant to its legality rule.
//!
//! Every rule receives the board for signature symmetry, and none of them
//! read it: there is no path-blocking, capture, or turn logic in this rule
//! set. The verdict carries the (possibly updated) piece so the pawn latch
//! change is visible to the caller instead of happening behind a shared
//! reference.

use crate::board::Board;
use crate::board_location::BoardLocation;
use crate::chess_move::MoveVerdict;
use crate::piece::Piece;
use crate::rules::bishop_rules::validate_bishop_move;
use crate::rules::king_rules::validate_king_move;
use crate::rules::knight_rules::validate_knight_move;
use crate::rules::pawn_rules::validate_pawn_move;
use crate::rules::queen_rules::validate_queen_move;
use crate::rules::rook_rules::validate_rook_move;

pub fn validate_move(
    piece: Piece,
    board: &Board,
    start: BoardLocation,
    stop: BoardLocation,
) -> MoveVerdict {
    match piece {
        Piece::Empty => MoveVerdict::unchanged(false, piece),
        Piece::Pawn {
            team,
            double_step_available,
        } => validate_pawn_move(board, team, double_step_available, start, stop),
        Piece::Bishop { .. } => {
            MoveVerdict::unchanged(validate_bishop_move(board, start, stop), piece)
        }
        Piece::Rook { .. } => MoveVerdict::unchanged(validate_rook_move(board, start, stop), piece),
        Piece::Knight { .. } => {
            MoveVerdict::unchanged(validate_knight_move(board, start, stop), piece)
        }
        Piece::Queen { .. } => {
            MoveVerdict::unchanged(validate_queen_move(board, start, stop), piece)
        }
        Piece::King { .. } => MoveVerdict::unchanged(validate_king_move(board, start, stop), piece),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece_team::PieceTeam;

    #[test]
    fn empty_square_rejects_everything() {
        let board = Board::new_game();
        for stop in [(3, 3), (3, 4), (4, 4), (3, 2)] {
            let verdict = validate_move(Piece::Empty, &board, (3, 3), stop);
            assert!(!verdict.legal);
            assert_eq!(verdict.piece_after, Piece::Empty);
        }
    }

    #[test]
    fn non_pawn_verdicts_return_the_piece_unchanged() {
        let board = Board::new_game();
        let rook = Piece::Rook { team: PieceTeam::Light };
        let verdict = validate_move(rook, &board, (0, 7), (0, 0));
        assert!(verdict.legal);
        assert_eq!(verdict.piece_after, rook);
    }

    #[test]
    fn pawn_verdict_threads_the_consumed_latch() {
        let board = Board::new_game();
        let pawn = Piece::new_pawn(PieceTeam::Light);
        let verdict = validate_move(pawn, &board, (4, 6), (4, 4));
        assert!(verdict.legal);
        assert_eq!(
            verdict.piece_after,
            Piece::Pawn {
                team: PieceTeam::Light,
                double_step_available: false
            }
        );
    }
}
