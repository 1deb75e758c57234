//! The 8x8 board grid and its mutation primitives.
//!
//! The board stores one `Piece` value per cell, `Empty` included, indexed
//! `[rank][file]`. It performs no legality checking of its own: callers run
//! a move through the rule engine first and the board commits whatever it is
//! handed.

use crate::board_location::BoardLocation;
use crate::chess_move::ChessMove;
use crate::piece::Piece;
use crate::piece_team::PieceTeam;

pub const BOARD_SIZE: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Piece; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Builds the starting layout: Dark on ranks 0-1, Light on ranks 6-7.
    ///
    /// The Dark back rank runs R N B K Q B N R (king on file 3) while the
    /// Light back rank runs R N B Q K B N R (queen on file 3). The mirror
    /// asymmetry is part of the game being reproduced; keep it.
    pub fn new_game() -> Self {
        let mut squares = [[Piece::Empty; BOARD_SIZE]; BOARD_SIZE];

        squares[0] = [
            Piece::Rook { team: PieceTeam::Dark },
            Piece::Knight { team: PieceTeam::Dark },
            Piece::Bishop { team: PieceTeam::Dark },
            Piece::King { team: PieceTeam::Dark },
            Piece::Queen { team: PieceTeam::Dark },
            Piece::Bishop { team: PieceTeam::Dark },
            Piece::Knight { team: PieceTeam::Dark },
            Piece::Rook { team: PieceTeam::Dark },
        ];
        squares[1] = [Piece::new_pawn(PieceTeam::Dark); BOARD_SIZE];

        squares[6] = [Piece::new_pawn(PieceTeam::Light); BOARD_SIZE];
        squares[7] = [
            Piece::Rook { team: PieceTeam::Light },
            Piece::Knight { team: PieceTeam::Light },
            Piece::Bishop { team: PieceTeam::Light },
            Piece::Queen { team: PieceTeam::Light },
            Piece::King { team: PieceTeam::Light },
            Piece::Bishop { team: PieceTeam::Light },
            Piece::Knight { team: PieceTeam::Light },
            Piece::Rook { team: PieceTeam::Light },
        ];

        Self { squares }
    }

    /// Piece value at a location. Panics when either axis is outside `0..=7`;
    /// nothing upstream range-checks coordinates.
    #[inline]
    pub fn square_at(&self, x: BoardLocation) -> Piece {
        self.squares[x.1 as usize][x.0 as usize]
    }

    /// Overwrites a single cell. Same out-of-range panic as `square_at`.
    #[inline]
    pub fn set_square(&mut self, x: BoardLocation, piece: Piece) {
        self.squares[x.1 as usize][x.0 as usize] = piece;
    }

    /// Commits an already-validated move: the start square becomes `Empty`
    /// and the stop square receives the piece carried in the move. Whatever
    /// occupied the stop square is silently replaced; there is no capture
    /// bookkeeping and no self-capture check.
    pub fn apply_move(&mut self, chess_move: &ChessMove) {
        self.set_square(chess_move.start, Piece::Empty);
        self.set_square(chess_move.stop, chess_move.piece);
    }
}
