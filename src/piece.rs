//! The closed set of piece variants and their display glyphs.

use crate::piece_team::PieceTeam;

/// A piece value as stored in every board cell. Vacant squares hold `Empty`,
/// so the grid never contains holes.
///
/// The pawn carries its own one-shot double-step latch. The latch starts
/// `true` and every accepted pawn verdict returns an updated pawn with the
/// latch cleared, so a second double-step by the same pawn is rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Piece {
    Empty,
    Pawn {
        team: PieceTeam,
        double_step_available: bool,
    },
    Bishop {
        team: PieceTeam,
    },
    Rook {
        team: PieceTeam,
    },
    Knight {
        team: PieceTeam,
    },
    Queen {
        team: PieceTeam,
    },
    King {
        team: PieceTeam,
    },
}

impl Piece {
    /// A fresh pawn with its double-step latch intact.
    #[inline]
    pub const fn new_pawn(team: PieceTeam) -> Self {
        Piece::Pawn {
            team,
            double_step_available: true,
        }
    }

    /// Fixed display glyph for terminal rendering.
    ///
    /// The mapping mirrors the filled/hollow glyph assignment of the game
    /// this crate reproduces: Light renders the filled set, Dark the hollow
    /// set. Do not "fix" it to match over-the-board color conventions.
    pub const fn glyph(&self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::Pawn {
                team: PieceTeam::Light,
                ..
            } => '♟',
            Piece::Pawn {
                team: PieceTeam::Dark,
                ..
            } => '♙',
            Piece::Bishop {
                team: PieceTeam::Light,
            } => '♝',
            Piece::Bishop {
                team: PieceTeam::Dark,
            } => '♗',
            Piece::Rook {
                team: PieceTeam::Light,
            } => '♜',
            Piece::Rook {
                team: PieceTeam::Dark,
            } => '♖',
            Piece::Knight {
                team: PieceTeam::Light,
            } => '♞',
            Piece::Knight {
                team: PieceTeam::Dark,
            } => '♘',
            Piece::Queen {
                team: PieceTeam::Light,
            } => '♛',
            Piece::Queen {
                team: PieceTeam::Dark,
            } => '♕',
            Piece::King {
                team: PieceTeam::Light,
            } => '♚',
            Piece::King {
                team: PieceTeam::Dark,
            } => '♔',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_pawn_has_latch_available() {
        let pawn = Piece::new_pawn(PieceTeam::Light);
        assert_eq!(
            pawn,
            Piece::Pawn {
                team: PieceTeam::Light,
                double_step_available: true
            }
        );
    }

    #[test]
    fn glyphs_are_distinct_per_variant_and_team() {
        let pieces = [
            Piece::Empty,
            Piece::new_pawn(PieceTeam::Light),
            Piece::new_pawn(PieceTeam::Dark),
            Piece::Bishop { team: PieceTeam::Light },
            Piece::Bishop { team: PieceTeam::Dark },
            Piece::Rook { team: PieceTeam::Light },
            Piece::Rook { team: PieceTeam::Dark },
            Piece::Knight { team: PieceTeam::Light },
            Piece::Knight { team: PieceTeam::Dark },
            Piece::Queen { team: PieceTeam::Light },
            Piece::Queen { team: PieceTeam::Dark },
            Piece::King { team: PieceTeam::Light },
            Piece::King { team: PieceTeam::Dark },
        ];
        for (i, a) in pieces.iter().enumerate() {
            for b in pieces.iter().skip(i + 1) {
                assert_ne!(a.glyph(), b.glyph());
            }
        }
    }

    #[test]
    fn latch_state_does_not_change_the_glyph() {
        let fresh = Piece::new_pawn(PieceTeam::Dark);
        let spent = Piece::Pawn {
            team: PieceTeam::Dark,
            double_step_available: false,
        };
        assert_eq!(fresh.glyph(), spent.glyph());
    }
}
