//! Seeded random-move soak harness for local testing.
//!
//! Throws uniformly random in-range moves at a fresh board, applies the ones
//! the rule engine accepts, and tallies what happened. Deterministic for a
//! given seed, so runs are comparable across changes to the rules.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::board::Board;
use crate::chess_move::ChessMove;
use crate::piece::Piece;
use crate::rules::validate_move::validate_move;

#[derive(Debug, Clone, Copy)]
pub struct ProbeConfig {
    /// Number of random moves to attempt.
    pub attempts: u32,
    /// Seed for the move generator.
    pub seed: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            attempts: 10_000,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeStats {
    pub attempts: u32,
    pub legal: u32,
    /// Attempts whose start square held no piece.
    pub empty_picks: u32,
    /// Accepted pawn verdicts that spent a fresh double-step latch.
    pub pawn_latches_consumed: u32,
}

impl ProbeStats {
    pub fn report(&self) -> String {
        format!(
            "attempts={} legal={} empty_picks={} pawn_latches_consumed={}",
            self.attempts, self.legal, self.empty_picks, self.pawn_latches_consumed
        )
    }
}

#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub stats: ProbeStats,
    pub final_board: Board,
}

pub fn run_probe(config: &ProbeConfig) -> ProbeResult {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut board = Board::new_game();
    let mut stats = ProbeStats::default();

    for _ in 0..config.attempts {
        stats.attempts += 1;
        let start = (rng.random_range(0..8i8), rng.random_range(0..8i8));
        let stop = (rng.random_range(0..8i8), rng.random_range(0..8i8));

        let piece = board.square_at(start);
        if piece == Piece::Empty {
            stats.empty_picks += 1;
        }

        let verdict = validate_move(piece, &board, start, stop);
        if verdict.legal {
            stats.legal += 1;
            if verdict.piece_after != piece {
                stats.pawn_latches_consumed += 1;
            }
            board.apply_move(&ChessMove {
                start,
                stop,
                piece: verdict.piece_after,
            });
        }
    }

    ProbeResult {
        stats,
        final_board: board,
    }
}
