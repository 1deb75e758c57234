//! Interactive two-player match loop driven by coordinate input.
//!
//! Each cycle prints the board, reads two `"<rank> <file>"` lines (start
//! square then stop square), asks the rule engine for a verdict, applies the
//! move when legal, and clears the terminal. Rejected moves produce no
//! message of any kind. There is no turn enforcement, no win detection, and
//! no exit command: the loop runs until the input stream ends or a line
//! fails to parse, both of which are fatal.

use std::io::{self, BufRead, Write};

use crate::board::Board;
use crate::board_location::BoardLocation;
use crate::chess_move::ChessMove;
use crate::errors::ChessErrors;
use crate::rules::validate_move::validate_move;
use crate::utils::render_board::render_board;

const CLEAR_SCREEN: &str = "\u{1b}[2J";

/// Wires the match loop to stdin/stdout on a fresh board.
pub fn run_stdio_loop() -> Result<(), ChessErrors> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut board = Board::new_game();
    run_match_loop(&mut board, &mut stdin.lock(), &mut stdout.lock())
}

/// Runs the match until the input stream fails. Only ever returns `Err`.
pub fn run_match_loop(
    board: &mut Board,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), ChessErrors> {
    loop {
        write!(out, "{}", render_board(board)).map_err(ChessErrors::Io)?;
        out.flush().map_err(ChessErrors::Io)?;

        let chess_move = read_move(board, input)?;
        let verdict = validate_move(chess_move.piece, board, chess_move.start, chess_move.stop);
        if verdict.legal {
            // The verdict's piece carries the consumed pawn latch to the
            // destination square.
            board.apply_move(&ChessMove {
                piece: verdict.piece_after,
                ..chess_move
            });
        }

        writeln!(out, "{CLEAR_SCREEN}").map_err(ChessErrors::Io)?;
    }
}

/// Reads a start line, a stop line, and the piece currently on the start
/// square. Panics when the start square is outside the board.
pub fn read_move(board: &Board, input: &mut impl BufRead) -> Result<ChessMove, ChessErrors> {
    let start = read_coordinate(input)?;
    let stop = read_coordinate(input)?;
    let piece = board.square_at(start);
    Ok(ChessMove { start, stop, piece })
}

fn read_coordinate(input: &mut impl BufRead) -> Result<BoardLocation, ChessErrors> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line).map_err(ChessErrors::Io)?;
    if bytes == 0 {
        return Err(ChessErrors::InputUnavailable);
    }
    parse_coordinate_line(&line)
}

/// Parses a `"<rank> <file>"` line into a `(file, rank)` location.
///
/// The rank token comes first on the wire; the returned pair is file-first.
/// Values outside `0..=7` parse fine here and blow up at board lookup.
pub fn parse_coordinate_line(line: &str) -> Result<BoardLocation, ChessErrors> {
    let mut tokens = line.split_whitespace();
    let rank = next_coordinate_token(&mut tokens, line)?;
    let file = next_coordinate_token(&mut tokens, line)?;
    Ok((file, rank))
}

fn next_coordinate_token<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    line: &str,
) -> Result<i8, ChessErrors> {
    tokens
        .next()
        .and_then(|token| token.parse::<i8>().ok())
        .ok_or_else(|| ChessErrors::MalformedCoordinate(line.trim().to_owned()))
}
