/// Represents all possible error types that can occur in the board crate.
/// Used throughout the codebase for error handling and reporting.
///
/// Illegal-but-well-formed moves are not errors; the match loop silently
/// discards them. Both variants here are fatal at the top level.
#[derive(Debug)]
pub enum ChessErrors {
    /// A coordinate line was expected but the input stream ended or failed.
    InputUnavailable,
    /// A coordinate line did not contain two integers. Carries the line.
    MalformedCoordinate(String),
    /// The input or output stream reported an error mid-session.
    Io(std::io::Error),
}
