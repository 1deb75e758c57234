/// Represents which of the two sides a piece belongs to.
///
/// Light is laid out on ranks 6-7 and its pawns advance toward decreasing
/// rank; Dark is laid out on ranks 0-1 and advances toward increasing rank.
/// The names are labels for the two glyph sets, nothing more: there is no
/// turn order and no team-aware capture rule anywhere in the crate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceTeam {
    Light,
    Dark,
}
