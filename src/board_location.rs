/// A square on the board as a `(file, rank)` pair, zero-indexed.
///
/// Coordinates are conventionally `0..=7` on both axes but are never
/// range-checked here; the board panics when an out-of-range location is
/// used to index it.
pub type BoardLocation = (i8, i8);
