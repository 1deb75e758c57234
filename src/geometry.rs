//! Pure geometric relations between two board locations.
//!
//! These are the primitives every piece rule is built from. None of them
//! touch board occupancy and none of them range-check their inputs.

use crate::board_location::BoardLocation;

#[inline]
pub fn horizontal_distance(a: BoardLocation, b: BoardLocation) -> i8 {
    (a.0 - b.0).abs()
}

#[inline]
pub fn vertical_distance(a: BoardLocation, b: BoardLocation) -> i8 {
    (a.1 - b.1).abs()
}

#[inline]
pub fn manhattan_distance(a: BoardLocation, b: BoardLocation) -> i8 {
    horizontal_distance(a, b) + vertical_distance(a, b)
}

/// Same rank.
#[inline]
pub fn is_horizontal(a: BoardLocation, b: BoardLocation) -> bool {
    a.1 == b.1
}

/// Same file.
#[inline]
pub fn is_vertical(a: BoardLocation, b: BoardLocation) -> bool {
    a.0 == b.0
}

#[inline]
pub fn is_orthogonal(a: BoardLocation, b: BoardLocation) -> bool {
    is_horizontal(a, b) || is_vertical(a, b)
}

/// Equal horizontal and vertical distance. A zero-length move is diagonal
/// under this definition.
#[inline]
pub fn is_diagonal(a: BoardLocation, b: BoardLocation) -> bool {
    horizontal_distance(a, b) == vertical_distance(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances_sum_to_manhattan_and_are_symmetric() {
        let cases = [((0, 0), (3, 5)), ((7, 2), (1, 2)), ((4, 4), (4, 4)), ((6, 1), (0, 7))];
        for (a, b) in cases {
            assert_eq!(
                manhattan_distance(a, b),
                horizontal_distance(a, b) + vertical_distance(a, b)
            );
            assert_eq!(manhattan_distance(a, b), manhattan_distance(b, a));
            assert_eq!(horizontal_distance(a, b), horizontal_distance(b, a));
            assert_eq!(vertical_distance(a, b), vertical_distance(b, a));
        }
    }

    #[test]
    fn zero_length_move_is_both_orthogonal_and_diagonal() {
        for file in 0..8 {
            for rank in 0..8 {
                let a = (file, rank);
                assert!(is_orthogonal(a, a));
                assert!(is_diagonal(a, a));
            }
        }
    }

    #[test]
    fn alignment_predicates() {
        assert!(is_horizontal((0, 3), (7, 3)));
        assert!(!is_horizontal((0, 3), (7, 4)));
        assert!(is_vertical((2, 0), (2, 6)));
        assert!(!is_vertical((2, 0), (3, 6)));
        assert!(is_orthogonal((2, 0), (2, 6)));
        assert!(is_orthogonal((0, 3), (7, 3)));
        assert!(!is_orthogonal((0, 0), (1, 2)));
        assert!(is_diagonal((1, 1), (4, 4)));
        assert!(is_diagonal((4, 1), (1, 4)));
        assert!(!is_diagonal((1, 1), (4, 5)));
    }
}
