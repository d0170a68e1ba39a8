//! Knight move geometry.

use crate::{BoardSize, Position};

/// The eight `(d_row, d_col)` knight moves.
///
/// The set is closed under negation, so "A attacks B" implies "B attacks A".
pub const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Returns the in-bounds cells a knight on `pos` reaches, in [`KNIGHT_OFFSETS`] order.
///
/// # Examples
///
/// ```
/// use knightcover_core::{BoardSize, Position, knight};
///
/// let size = BoardSize::CHESSBOARD;
/// assert_eq!(knight::targets(Position::new(0, 0), size).count(), 2);
/// assert_eq!(knight::targets(Position::new(3, 3), size).count(), 8);
///
/// let tiny = BoardSize::new(2, 2)?;
/// assert_eq!(knight::targets(Position::new(0, 0), tiny).count(), 0);
/// # Ok::<(), knightcover_core::BoardSizeError>(())
/// ```
pub fn targets(pos: Position, size: BoardSize) -> impl Iterator<Item = Position> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| pos.offset(d_row, d_col, size))
}

/// Returns `true` if a knight on `a` attacks `b`.
#[must_use]
pub fn is_knight_move(a: Position, b: Position) -> bool {
    let d_row = a.row().abs_diff(b.row());
    let d_col = a.col().abs_diff(b.col());
    matches!((d_row, d_col), (1, 2) | (2, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_symmetric() {
        for (d_row, d_col) in KNIGHT_OFFSETS {
            assert!(KNIGHT_OFFSETS.contains(&(-d_row, -d_col)));
            assert_eq!(d_row.abs() + d_col.abs(), 3);
            assert_ne!(d_row.abs(), d_col.abs());
        }
    }

    #[test]
    fn test_targets_match_is_knight_move() {
        let size = BoardSize::new(5, 6).unwrap();
        for from in size.positions() {
            let targets: Vec<_> = targets(from, size).collect();
            for to in size.positions() {
                assert_eq!(targets.contains(&to), is_knight_move(from, to), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn test_narrow_boards_have_no_moves() {
        let size = BoardSize::new(1, 8).unwrap();
        assert!(size.positions().all(|pos| targets(pos, size).next().is_none()));
    }
}
