use cozy_chess::{BitBoard, Color, Square};

const NOT_FILE_A: u64 = !0x0101_0101_0101_0101;
const NOT_FILE_H: u64 = !0x8080_8080_8080_8080;

#[inline(always)]
fn lsb(bb: BitBoard) -> Option<Square> {
    bb.next_square()
}

#[inline(always)]
fn msb(bb: BitBoard) -> Option<Square> {
    if bb.is_empty() {
        None
    } else {
        Some(Square::index(63 - bb.0.leading_zeros() as usize))
    }
}

/// The square in `bb` closest to `color`'s own back rank.
#[inline(always)]
pub fn backmost_square(color: Color, bb: BitBoard) -> Option<Square> {
    match color {
        Color::White => lsb(bb),
        Color::Black => msb(bb),
    }
}

/// The square in `bb` furthest advanced from `color`'s point of view.
#[inline(always)]
pub fn frontmost_square(color: Color, bb: BitBoard) -> Option<Square> {
    match color {
        Color::White => msb(bb),
        Color::Black => lsb(bb),
    }
}

/// Shift every square one rank towards the opponent.
#[inline(always)]
pub fn shift_up(color: Color, bb: BitBoard) -> BitBoard {
    match color {
        Color::White => BitBoard(bb.0 << 8),
        Color::Black => BitBoard(bb.0 >> 8),
    }
}

/// Squares attacked by a set of pawns of `color`.
#[inline(always)]
pub fn pawn_attacks_bb(color: Color, pawns: BitBoard) -> BitBoard {
    let bits = pawns.0;
    match color {
        Color::White => BitBoard(((bits & NOT_FILE_A) << 7) | ((bits & NOT_FILE_H) << 9)),
        Color::Black => BitBoard(((bits & NOT_FILE_H) >> 7) | ((bits & NOT_FILE_A) >> 9)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cozy_chess::get_pawn_attacks;

    fn bb(squares: &[Square]) -> BitBoard {
        squares
            .iter()
            .fold(BitBoard::EMPTY, |acc, sq| acc | sq.bitboard())
    }

    #[test]
    fn test_backmost_and_frontmost() {
        let pawns = bb(&[Square::C2, Square::C5, Square::F3]);
        assert_eq!(backmost_square(Color::White, pawns), Some(Square::C2));
        assert_eq!(frontmost_square(Color::White, pawns), Some(Square::C5));
        assert_eq!(backmost_square(Color::Black, pawns), Some(Square::C5));
        assert_eq!(frontmost_square(Color::Black, pawns), Some(Square::C2));
    }

    #[test]
    fn test_empty_bitboard_has_no_extreme_square() {
        assert_eq!(backmost_square(Color::White, BitBoard::EMPTY), None);
        assert_eq!(frontmost_square(Color::Black, BitBoard::EMPTY), None);
    }

    #[test]
    fn test_shift_up() {
        assert_eq!(shift_up(Color::White, Square::E4.bitboard()), Square::E5.bitboard());
        assert_eq!(shift_up(Color::Black, Square::E4.bitboard()), Square::E3.bitboard());
        assert!(shift_up(Color::White, Square::E8.bitboard()).is_empty());
    }

    #[test]
    fn test_pawn_attacks_bb_matches_single_square_attacks() {
        let pawns = bb(&[Square::A2, Square::D4, Square::H7]);
        for color in Color::ALL {
            let expected = pawns
                .into_iter()
                .fold(BitBoard::EMPTY, |acc, sq| acc | get_pawn_attacks(sq, color));
            assert_eq!(pawn_attacks_bb(color, pawns), expected);
        }
    }
}
