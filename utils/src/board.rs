use cozy_chess::{Board, Color, Piece, Square};

/// Rank index (0..=7) of `sq` as seen from `color`'s side of the board.
#[inline(always)]
pub fn relative_rank(color: Color, sq: Square) -> usize {
    match color {
        Color::White => sq.rank() as usize,
        Color::Black => 7 - sq.rank() as usize,
    }
}

/// Mirror `sq` vertically for Black; identity for White.
#[inline(always)]
pub fn relative_square(color: Color, sq: Square) -> Square {
    match color {
        Color::White => sq,
        Color::Black => Square::index(sq as usize ^ 56),
    }
}

/// 1.0 with all non-pawn material on the board, 0.0 with none.
#[inline(always)]
pub fn game_phase(board: &Board) -> f32 {
    let knights = board.pieces(Piece::Knight).len();
    let bishops = board.pieces(Piece::Bishop).len();
    let rooks = board.pieces(Piece::Rook).len();
    let queens = board.pieces(Piece::Queen).len();

    let score = knights + bishops + 2 * rooks + 4 * queens;

    (score.min(24) as f32) / 24.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_rank() {
        assert_eq!(relative_rank(Color::White, Square::E2), 1);
        assert_eq!(relative_rank(Color::Black, Square::E7), 1);
        assert_eq!(relative_rank(Color::Black, Square::E1), 7);
    }

    #[test]
    fn test_relative_square() {
        assert_eq!(relative_square(Color::White, Square::G1), Square::G1);
        assert_eq!(relative_square(Color::Black, Square::G1), Square::G8);
        assert_eq!(relative_square(Color::Black, Square::C1), Square::C8);
    }

    #[test]
    fn test_game_phase_starting_position() {
        assert!((game_phase(&Board::default()) - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_game_phase_endgame() {
        let board: Board = "k7/8/8/8/8/8/8/KR6 w - - 0 1".parse().unwrap();
        assert!(game_phase(&board) < 0.2);
    }
}
