use std::hash::{BuildHasher, Hash, Hasher};

use ahash::RandomState;
use cozy_chess::{Board, Color, Piece};

use crate::CastlingRights;

// Fixed seeds keep keys stable across runs and processes.
const KEY_SEEDS: [u64; 4] = [
    0x243F_6A88_85A3_08D3,
    0x1319_8A2E_0370_7344,
    0xA409_3822_299F_31D0,
    0x082E_FA98_EC4E_6C89,
];

/// Structural key over both sides' pawns and castling rights.
///
/// Positions that agree on these share a pawn-structure evaluation.
pub fn structural_key(board: &Board) -> u64 {
    let state = RandomState::with_seeds(KEY_SEEDS[0], KEY_SEEDS[1], KEY_SEEDS[2], KEY_SEEDS[3]);
    let mut hasher = state.build_hasher();

    for color in Color::ALL {
        board.colored_pieces(color, Piece::Pawn).0.hash(&mut hasher);
        CastlingRights::of(board, color).hash(&mut hasher);
    }

    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_ignores_pieces_other_than_pawns() {
        let a: Board = "4k3/pp6/8/8/8/8/PP6/4K3 w - - 0 1".parse().unwrap();
        let b: Board = "3qk3/pp6/8/8/8/2N5/PP6/4K3 b - - 0 1".parse().unwrap();
        assert_eq!(structural_key(&a), structural_key(&b));
    }

    #[test]
    fn test_key_depends_on_pawns() {
        let a: Board = "4k3/pp6/8/8/8/8/PP6/4K3 w - - 0 1".parse().unwrap();
        let b: Board = "4k3/pp6/8/8/8/P7/1P6/4K3 w - - 0 1".parse().unwrap();
        assert_ne!(structural_key(&a), structural_key(&b));
    }

    #[test]
    fn test_key_depends_on_castling_rights() {
        let a: Board = "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1".parse().unwrap();
        let b: Board = "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w Qkq - 0 1".parse().unwrap();
        assert_ne!(structural_key(&a), structural_key(&b));
    }

    #[test]
    fn test_key_is_deterministic() {
        let board = Board::default();
        assert_eq!(structural_key(&board), structural_key(&board));
    }
}
