use cozy_chess::{BitBoard, Board, Color, File, Piece, Square};
use evaluation::Score;
use log::trace;
use utils::masks::{distance_ring, in_front_ranks};
use utils::{backmost_square, frontmost_square, relative_rank, relative_square, CastlingRights};

use crate::entry::PawnEntry;
use crate::tables::{KING_PAWN_DISTANCE_PENALTY, MAX_SAFETY_BONUS, SHELTER_WEAKNESS, STORM_DANGER};

/// How an enemy pawn storming a file is held up. Indexes `STORM_DANGER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    NoFriendlyPawn = 0,
    Unblocked = 1,
    BlockedByPawn = 2,
    BlockedByKing = 3,
}

/// Shelter and storm value for a king of `color` on `ksq`, looking at the
/// king's file and its two neighbours (clamped to b..g). Higher is safer.
///
/// <https://www.chessprogramming.org/King_Safety#Pawn_Shield>
pub fn shelter_storm(board: &Board, color: Color, ksq: Square) -> i16 {
    let them = !color;

    // Pawns behind the king do not shelter it
    let pawns = board.pieces(Piece::Pawn) & (in_front_ranks(color, ksq.rank()) | ksq.rank().bitboard());
    let our_pawns = pawns & board.colors(color);
    let their_pawns = pawns & board.colors(them);

    let king_file = ksq.file() as usize;
    let king_rank = relative_rank(color, ksq);
    let center = king_file.clamp(File::B as usize, File::G as usize);

    let mut safety = MAX_SAFETY_BONUS;

    for f in center - 1..=center + 1 {
        let file_bb = File::index(f).bitboard();
        let edge_distance = f.min(File::H as usize - f);

        let rk_us = rank_of_extreme(color, backmost_square(color, our_pawns & file_bb));
        let rk_them = rank_of_extreme(color, frontmost_square(them, their_pawns & file_bb));

        let state = if f == king_file && rk_them == king_rank + 1 {
            BlockState::BlockedByKing
        } else if rk_us == 0 {
            BlockState::NoFriendlyPawn
        } else if rk_them == rk_us + 1 {
            BlockState::BlockedByPawn
        } else {
            BlockState::Unblocked
        };

        safety -= SHELTER_WEAKNESS[edge_distance][rk_us]
            + STORM_DANGER[state as usize][edge_distance][rk_them];
    }

    safety
}

// Relative rank of `sq` for `color`, 0 when there is no pawn on the file.
#[inline(always)]
fn rank_of_extreme(color: Color, sq: Option<Square>) -> usize {
    sq.map_or(0, |sq| relative_rank(color, sq))
}

/// Chebyshev distance from `ksq` to the closest pawn in `pawns`, 0 if none.
fn king_pawn_distance(ksq: Square, pawns: BitBoard) -> i16 {
    if pawns.is_empty() {
        return 0;
    }

    (0..7)
        .find(|&d| !(distance_ring(ksq, d) & pawns).is_empty())
        .map_or(0, |d| d as i16 + 1)
}

/// Recomputes king safety for `color` with its king on `ksq`, recording the
/// square and castling rights it was computed for in `entry`.
///
/// When castling is still possible, the shelter on the castled square counts
/// if it is better than the current one.
pub fn do_king_safety(entry: &mut PawnEntry, board: &Board, color: Color, ksq: Square) -> Score {
    let us = color as usize;
    let rights = CastlingRights::of(board, color);

    entry.king_squares[us] = Some(ksq);
    entry.castling_rights[us] = rights;

    let distance = king_pawn_distance(ksq, board.colored_pieces(color, Piece::Pawn));

    let mut bonus = shelter_storm(board, color, ksq);

    if rights.kingside() {
        bonus = bonus.max(shelter_storm(board, color, relative_square(color, Square::G1)));
    }

    if rights.queenside() {
        bonus = bonus.max(shelter_storm(board, color, relative_square(color, Square::C1)));
    }

    let score = Score::new(bonus, -KING_PAWN_DISTANCE_PENALTY * distance);
    entry.king_safety[us] = score;

    trace!("King safety for {:?} on {}: {}", color, ksq, score);

    score
}

#[inline(always)]
pub fn white_king_safety(entry: &mut PawnEntry, board: &Board, ksq: Square) -> Score {
    do_king_safety(entry, board, Color::White, ksq)
}

#[inline(always)]
pub fn black_king_safety(entry: &mut PawnEntry, board: &Board, ksq: Square) -> Score {
    do_king_safety(entry, board, Color::Black, ksq)
}
