use cozy_chess::{get_pawn_attacks, BitBoard, Board, Color, Piece, Square};
use evaluation::Score;
use utils::masks::{
    adjacent_files, forward_file, passed_pawn_mask, pawn_attack_span, DARK_SQUARES, LIGHT_SQUARES,
};
use utils::{backmost_square, pawn_attacks_bb, relative_rank, shift_up};

use crate::connected::connected_bonus;
use crate::entry::PawnEntry;
use crate::tables::{BACKWARD, DOUBLED, ISOLATED, LEVER, UNSUPPORTED};

/// Structural facts about a single pawn.
///
/// <https://www.chessprogramming.org/Pawn_Structure>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PawnFlags {
    /// An enemy pawn stands somewhere ahead on the same file.
    pub opposed: bool,
    /// Enemy pawns ahead on this or an adjacent file.
    pub stoppers: BitBoard,
    /// The pawn attacks at least one enemy pawn.
    pub lever: bool,
    /// A friendly pawn stands directly in front.
    pub doubled: bool,
    /// Friendly pawns on adjacent files.
    pub neighbours: BitBoard,
    /// Neighbours on the same rank.
    pub phalanx: BitBoard,
    /// Neighbours one rank behind, defending this pawn.
    pub supported: BitBoard,
    pub backward: bool,
    pub passed: bool,
}

impl PawnFlags {
    #[inline(always)]
    pub fn isolated(&self) -> bool {
        self.neighbours.is_empty()
    }

    #[inline(always)]
    pub fn connected(&self) -> bool {
        !(self.supported | self.phalanx).is_empty()
    }
}

/// Classifies the pawn of `color` on `sq` against both sides' pawns.
pub fn classify(color: Color, sq: Square, our_pawns: BitBoard, their_pawns: BitBoard) -> PawnFlags {
    let file = sq.file();
    let rank_bb = sq.rank().bitboard();

    let opposed = !(their_pawns & forward_file(color, sq)).is_empty();
    let stoppers = their_pawns & passed_pawn_mask(color, sq);
    let lever = !(their_pawns & get_pawn_attacks(sq, color)).is_empty();
    let doubled = !(our_pawns & shift_up(color, sq.bitboard())).is_empty();
    let neighbours = our_pawns & adjacent_files(file);
    let phalanx = neighbours & rank_bb;
    let supported = neighbours & shift_up(!color, rank_bb);

    // A pawn is backward when it is behind all pawns of the same color on the
    // adjacent files and cannot be safely advanced.
    let backward = if neighbours.is_empty() || lever || relative_rank(color, sq) >= 4 {
        false
    } else {
        backmost_square(color, neighbours | stoppers).is_some_and(|target| {
            // Either a stopper sits on the target rank, or one on an adjacent
            // file guards the approach to it.
            let b = target.rank().bitboard();
            !((b | shift_up(color, b & adjacent_files(file))) & stoppers).is_empty()
        })
    };

    let passed = stoppers.is_empty() && (our_pawns & forward_file(color, sq)).is_empty();

    PawnFlags {
        opposed,
        stoppers,
        lever,
        doubled,
        neighbours,
        phalanx,
        supported,
        backward,
        passed,
    }
}

/// Scores `color`'s pawn structure from its own point of view and fills
/// that side's slot of `entry`.
pub(crate) fn evaluate(board: &Board, entry: &mut PawnEntry, color: Color) -> Score {
    let us = color as usize;
    let our_pawns = board.colored_pieces(color, Piece::Pawn);
    let their_pawns = board.colored_pieces(!color, Piece::Pawn);

    entry.passed_pawns[us] = BitBoard::EMPTY;
    entry.pawn_attacks_span[us] = BitBoard::EMPTY;
    entry.king_squares[us] = None;
    entry.semiopen_files[us] = 0xFF;
    entry.pawn_attacks[us] = pawn_attacks_bb(color, our_pawns);
    entry.pawns_on_squares[us] = [
        (our_pawns & LIGHT_SQUARES).len() as u8,
        (our_pawns & DARK_SQUARES).len() as u8,
    ];

    let mut score = Score::ZERO;

    for sq in our_pawns {
        debug_assert_eq!(board.piece_on(sq), Some(Piece::Pawn));
        debug_assert_eq!(board.color_on(sq), Some(color));

        entry.semiopen_files[us] &= !(1u8 << sq.file() as u8);
        entry.pawn_attacks_span[us] |= pawn_attack_span(color, sq);

        let flags = classify(color, sq, our_pawns, their_pawns);
        let rank = relative_rank(color, sq);

        // Passed pawns are only flagged here; their bonus needs full attack info.
        if flags.passed {
            entry.passed_pawns[us] |= sq.bitboard();
        }

        if flags.isolated() {
            score -= ISOLATED[flags.opposed as usize];
        } else if flags.backward {
            score -= BACKWARD[flags.opposed as usize];
        } else if !flags.connected() {
            score -= UNSUPPORTED;
        }

        if flags.connected() {
            score += connected_bonus(
                flags.opposed,
                !flags.phalanx.is_empty(),
                flags.supported.len() > 1,
                rank,
            );
        }

        if flags.doubled {
            score -= DOUBLED;
        }

        if flags.lever {
            score += LEVER[rank];
        }
    }

    score
}
