//! Precomputed bitboard masks for pawn structure and king safety.
//!
//! Every table is built at compile time. Indexing is `[color][square]` with
//! `Color::White as usize == 0`, or `[square][distance]` for distance rings.

use cozy_chess::{BitBoard, Color, File, Rank, Square};

/// Dark squares (a1, c1, ..., h8).
pub const DARK_SQUARES: BitBoard = BitBoard(0xAA55_AA55_AA55_AA55);

/// Light squares (b1, d1, ..., g8).
pub const LIGHT_SQUARES: BitBoard = BitBoard(!0xAA55_AA55_AA55_AA55);

/// Squares strictly ahead of `sq` on its own file.
#[inline(always)]
pub fn forward_file(color: Color, sq: Square) -> BitBoard {
    FORWARD_FILE[color as usize][sq as usize]
}

/// Squares strictly ahead of `sq` on the adjacent files: everything a pawn on
/// `sq` could ever attack while advancing.
#[inline(always)]
pub fn pawn_attack_span(color: Color, sq: Square) -> BitBoard {
    PAWN_ATTACK_SPAN[color as usize][sq as usize]
}

/// Squares that must be free of enemy pawns for a pawn on `sq` to be passed.
#[inline(always)]
pub fn passed_pawn_mask(color: Color, sq: Square) -> BitBoard {
    PASSED_PAWN_MASKS[color as usize][sq as usize]
}

/// All squares on ranks strictly ahead of `rank` from `color`'s point of view.
#[inline(always)]
pub fn in_front_ranks(color: Color, rank: Rank) -> BitBoard {
    IN_FRONT_RANKS[color as usize][rank as usize]
}

/// Squares at Chebyshev distance exactly `d + 1` from `sq`.
#[inline(always)]
pub fn distance_ring(sq: Square, d: usize) -> BitBoard {
    DISTANCE_RINGS[sq as usize][d]
}

/// Files on either side of `file`, as a bitboard.
#[inline(always)]
pub fn adjacent_files(file: File) -> BitBoard {
    file.adjacent()
}

const FILE_A_BITS: u64 = 0x0101_0101_0101_0101;

const fn adjacent_files_bits(file_idx: i8) -> u64 {
    let mut mask = 0u64;
    if file_idx > 0 {
        mask |= FILE_A_BITS << (file_idx - 1);
    }
    if file_idx < 7 {
        mask |= FILE_A_BITS << (file_idx + 1);
    }
    mask
}

/// Every square on ranks strictly in front of `rank_idx`, walking by `step`.
const fn ranks_ahead_bits(mut rank_idx: i8, step: i8) -> u64 {
    let mut mask = 0u64;
    rank_idx += step;
    while rank_idx >= 0 && rank_idx < 8 {
        mask |= 0xFFu64 << (rank_idx as u64 * 8);
        rank_idx += step;
    }
    mask
}

const fn step_for(color_idx: usize) -> i8 {
    if color_idx == 0 {
        1
    } else {
        -1
    }
}

pub const IN_FRONT_RANKS: [[BitBoard; 8]; 2] = {
    let mut table = [[BitBoard::EMPTY; 8]; 2];
    let mut color_idx = 0;
    while color_idx < 2 {
        let mut rank_idx = 0;
        while rank_idx < 8 {
            table[color_idx][rank_idx] =
                BitBoard(ranks_ahead_bits(rank_idx as i8, step_for(color_idx)));
            rank_idx += 1;
        }
        color_idx += 1;
    }
    table
};

pub const FORWARD_FILE: [[BitBoard; 64]; 2] = {
    let mut table = [[BitBoard::EMPTY; 64]; 2];
    let mut color_idx = 0;
    while color_idx < 2 {
        let mut square_idx = 0;
        while square_idx < 64 {
            let file_idx = (square_idx % 8) as i8;
            let rank_idx = (square_idx / 8) as i8;
            let ahead = ranks_ahead_bits(rank_idx, step_for(color_idx));
            table[color_idx][square_idx] = BitBoard(ahead & (FILE_A_BITS << file_idx));
            square_idx += 1;
        }
        color_idx += 1;
    }
    table
};

pub const PAWN_ATTACK_SPAN: [[BitBoard; 64]; 2] = {
    let mut table = [[BitBoard::EMPTY; 64]; 2];
    let mut color_idx = 0;
    while color_idx < 2 {
        let mut square_idx = 0;
        while square_idx < 64 {
            let file_idx = (square_idx % 8) as i8;
            let rank_idx = (square_idx / 8) as i8;
            let ahead = ranks_ahead_bits(rank_idx, step_for(color_idx));
            table[color_idx][square_idx] = BitBoard(ahead & adjacent_files_bits(file_idx));
            square_idx += 1;
        }
        color_idx += 1;
    }
    table
};

pub const PASSED_PAWN_MASKS: [[BitBoard; 64]; 2] = {
    let mut table = [[BitBoard::EMPTY; 64]; 2];
    let mut color_idx = 0;
    while color_idx < 2 {
        let mut square_idx = 0;
        while square_idx < 64 {
            table[color_idx][square_idx] = BitBoard(
                FORWARD_FILE[color_idx][square_idx].0 | PAWN_ATTACK_SPAN[color_idx][square_idx].0,
            );
            square_idx += 1;
        }
        color_idx += 1;
    }
    table
};

pub const DISTANCE_RINGS: [[BitBoard; 8]; 64] = {
    let mut rings = [[BitBoard::EMPTY; 8]; 64];
    let mut from = 0;
    while from < 64 {
        let from_file = (from % 8) as i8;
        let from_rank = (from / 8) as i8;

        let mut to = 0;
        while to < 64 {
            let df = ((to % 8) as i8 - from_file).abs();
            let dr = ((to / 8) as i8 - from_rank).abs();
            let distance = if df > dr { df } else { dr };
            if distance > 0 {
                let d = distance as usize - 1;
                rings[from][d] = BitBoard(rings[from][d].0 | (1u64 << to));
            }
            to += 1;
        }
        from += 1;
    }
    rings
};
