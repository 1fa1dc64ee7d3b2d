use cozy_chess::{BitBoard, Board, Color, File, Square};
use evaluation::Score;
use log::trace;
use utils::masks::DARK_SQUARES;
use utils::CastlingRights;

use crate::eval_king::do_king_safety;
use crate::eval_pawns;

/// Everything known about one pawn structure, shared by all positions with
/// the same structural key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PawnEntry {
    pub(crate) key: u64,
    pub(crate) filled: bool,
    pub(crate) score: Score,
    pub(crate) pawn_attacks: [BitBoard; Color::NUM],
    pub(crate) pawn_attacks_span: [BitBoard; Color::NUM],
    pub(crate) passed_pawns: [BitBoard; Color::NUM],
    // Bit per file, set when the side has no pawn there
    pub(crate) semiopen_files: [u8; Color::NUM],
    // [color][light, dark]
    pub(crate) pawns_on_squares: [[u8; 2]; Color::NUM],
    pub(crate) king_squares: [Option<Square>; Color::NUM],
    pub(crate) castling_rights: [CastlingRights; Color::NUM],
    pub(crate) king_safety: [Score; Color::NUM],
    pub(crate) asymmetry: u8,
    pub(crate) open_files: u8,
}

impl Default for PawnEntry {
    fn default() -> Self {
        Self {
            key: 0,
            filled: false,
            score: Score::ZERO,
            pawn_attacks: [BitBoard::EMPTY; Color::NUM],
            pawn_attacks_span: [BitBoard::EMPTY; Color::NUM],
            passed_pawns: [BitBoard::EMPTY; Color::NUM],
            semiopen_files: [0xFF; Color::NUM],
            pawns_on_squares: [[0; 2]; Color::NUM],
            king_squares: [None; Color::NUM],
            castling_rights: [CastlingRights::NONE; Color::NUM],
            king_safety: [Score::ZERO; Color::NUM],
            asymmetry: 0,
            open_files: 0,
        }
    }
}

impl PawnEntry {
    /// Evaluates both sides' pawns on `board` and stores the result under `key`.
    pub fn fill(&mut self, board: &Board, key: u64) {
        self.key = key;
        self.filled = true;

        let white = eval_pawns::evaluate(board, self, Color::White);
        let black = eval_pawns::evaluate(board, self, Color::Black);
        self.score = white - black;

        let [white_semiopen, black_semiopen] = self.semiopen_files;
        self.asymmetry = (white_semiopen ^ black_semiopen).count_ones() as u8;
        self.open_files = (white_semiopen & black_semiopen).count_ones() as u8;

        trace!(
            "Filled pawn entry {:016x}: score {}, asymmetry {}, open files {}",
            key,
            self.score,
            self.asymmetry,
            self.open_files
        );
    }

    #[inline(always)]
    pub fn matches(&self, key: u64) -> bool {
        self.filled && self.key == key
    }

    #[inline(always)]
    pub fn key(&self) -> u64 {
        self.key
    }

    /// White's structural score minus Black's.
    #[inline(always)]
    pub fn score(&self) -> Score {
        self.score
    }

    #[inline(always)]
    pub fn pawn_attacks(&self, color: Color) -> BitBoard {
        self.pawn_attacks[color as usize]
    }

    #[inline(always)]
    pub fn pawn_attacks_span(&self, color: Color) -> BitBoard {
        self.pawn_attacks_span[color as usize]
    }

    #[inline(always)]
    pub fn passed_pawns(&self, color: Color) -> BitBoard {
        self.passed_pawns[color as usize]
    }

    /// Number of files that are half-open for exactly one side.
    #[inline(always)]
    pub fn asymmetry(&self) -> u8 {
        self.asymmetry
    }

    /// Number of files without pawns of either side.
    #[inline(always)]
    pub fn open_files(&self) -> u8 {
        self.open_files
    }

    #[inline(always)]
    pub fn semiopen_files(&self, color: Color) -> u8 {
        self.semiopen_files[color as usize]
    }

    #[inline(always)]
    pub fn semiopen_file(&self, color: Color, file: File) -> bool {
        self.semiopen_files[color as usize] & (1 << file as u8) != 0
    }

    /// Semi-open files strictly to the left (towards the a-file) or strictly
    /// to the right of `file`.
    #[inline(always)]
    pub fn semiopen_side(&self, color: Color, file: File, left_side: bool) -> u8 {
        let f = file as u32;
        let mask = if left_side {
            (1u32 << f) - 1
        } else {
            !((1u32 << (f + 1)) - 1)
        };
        self.semiopen_files[color as usize] & mask as u8
    }

    /// Pawns of `color` standing on squares of the same shade as `sq`.
    #[inline(always)]
    pub fn pawns_on_same_color_squares(&self, color: Color, sq: Square) -> u8 {
        self.pawns_on_squares[color as usize][DARK_SQUARES.has(sq) as usize]
    }

    /// The king square the cached king safety was computed for.
    #[inline(always)]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.king_squares[color as usize]
    }

    #[inline(always)]
    pub fn castling_rights(&self, color: Color) -> CastlingRights {
        self.castling_rights[color as usize]
    }

    /// King shelter and pawn proximity for `color`'s king on `board`.
    ///
    /// Reuses the previous result while the king square and castling rights
    /// are unchanged; otherwise recomputes it.
    pub fn king_safety(&mut self, board: &Board, color: Color) -> Score {
        let us = color as usize;
        let ksq = board.king(color);

        if self.king_squares[us] == Some(ksq)
            && self.castling_rights[us] == CastlingRights::of(board, color)
        {
            return self.king_safety[us];
        }

        do_king_safety(self, board, color, ksq)
    }
}
