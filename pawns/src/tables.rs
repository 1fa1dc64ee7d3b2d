// Calibrated evaluation constants. Indexing follows the comment above each table.

use evaluation::Score;

const fn s(mg: i16, eg: i16) -> Score {
    Score::new(mg, eg)
}

// Isolated pawn penalty by [opposed]
pub(crate) const ISOLATED: [Score; 2] = [s(45, 40), s(30, 27)];

// Backward pawn penalty by [opposed]
pub(crate) const BACKWARD: [Score; 2] = [s(56, 33), s(41, 19)];

// Penalty for pawns that are neither isolated, backward nor connected
pub(crate) const UNSUPPORTED: Score = s(17, 8);

pub(crate) const DOUBLED: Score = s(18, 38);

// Lever bonus by [relative rank]
pub(crate) const LEVER: [Score; 8] = [
    s(0, 0),
    s(0, 0),
    s(0, 0),
    s(0, 0),
    s(17, 16),
    s(33, 32),
    s(0, 0),
    s(0, 0),
];

// Seed for the connected pawn bonus, by [relative rank]
pub(crate) const CONNECTED_SEED: [i16; 8] = [0, 8, 19, 13, 71, 94, 169, 324];

// Weakness of our pawn shelter in front of the king by [distance from edge][rank].
// Rank 0 means no pawn of ours on the file at or ahead of the king.
#[rustfmt::skip]
pub(crate) const SHELTER_WEAKNESS: [[i16; 8]; 4] = [
    [ 97, 21, 26, 51, 87,  89,  99, 0],
    [120,  0, 28, 76, 88, 103, 104, 0],
    [101,  7, 54, 78, 77,  92, 101, 0],
    [ 80, 11, 44, 68, 87,  90, 119, 0],
];

// Danger of enemy pawns moving toward our king by [block state][distance from edge][rank]
#[rustfmt::skip]
pub(crate) const STORM_DANGER: [[[i16; 8]; 4]; 4] = [
    // No friendly pawn
    [ [ 0,   67,  134, 38, 32, 0, 0, 0],
      [ 0,   57,  139, 37, 22, 0, 0, 0],
      [ 0,   43,  115, 43, 27, 0, 0, 0],
      [ 0,   68,  124, 57, 32, 0, 0, 0] ],
    // Unblocked
    [ [20,   43,  100, 56, 20, 0, 0, 0],
      [23,   20,   98, 40, 15, 0, 0, 0],
      [23,   39,  103, 36, 18, 0, 0, 0],
      [28,   19,  108, 42, 26, 0, 0, 0] ],
    // Blocked by pawn
    [ [ 0,    0,   75, 14,  2, 0, 0, 0],
      [ 0,    0,  150, 30,  4, 0, 0, 0],
      [ 0,    0,  160, 22,  5, 0, 0, 0],
      [ 0,    0,  166, 24, 13, 0, 0, 0] ],
    // Blocked by king
    [ [ 0, -283, -281, 57, 31, 0, 0, 0],
      [ 0,   58,  141, 39, 18, 0, 0, 0],
      [ 0,   65,  142, 48, 32, 0, 0, 0],
      [ 0,   60,  126, 51, 19, 0, 0, 0] ],
];

// Start position with all pawns in front of the king and no enemy pawn on the horizon.
pub(crate) const MAX_SAFETY_BONUS: i16 = 258;

// Endgame penalty per square between the king and its closest pawn
pub(crate) const KING_PAWN_DISTANCE_PENALTY: i16 = 16;
