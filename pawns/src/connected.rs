use std::sync::OnceLock;

use evaluation::Score;

use crate::tables::CONNECTED_SEED;

/// Connected pawn bonus by [opposed][phalanx][twice supported][relative rank].
pub(crate) type ConnectedTable = [[[[Score; 8]; 2]; 2]; 2];

static CONNECTED: OnceLock<ConnectedTable> = OnceLock::new();

/// Builds the connected pawn table. Safe to call more than once; only the
/// first call does any work, and later calls observe the finished table.
pub fn init() {
    table();
}

#[inline(always)]
fn table() -> &'static ConnectedTable {
    CONNECTED.get_or_init(|| build(&CONNECTED_SEED))
}

#[inline(always)]
pub fn connected_bonus(opposed: bool, phalanx: bool, twice_supported: bool, rank: usize) -> Score {
    table()[opposed as usize][phalanx as usize][twice_supported as usize][rank]
}

pub(crate) fn build(seed: &[i16; 8]) -> ConnectedTable {
    let mut table = [[[[Score::ZERO; 8]; 2]; 2]; 2];

    for (opposed, by_opposed) in table.iter_mut().enumerate() {
        for (phalanx, by_phalanx) in by_opposed.iter_mut().enumerate() {
            for (apex, by_rank) in by_phalanx.iter_mut().enumerate() {
                for rank in 1..7 {
                    let here = seed[rank] as i32;
                    let next = seed[rank + 1] as i32;

                    // Phalanx pawns sit halfway to the next rank's value
                    let mut v = here + if phalanx == 1 { (next - here) / 2 } else { 0 };
                    v >>= opposed;
                    v += if apex == 1 { v / 2 } else { 0 };

                    by_rank[rank] = Score::new(v as i16, (v * 5 / 8) as i16);
                }
            }
        }
    }

    table
}
