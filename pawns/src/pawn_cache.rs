use std::mem::size_of;

use cozy_chess::Board;
use log::debug;
use utils::structural_key;

use crate::config::PawnTableConfig;
use crate::connected;
use crate::entry::PawnEntry;

const MIN_ENTRIES: usize = 1024;

/// Pawn structures change very little between moves, so one evaluation is
/// reused for every position with the same structural key.
///
/// <https://www.chessprogramming.org/Pawn_Hash_Table>
pub struct PawnTable {
    entries: Vec<PawnEntry>,
}

impl PawnTable {
    /// Creates a table of roughly `mb` megabytes.
    pub fn new(mb: usize) -> Self {
        connected::init();

        let bytes = mb.saturating_mul(1024 * 1024);
        let entry_size = size_of::<PawnEntry>().max(1);
        let len = (bytes / entry_size).max(MIN_ENTRIES);

        debug!("Allocating pawn table: {} entries ({} MB)", len, mb);

        Self {
            entries: vec![PawnEntry::default(); len],
        }
    }

    pub fn from_config(config: &PawnTableConfig) -> Self {
        Self::new(config.hash_mb)
    }

    pub fn clear(&mut self) {
        debug!("Clearing pawn table");
        self.entries.fill(PawnEntry::default());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry for `board`'s pawn structure, filling it first when
    /// the slot holds a different structure.
    pub fn probe(&mut self, board: &Board) -> &mut PawnEntry {
        let key = structural_key(board);
        let idx = (key as usize) % self.entries.len();
        let entry = &mut self.entries[idx];

        if !entry.matches(key) {
            entry.fill(board, key);
        }

        entry
    }

    /// Fill rate in permille, sampled over the first 1000 slots.
    pub fn hashfull(&self) -> u16 {
        const MAX_SAMPLE: usize = 1000;

        let sample_size = self.entries.len().min(MAX_SAMPLE);
        let filled = self.entries[..sample_size]
            .iter()
            .filter(|e| e.filled)
            .count();

        ((filled * 1000) / sample_size) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cozy_chess::Color;
    use evaluation::Score;

    #[test]
    fn test_minimum_size() {
        let table = PawnTable::new(0);
        assert_eq!(table.len(), MIN_ENTRIES);
        assert_eq!(table.hashfull(), 0);
    }

    #[test]
    fn test_probe_fills_once() {
        let mut table = PawnTable::new(1);
        let board = Board::default();

        let key = table.probe(&board).key();
        assert!(table.probe(&board).matches(key));
        assert_eq!(table.probe(&board).score(), Score::ZERO);
    }

    #[test]
    fn test_probe_keeps_king_safety_for_same_structure() {
        let mut table = PawnTable::new(1);
        let board = Board::default();

        let first = table.probe(&board).king_safety(&board, Color::White);
        let entry = table.probe(&board);
        assert_eq!(entry.king_square(Color::White), Some(board.king(Color::White)));
        assert_eq!(entry.king_safety(&board, Color::White), first);
    }

    #[test]
    fn test_different_structures_get_their_own_evaluation() {
        let mut table = PawnTable::new(1);
        let start = Board::default();
        let weak: Board = "rnbqkbnr/pppppppp/8/8/8/P7/P1PPPPPP/RNBQKBNR w KQkq - 0 1"
            .parse()
            .unwrap();

        let start_score = table.probe(&start).score();
        let weak_score = table.probe(&weak).score();
        assert_eq!(start_score, Score::ZERO);
        assert_ne!(weak_score, Score::ZERO);
        assert_eq!(table.probe(&start).score(), start_score);
    }

    #[test]
    fn test_clear() {
        let mut table = PawnTable::new(1);
        let board = Board::default();
        let key = table.probe(&board).key();

        table.clear();
        assert!(table.entries.iter().all(|e| !e.matches(key)));
    }

    #[test]
    fn test_config_size() {
        let config = PawnTableConfig { hash_mb: 2 };
        assert!(PawnTable::from_config(&config).len() >= PawnTable::new(1).len());
    }
}
