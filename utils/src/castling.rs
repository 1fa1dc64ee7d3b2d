use cozy_chess::{Board, Color};

/// Snapshot of one side's castling rights, packed into two bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights(u8);

impl CastlingRights {
    const KINGSIDE: u8 = 1;
    const QUEENSIDE: u8 = 2;

    pub const NONE: Self = Self(0);

    pub fn new(kingside: bool, queenside: bool) -> Self {
        let mut bits = 0;
        if kingside {
            bits |= Self::KINGSIDE;
        }
        if queenside {
            bits |= Self::QUEENSIDE;
        }
        Self(bits)
    }

    #[inline(always)]
    pub fn of(board: &Board, color: Color) -> Self {
        let rights = board.castle_rights(color);
        Self::new(rights.short.is_some(), rights.long.is_some())
    }

    #[inline(always)]
    pub fn kingside(&self) -> bool {
        self.0 & Self::KINGSIDE != 0
    }

    #[inline(always)]
    pub fn queenside(&self) -> bool {
        self.0 & Self::QUEENSIDE != 0
    }
}
