mod bits;
mod board;
mod castling;
mod key;
pub mod masks;

pub use bits::{backmost_square, frontmost_square, pawn_attacks_bb, shift_up};
pub use board::{game_phase, relative_rank, relative_square};
pub use castling::CastlingRights;
pub use key::structural_key;
