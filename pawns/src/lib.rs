mod config;
mod connected;
mod entry;
mod eval_king;
mod eval_pawns;
mod pawn_cache;
mod tables;

pub use config::PawnTableConfig;
pub use connected::{connected_bonus, init};
pub use entry::PawnEntry;
pub use eval_king::{black_king_safety, do_king_safety, shelter_storm, white_king_safety};
pub use eval_pawns::{classify, PawnFlags};
pub use pawn_cache::PawnTable;
