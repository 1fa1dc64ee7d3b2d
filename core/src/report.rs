use std::fmt::{self, Write};

use cozy_chess::{BitBoard, Board, Color, Square};
use pawns::PawnEntry;

/// Human readable summary of a filled pawn entry.
pub fn render(board: &Board, entry: &mut PawnEntry, phase: f32) -> Result<String, fmt::Error> {
    let mut out = String::new();

    let score = entry.score();
    writeln!(out, "key           {:016x}", entry.key())?;
    writeln!(out, "pawns         {} (tapered {})", score, score.taper(phase))?;
    writeln!(out, "asymmetry     {}", entry.asymmetry())?;
    writeln!(out, "open files    {}", entry.open_files())?;

    for color in Color::ALL {
        let safety = entry.king_safety(board, color);
        writeln!(out, "{:?}", color)?;
        writeln!(out, "  passed      {}", squares(entry.passed_pawns(color)))?;
        writeln!(out, "  attacks     {}", squares(entry.pawn_attacks(color)))?;
        writeln!(out, "  semi-open   {:08b}", entry.semiopen_files(color).reverse_bits())?;
        writeln!(out, "  king safety {} (tapered {})", safety, safety.taper(phase))?;
    }

    Ok(out)
}

fn squares(bb: BitBoard) -> String {
    if bb.is_empty() {
        return "-".to_string();
    }
    bb.into_iter()
        .map(|sq: Square| sq.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
