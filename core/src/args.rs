use std::path::PathBuf;

use clap::Parser;

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Parser, Debug)]
#[command(name = "pawnscope")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Pawn structure and king shelter report for chess positions")]
pub struct Args {
    /// Positions to analyse, in FEN.
    #[arg(default_value = START_FEN)]
    pub fens: Vec<String>,

    /// Pawn table size in megabytes.
    #[arg(long, default_value_t = 16)]
    pub hash: usize,

    /// Taper phase (1.0 = opening, 0.0 = endgame). Estimated from material if omitted.
    #[arg(long)]
    pub phase: Option<f32>,

    /// Log to a file for debugging.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["pawnscope"]);
        assert_eq!(args.fens, vec![START_FEN.to_string()]);
        assert_eq!(args.hash, 16);
        assert!(args.phase.is_none());
        assert!(args.log_file.is_none());
    }

    #[test]
    fn test_multiple_positions() {
        let args = Args::parse_from([
            "pawnscope",
            "--hash",
            "4",
            "--phase",
            "0.5",
            "8/8/8/8/8/8/8/K6k w - - 0 1",
            "4k3/8/8/8/8/8/P7/4K3 w - - 0 1",
        ]);
        assert_eq!(args.fens.len(), 2);
        assert_eq!(args.hash, 4);
        assert_eq!(args.phase, Some(0.5));
    }
}
