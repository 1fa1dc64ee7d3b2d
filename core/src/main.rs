mod args;
mod report;

use args::Args;
use clap::Parser;
use cozy_chess::Board;
use log::{debug, LevelFilter};
use pawns::{PawnTable, PawnTableConfig};
use simplelog::{Config, WriteLogger};
use std::error::Error;
use std::fs::File;

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let config = table_config(&args)?;
    let mut table = PawnTable::from_config(&config);

    for fen in &args.fens {
        let board: Board = fen
            .parse()
            .map_err(|e| format!("Invalid FEN '{}': {:?}", fen, e))?;

        let phase = args.phase.unwrap_or_else(|| utils::game_phase(&board));
        debug!("Analysing '{}' at phase {:.2}", fen, phase);

        let entry = table.probe(&board);
        println!("{}", fen);
        print!("{}", report::render(&board, entry, phase)?);
        println!();
    }

    debug!("Pawn table fill: {} permille", table.hashfull());

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    if let Some(log_file) = &args.log_file {
        WriteLogger::init(
            LevelFilter::Debug,
            Config::default(),
            File::create(log_file)?,
        )?;
    }

    Ok(args)
}

fn table_config(args: &Args) -> Result<PawnTableConfig, String> {
    let mut config = PawnTableConfig::default();
    config.update("PawnHash", &args.hash.to_string())?;
    Ok(config)
}
