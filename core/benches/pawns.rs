use cozy_chess::{Board, Color, Square};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pawns::{shelter_storm, PawnEntry, PawnTable};
use utils::structural_key;

/// Perft positions from https://github.com/AndyGrant/Ethereal/blob/master/src/perft/standard.epd
const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "rnbqkb1r/ppppp1pp/7n/4Pp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
];

fn bench_fill(c: &mut Criterion) {
    pawns::init();
    let mut group = c.benchmark_group("pawns/fill");

    for fen in POSITIONS {
        let board: Board = fen.parse().unwrap();
        let key = structural_key(&board);

        group.bench_with_input(BenchmarkId::from_parameter(fen), &board, |b, board| {
            let mut entry = PawnEntry::default();
            b.iter(|| {
                entry.fill(black_box(board), key);
                black_box(entry.score())
            })
        });
    }

    group.finish();
}

fn bench_probe(c: &mut Criterion) {
    let boards: Vec<Board> = POSITIONS.iter().map(|fen| fen.parse().unwrap()).collect();
    let mut table = PawnTable::new(1);

    c.bench_function("pawns/probe", |b| {
        b.iter(|| {
            for board in &boards {
                let entry = table.probe(black_box(board));
                black_box(entry.king_safety(board, Color::White));
            }
        })
    });
}

fn bench_shelter_storm(c: &mut Criterion) {
    let board = Board::default();

    c.bench_function("pawns/shelter_storm", |b| {
        b.iter(|| black_box(shelter_storm(black_box(&board), Color::White, Square::G1)))
    });
}

criterion_group!(benches, bench_fill, bench_probe, bench_shelter_storm);
criterion_main!(benches);
