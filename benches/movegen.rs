//! 走法生成基准

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reversi_engine::test_positions::MID_1;
use reversi_engine::{parse_fen, Side};

fn bench_movegen(c: &mut Criterion) {
    let (board, turn) = parse_fen(MID_1).unwrap();

    c.bench_function("legal_moves_mid", |b| {
        b.iter(|| black_box(&board).legal_moves(turn))
    });

    c.bench_function("has_any_move_mid", |b| {
        b.iter(|| black_box(&board).has_any_move(Side::Dark))
    });

    c.bench_function("place_disc_mid", |b| {
        let moves = board.legal_moves(turn);
        let first = moves[0];
        b.iter(|| {
            let mut scratch = board.clone();
            scratch.place_disc(turn, black_box(first));
            scratch
        })
    });
}

criterion_group!(benches, bench_movegen);
criterion_main!(benches);
