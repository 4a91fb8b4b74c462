//! Chess Engine Benchmarks
//!
//! Performance benchmarks for evaluation, search and session analysis using Criterion.

use chess_engine::{
    evaluate_position, find_best_move, minimax_exhaustive, EvalWeights, GameSession, Rules,
    ShakmatyRules,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const MIDDLEGAME_FEN: &str = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/3P1N2/PPP2PPP/RNBQK2R w KQkq - 1 5";

fn bench_legal_moves_starting(c: &mut Criterion) {
    let rules = ShakmatyRules::default();

    c.bench_function("legal_moves_starting_position", |b| {
        b.iter(|| black_box(rules.legal_moves(None)))
    });
}

fn bench_evaluate_position_starting(c: &mut Criterion) {
    let rules = ShakmatyRules::default();
    let weights = EvalWeights::default();

    c.bench_function("evaluate_position_starting", |b| {
        b.iter(|| black_box(evaluate_position(&rules, &weights)))
    });
}

fn bench_evaluate_position_middlegame(c: &mut Criterion) {
    let rules = ShakmatyRules::from_fen(MIDDLEGAME_FEN).expect("valid FEN");
    let weights = EvalWeights::default();

    c.bench_function("evaluate_position_middlegame", |b| {
        b.iter(|| black_box(evaluate_position(&rules, &weights)))
    });
}

fn bench_alphabeta_vs_minimax(c: &mut Criterion) {
    let weights = EvalWeights::default();
    let mut group = c.benchmark_group("search_depth_3");
    group.sample_size(10);

    group.bench_function("alphabeta", |b| {
        let mut rules = ShakmatyRules::default();
        b.iter(|| black_box(find_best_move(&mut rules, 3, &weights)))
    });
    group.bench_function("minimax_exhaustive", |b| {
        let mut rules = ShakmatyRules::default();
        b.iter(|| black_box(minimax_exhaustive(&mut rules, 3, &weights)))
    });
    group.finish();
}

fn bench_session_analyze_cached(c: &mut Criterion) {
    let session: GameSession = GameSession::new();
    let _ = session.analyze();

    c.bench_function("session_analyze_cached", |b| {
        b.iter(|| black_box(session.analyze()))
    });
}

criterion_group!(
    benches,
    bench_legal_moves_starting,
    bench_evaluate_position_starting,
    bench_evaluate_position_middlegame,
    bench_alphabeta_vs_minimax,
    bench_session_analyze_cached,
);
criterion_main!(benches);
