use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, NullReporter, Piece, Progress, RandomTypes, Sequence};
use blockfall::engine::Session;
use blockfall::types::{Command, Input, PieceKind};

fn bench_advance(c: &mut Criterion) {
    let mut session = Session::new(RandomTypes::seeded(12345), NullReporter);

    c.bench_function("session_advance_16ms", |b| {
        b.iter(|| {
            if session.advance(black_box(16)).is_some_and(|o| o.is_game_over()) {
                session.restart();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new(Sequence::new([PieceKind::I]));
            let mut progress = Progress::new(NullReporter);
            for y in 16..20 {
                for x in 0..10 {
                    board.set_cell(x, y, Some(PieceKind::I));
                }
            }
            board.clear_lines(&mut progress)
        })
    });
}

fn bench_placement_check(c: &mut Criterion) {
    let board = Board::new(Sequence::new([PieceKind::T]));
    let candidate = Piece::new(PieceKind::T).propose_move(3, 10);

    c.bench_function("is_placement_valid", |b| {
        b.iter(|| board.is_placement_valid(black_box(&candidate)))
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    c.bench_function("hard_drop_and_lock", |b| {
        b.iter(|| {
            let mut session = Session::new(Sequence::new([PieceKind::J]), NullReporter);
            session.handle(Input::Move(Command::HardDrop));
            session.tick()
        })
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_line_clear,
    bench_placement_check,
    bench_hard_drop
);
criterion_main!(benches);
