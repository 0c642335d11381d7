use criterion::{black_box, criterion_group, criterion_main, Criterion};
use classic_tetris::core::{
    clear_lines, GameSession, Grid, LockedSet, Piece, SessionConfig,
};
use classic_tetris::types::PieceKind;

fn half_full_stack() -> LockedSet {
    let mut locked = LockedSet::new();
    for y in 10..20 {
        for x in 0..10 {
            if (x + y) % 3 != 0 {
                locked.insert(x, y, PieceKind::S);
            }
        }
    }
    locked
}

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::new(SessionConfig::default().with_seed(12345));

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if session.is_lost() {
                session = GameSession::new(SessionConfig::default().with_seed(12345));
            }
            session.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut locked = LockedSet::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    locked.insert(x, y, PieceKind::I);
                }
            }
            locked.insert(0, 15, PieceKind::T);
            let grid = Grid::build(&locked);
            clear_lines(black_box(&grid), &mut locked)
        })
    });
}

fn bench_grid_build(c: &mut Criterion) {
    let locked = half_full_stack();

    c.bench_function("grid_build", |b| {
        b.iter(|| Grid::build(black_box(&locked)))
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut session = GameSession::from_parts(
        SessionConfig::default(),
        half_full_stack(),
        Piece::at(PieceKind::T, 3, 2),
        PieceKind::I,
    );
    let mut dx = 1;

    c.bench_function("try_move", |b| {
        b.iter(|| {
            if !session.try_move(black_box(dx), 0) {
                dx = -dx;
            }
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut session = GameSession::from_parts(
        SessionConfig::default(),
        half_full_stack(),
        Piece::at(PieceKind::J, 3, 2),
        PieceKind::I,
    );

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            session.try_rotate();
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_grid_build,
    bench_try_move,
    bench_try_rotate
);
criterion_main!(benches);
