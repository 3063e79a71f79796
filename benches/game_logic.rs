use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stetris::core::{GameConfig, GameState, Playfield};
use stetris::term::ConsoleView;
use stetris::types::{Color, Coord, Key};

fn bench_frame(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::default()).unwrap();
    state.step(Key::Up);

    c.bench_function("idle_frame", |b| {
        b.iter(|| {
            black_box(state.step(black_box(Key::None)));
            state.advance_tick();
        })
    });
}

fn bench_row_clear(c: &mut Criterion) {
    c.bench_function("shift_down_8x8", |b| {
        b.iter(|| {
            let mut field = Playfield::new(8, 8);
            for x in 0..8 {
                field.set_occupied(Coord::new(x, 7), Color::Red);
            }
            field.shift_down();
            black_box(field.occupied_count())
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::default()).unwrap();

    c.bench_function("hard_drop_frame", |b| {
        b.iter(|| {
            // Restarts whenever the column fills up.
            black_box(state.step(black_box(Key::Down)));
            state.advance_tick();
        })
    });
}

fn bench_console_view(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::default()).unwrap();
    state.step(Key::Up);
    let view = ConsoleView::new();
    let mut fb = ConsoleView::framebuffer_for(&state);

    c.bench_function("console_view_render", |b| {
        b.iter(|| {
            view.render_into(black_box(&state), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_frame,
    bench_row_clear,
    bench_hard_drop,
    bench_console_view
);
criterion_main!(benches);
