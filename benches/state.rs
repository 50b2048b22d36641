//! Grid state benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use termgrid::{Action, Direction, EraseMode, SgrAttribute, TerminalState};

fn bench_state_print(c: &mut Criterion) {
    let mut group = c.benchmark_group("state");

    // Printing characters, including wraps at the grid edge
    let chars: Vec<Action> = "Hello, World! ".repeat(100).chars().map(Action::Print).collect();

    group.bench_function("print_chars", |b| {
        b.iter(|| {
            let mut state = TerminalState::new();
            for action in &chars {
                state.apply(action.clone());
            }
            black_box(state)
        })
    });

    group.finish();
}

fn bench_state_append_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("state");

    group.bench_function("append_lines", |b| {
        b.iter(|| {
            let mut state = TerminalState::new();
            for i in 0..1000 {
                for c in format!("Line {}: Some text content here", i).chars() {
                    state.print(c);
                }
                state.line_feed();
            }
            black_box(state)
        })
    });

    group.finish();
}

fn bench_state_redraw(c: &mut Criterion) {
    let mut group = c.benchmark_group("state");

    // Cursor-up, erase, reprint: the progress bar pattern
    let frame: Vec<Action> = std::iter::once(Action::CursorMove {
        direction: Direction::Up,
        count: 1,
    })
    .chain(std::iter::once(Action::EraseInLine(EraseMode::All)))
    .chain(std::iter::once(Action::SetStyle(vec![SgrAttribute::Bold])))
    .chain("<=====------> 42% EXECUTING".chars().map(Action::Print))
    .chain([Action::SetStyle(vec![SgrAttribute::Reset]), Action::LineFeed])
    .collect();

    group.bench_function("progress_redraw", |b| {
        b.iter(|| {
            let mut state = TerminalState::new();
            state.line_feed();
            for _ in 0..500 {
                for action in &frame {
                    state.apply(action.clone());
                }
            }
            black_box(state)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_state_print, bench_state_append_lines, bench_state_redraw);
criterion_main!(benches);
