//! Benchmarks for structural editing operations.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use texplot::editor::{Direction, EditorSession, find_matching_brace};

fn deeply_bracketed_session() -> EditorSession {
    let mut session = EditorSession::new();
    for _ in 0..3 {
        session.insert_template("frac").unwrap();
    }
    for ch in "123".chars() {
        session.insert_char(ch);
    }
    session
}

fn bench_insert_template(c: &mut Criterion) {
    c.bench_function("insert_template_frac", |b| {
        b.iter(|| {
            let mut session = EditorSession::new();
            session.insert_template(black_box("frac")).unwrap();
            session
        })
    });
}

fn bench_backspace_unit(c: &mut Criterion) {
    c.bench_function("backspace_whole_unit", |b| {
        b.iter(|| {
            let mut session = EditorSession::with_text("x + \\frac{12}{34}");
            session.backspace();
            session
        })
    });
}

fn bench_walk_expression(c: &mut Criterion) {
    let session = deeply_bracketed_session();
    let len = session.current_text().chars().count();
    c.bench_function("walk_left_to_start", |b| {
        b.iter(|| {
            let mut s = session.clone();
            for _ in 0..len {
                s.move_cursor(black_box(Direction::Left));
            }
            s
        })
    });
}

fn bench_match_brace(c: &mut Criterion) {
    let session = deeply_bracketed_session();
    let buffer = texplot::editor::InputBuffer::from_text(&session.current_text());
    let first_open = session
        .current_text()
        .chars()
        .position(|c| c == '{')
        .unwrap();
    c.bench_function("find_matching_brace", |b| {
        b.iter(|| find_matching_brace(black_box(&buffer), black_box(first_open)))
    });
}

criterion_group!(
    benches,
    bench_insert_template,
    bench_backspace_unit,
    bench_walk_expression,
    bench_match_brace
);
criterion_main!(benches);
