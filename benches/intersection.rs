//! Intersection finder benchmark suite.
//!
//! Benchmarks the per-pointer-move selection pass at different page sizes:
//! - Element counts: 100, 1 000, 10 000
//!
//! Run with: cargo bench --bench intersection
//! Results saved to: target/criterion/

use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

use region_blur::session::intersect::eligible_in_rect;
use region_blur::{BlurSession, EligibleTags, ElementId, ElementInfo, MemoryPage, Mode, Point, Rect};

// ============================================================================
// Benchmark Parameters
// ============================================================================

const ELEMENT_COUNTS: &[usize] = &[100, 1_000, 10_000];

/// Query covering a screenful near the top-left of the synthetic page.
const QUERY: Rect = Rect::new(100.0, 100.0, 400.0, 300.0);

// ============================================================================
// Synthetic Pages
// ============================================================================

/// Lays out `count` elements in a grid, three quarters of them eligible.
fn synthetic_elements(count: usize) -> Vec<ElementInfo> {
    (0..count)
        .map(|i| {
            let tag = match i % 4 {
                0 => "DIV",
                1 => "P",
                2 => "IMG",
                _ => "SPAN",
            };
            let col = (i % 40) as f64;
            let row = (i / 40) as f64;
            ElementInfo::new(
                ElementId::new(i as u64),
                tag,
                Rect::new(col * 30.0, row * 24.0, 28.0, 20.0),
            )
        })
        .collect()
}

/// Same grid as a live MemoryPage.
fn synthetic_page(count: usize) -> MemoryPage {
    let page = MemoryPage::new();
    for el in synthetic_elements(count) {
        page.insert(&el.tag, el.rect);
    }
    page
}

// ============================================================================
// Benchmark: Selection Pass
// ============================================================================

fn bench_eligible_in_rect(c: &mut Criterion) {
    let tags = EligibleTags::standard();

    let mut group = c.benchmark_group("eligible_in_rect");
    for &count in ELEMENT_COUNTS {
        let elements = synthetic_elements(count);
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &elements,
            |b, elements| {
                b.iter(|| black_box(eligible_in_rect(elements, QUERY, &tags)));
            },
        );
    }
    group.finish();
}

// ============================================================================
// Benchmark: Full Drag
// ============================================================================

fn bench_full_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_drag");
    for &count in ELEMENT_COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || {
                    let session = BlurSession::new(synthetic_page(count));
                    session.set_mode(Mode::Edit);
                    session
                },
                |session| {
                    session.pointer_down(Point::new(QUERY.x, QUERY.y));
                    session.pointer_move(Point::new(QUERY.right(), QUERY.bottom()));
                    session.pointer_up(Point::new(QUERY.right(), QUERY.bottom()));
                    black_box(session.blurred_len())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_eligible_in_rect, bench_full_drag);
criterion_main!(benches);
