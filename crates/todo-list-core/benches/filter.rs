#![allow(missing_docs)]

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use todo_list_core::{Item, TodoList};

fn build_list(len: usize) -> TodoList {
    let list = TodoList::with_items("bench", (0..len).map(|idx| Item::new(format!("task-{idx}"))));
    for idx in (0..len).step_by(2) {
        let _ = list.mark_done_at(idx);
    }
    list
}

fn bulk_query_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("todo_list_queries");
    for &len in &[16usize, 256, 4096] {
        let list = build_list(len);
        group.bench_with_input(BenchmarkId::new("all_done", len), &list, |b, list| {
            b.iter(|| black_box(list.all_done()));
        });
        group.bench_with_input(BenchmarkId::new("find_by_title", len), &list, |b, list| {
            let needle = format!("task-{}", len - 1);
            b.iter(|| black_box(list.find_by_title(&needle)));
        });
        group.bench_with_input(BenchmarkId::new("render", len), &list, |b, list| {
            b.iter(|| black_box(list.render()));
        });
    }
    group.finish();
}

fn remove_front_benchmark(c: &mut Criterion) {
    c.bench_function("remove_first_drain_256", |b| {
        b.iter_batched(
            || build_list(256),
            |mut list| {
                while let Some(item) = list.remove_first() {
                    black_box(item);
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bulk_query_benchmark, remove_front_benchmark);
criterion_main!(benches);
