use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sssp_engine::algorithm::dijkstra::dijkstra;
use sssp_engine::data_structures::IndexedPriorityQueue;
use sssp_engine::graph::generators::{grid_graph, random_graph};
use sssp_engine::graph::Direction;

fn bench_random_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_random");
    for &size in &[1_000usize, 10_000, 50_000] {
        let graph = random_graph(size, 3.0, Direction::Directed, 42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| dijkstra(graph, black_box(&0)).unwrap())
        });
    }
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let graph = grid_graph(200, 200);
    c.bench_function("dijkstra_grid_200x200", |b| {
        b.iter(|| dijkstra(&graph, black_box(&0)).unwrap())
    });
}

fn bench_decrease_key(c: &mut Criterion) {
    c.bench_function("priority_queue_decrease_key_10k", |b| {
        b.iter(|| {
            let mut queue = IndexedPriorityQueue::with_capacity(10_000);
            for element in 0..10_000usize {
                queue.offer(element, f64::INFINITY);
            }
            for element in (0..10_000usize).rev() {
                queue.change_priority(element, element as f64);
            }
            while let Some(entry) = queue.poll() {
                black_box(entry);
            }
        })
    });
}

criterion_group!(benches, bench_random_graphs, bench_grid, bench_decrease_key);
criterion_main!(benches);
