mod utils;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use dynamic_rtree::{LinearScan, RTree, Rectangle, SpatialIndex};
use utils::{get_random_points, get_random_rects, universe};

pub fn query_benchmark(c: &mut Criterion) {
    let rectangles = get_random_rects(universe(), 10_000, 50., 11);
    let query_rects: Vec<Rectangle> = get_random_points(universe(), 1000, 342)
        .into_iter()
        .map(|p| Rectangle::new(p.x, p.y, 200., 200.))
        .collect();
    println!("Benchmarking query: {} rectangles", rectangles.len());
    let mut group = c.benchmark_group("query_random");

    for &degree in [4, 8, 16].iter() {
        let mut rtree = RTree::with_max_entries(degree).unwrap();
        rtree.insert_all(&rectangles).unwrap();

        group.bench_function(BenchmarkId::new("rtree_query", degree), |b| {
            let mut query_iter = query_rects.iter().cycle();
            b.iter_batched(
                move || query_iter.next().unwrap(),
                |probe| rtree.search(probe),
                BatchSize::SmallInput,
            )
        });
    }

    let scan: LinearScan = rectangles.iter().copied().collect();
    group.bench_function("linear_scan_query", |b| {
        let mut query_iter = query_rects.iter().cycle();
        b.iter_batched(
            move || query_iter.next().unwrap(),
            |probe| scan.search(probe),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, query_benchmark);

criterion_main!(benches);
