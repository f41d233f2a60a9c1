use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kd_nearest::kdtree::{build, KDTree, KDTreeIndex};
use kd_nearest::linear::{find_nearest_faster, find_nearest_slow};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstar::RTree;

fn rand_points(rng: &mut StdRng, n: usize) -> Vec<[f64; 2]> {
    (0..n)
        .map(|_| [rng.gen_range(-1000.0..1000.0), rng.gen_range(-1000.0..1000.0)])
        .collect()
}

fn construct_kdtree(points: &[[f64; 2]]) -> KDTree<f64> {
    build(points.iter().copied(), 2).unwrap()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let index_points = rand_points(&mut rng, 10_000);
    let query_points = rand_points(&mut rng, 1_000);

    c.bench_function("construction (kdtree)", |b| {
        b.iter(|| construct_kdtree(&index_points))
    });

    c.bench_function("construction (rstar bulk)", |b| {
        b.iter(|| RTree::bulk_load(index_points.clone()))
    });

    // construction is excluded from the query benchmarks
    let tree = construct_kdtree(&index_points);
    let rstar_tree = RTree::bulk_load(index_points.clone());

    c.bench_function("nearest (linear, sqrt)", |b| {
        b.iter(|| {
            for query in query_points.iter() {
                black_box(find_nearest_slow(query, &index_points));
            }
        })
    });

    c.bench_function("nearest (linear, squared)", |b| {
        b.iter(|| {
            for query in query_points.iter() {
                black_box(find_nearest_faster(query, &index_points));
            }
        })
    });

    c.bench_function("nearest (kdtree)", |b| {
        b.iter(|| {
            for query in query_points.iter() {
                black_box(tree.nearest_neighbor(query).unwrap());
            }
        })
    });

    c.bench_function("nearest (rstar)", |b| {
        b.iter(|| {
            for query in query_points.iter() {
                black_box(rstar_tree.nearest_neighbor(query));
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
