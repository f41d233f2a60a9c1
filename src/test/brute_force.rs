use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::kdtree::{build, KDTreeIndex};
use crate::linear::{find_nearest_faster, find_nearest_slow};
use crate::Point;

fn rand_points(rng: &mut StdRng, n: usize) -> Vec<Point<f64>> {
    (0..n)
        .map(|_| Point::xy(rng.gen_range(-1000.0..1000.0), rng.gen_range(-1000.0..1000.0)))
        .collect()
}

fn sq_dist(a: &Point<f64>, b: &Point<f64>) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx * dx + dy * dy
}

#[test]
fn matches_linear_scan_on_random_points() {
    let mut rng = StdRng::seed_from_u64(42);

    for n in [1, 2, 3, 10, 257, 2000] {
        let points = rand_points(&mut rng, n);
        let queries = rand_points(&mut rng, 200);
        let tree = build(points.iter().cloned(), 2).unwrap();

        for query in queries.iter() {
            let expected = find_nearest_faster(query.coords(), &points).unwrap();
            let nearest = tree.nearest_neighbor(query.coords()).unwrap().unwrap();
            assert_eq!(
                nearest.distance_sq,
                sq_dist(query, expected),
                "{} points, query {:?}",
                n,
                query
            );
            assert_eq!(nearest.distance_sq, sq_dist(query, nearest.location));
        }
    }
}

#[test]
fn matches_linear_scan_on_a_coarse_grid() {
    // many exact ties; only the distance has to agree
    let mut rng = StdRng::seed_from_u64(7);
    let points: Vec<Point<i32>> = (0..500)
        .map(|_| Point::xy(rng.gen_range(-20..20), rng.gen_range(-20..20)))
        .collect();
    let tree = build(points.iter().cloned(), 2).unwrap();

    for qx in -25..25 {
        for qy in -25..25 {
            let query = [qx, qy];
            let expected = find_nearest_slow(&query, &points).unwrap();
            let dx = expected[0] - qx;
            let dy = expected[1] - qy;
            let nearest = tree.nearest_neighbor(&query).unwrap().unwrap();
            assert_eq!(nearest.distance_sq, dx * dx + dy * dy, "query {:?}", query);
        }
    }
}
