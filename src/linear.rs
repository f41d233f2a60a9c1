//! Linear-scan nearest neighbor search, used as a correctness and benchmarking baseline.
//!
//! Distances are computed over the coordinates the query and each point have in common.

use crate::kdtree::sq_dist;
use crate::r#type::IndexableNum;

/// Return the point of `haystack` closest to `query`, comparing true Euclidean distances.
///
/// Returns `None` for an empty haystack. The first of several equidistant points wins.
pub fn find_nearest_slow<'a, N: IndexableNum, P: AsRef<[N]>>(
    query: &[N],
    haystack: &'a [P],
) -> Option<&'a P> {
    let mut min: Option<(f64, &P)> = None;
    for point in haystack {
        let coords = point.as_ref();
        let dist = sq_dist(query, coords, query.len())
            .to_f64()
            .unwrap_or(f64::INFINITY)
            .sqrt();
        if min.map_or(true, |(min_dist, _)| dist < min_dist) {
            min = Some((dist, point));
        }
    }
    min.map(|(_, point)| point)
}

/// Return the point of `haystack` closest to `query`, comparing squared distances.
///
/// Same result as [`find_nearest_slow`] without a square root per point.
pub fn find_nearest_faster<'a, N: IndexableNum, P: AsRef<[N]>>(
    query: &[N],
    haystack: &'a [P],
) -> Option<&'a P> {
    let mut min: Option<(N, &P)> = None;
    for point in haystack {
        let dist = sq_dist(query, point.as_ref(), query.len());
        if min.map_or(true, |(min_dist, _)| dist < min_dist) {
            min = Some((dist, point));
        }
    }
    min.map(|(_, point)| point)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Point;

    #[test]
    fn empty_haystack() {
        let haystack: Vec<Point<f64>> = vec![];
        assert!(find_nearest_slow(&[0., 0.], &haystack).is_none());
        assert!(find_nearest_faster(&[0., 0.], &haystack).is_none());
    }

    #[test]
    fn slow_and_faster_agree() {
        let haystack = vec![[1., 2.], [1., 0.], [10., 5.], [-1000., 20.]];
        for query in [[0., 0.], [-2000., 0.], [9., 9.]] {
            assert_eq!(
                find_nearest_slow(&query, &haystack),
                find_nearest_faster(&query, &haystack)
            );
        }
        assert_eq!(find_nearest_faster(&[0., 0.], &haystack), Some(&[1., 0.]));
    }

    #[test]
    fn first_of_ties_wins() {
        let haystack = vec![Point::xy(1, 0), Point::xy(-1, 0), Point::xy(0, 1)];
        let nearest = find_nearest_faster(&[0, 0], &haystack).unwrap();
        assert_eq!(nearest, &Point::xy(1, 0));
    }
}
