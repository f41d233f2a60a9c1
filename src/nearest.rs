//! A point index that builds its k-d tree once and answers many nearest-neighbor queries.

use crate::error::Result;
use crate::kdtree::{build, KDTree, KDTreeIndex, KDTreeNode};
use crate::linear::{find_nearest_faster, find_nearest_slow};
use crate::point::Point;
use crate::r#type::IndexableNum;

const DEFAULT_DIMENSIONS: usize = 2;

/// Indexes a set of points in a 2-D k-d tree.
///
/// Construction is the expensive step and happens once, in [`new`][Self::new]. Points may
/// carry more than two coordinates; only the first two are used for indexing and distances.
#[derive(Debug, Clone)]
pub struct NearestNeighborIndex<N: IndexableNum> {
    points: Vec<Point<N>>,
    tree: KDTree<N>,
}

impl<N: IndexableNum> NearestNeighborIndex<N> {
    /// Index `points` in a 2-D tree.
    pub fn new<P: Into<Point<N>>>(points: impl IntoIterator<Item = P>) -> Result<Self> {
        Self::with_dimensions(points, DEFAULT_DIMENSIONS)
    }

    /// Index `points` in a tree cycling through `dims` axes.
    pub fn with_dimensions<P: Into<Point<N>>>(
        points: impl IntoIterator<Item = P>,
        dims: usize,
    ) -> Result<Self> {
        let points: Vec<Point<N>> = points.into_iter().map(Into::into).collect();
        let tree = build(points.iter().cloned(), dims)?;
        Ok(Self { points, tree })
    }

    /// Index an optional collection; an absent one behaves like an empty one.
    pub fn from_optional<P: Into<Point<N>>>(
        points: Option<impl IntoIterator<Item = P>>,
    ) -> Result<Self> {
        Self::new(points.into_iter().flatten())
    }

    /// The indexed points, in insertion order.
    pub fn points(&self) -> &[Point<N>] {
        &self.points
    }

    /// The underlying tree.
    pub fn tree(&self) -> &KDTree<N> {
        &self.tree
    }

    /// Return the indexed point closest to `query`.
    ///
    /// An absent query, or an empty index, yields `Ok(None)`.
    pub fn find_nearest(&self, query: Option<&[N]>) -> Result<Option<&Point<N>>> {
        let Some(query) = query else {
            return Ok(None);
        };
        let nearest = self.tree.nearest_neighbor(query)?;
        Ok(nearest.map(|neighbor| &self.points[neighbor.id]))
    }

    /// Linear-scan equivalent of [`find_nearest`][Self::find_nearest] using true distances.
    pub fn find_nearest_slow<'a, P: AsRef<[N]>>(query: &[N], haystack: &'a [P]) -> Option<&'a P> {
        find_nearest_slow(query, haystack)
    }

    /// Linear-scan equivalent of [`find_nearest`][Self::find_nearest] using squared distances.
    pub fn find_nearest_faster<'a, P: AsRef<[N]>>(
        query: &[N],
        haystack: &'a [P],
    ) -> Option<&'a P> {
        find_nearest_faster(query, haystack)
    }
}

impl<N: IndexableNum> KDTreeIndex<N> for NearestNeighborIndex<N> {
    fn nodes(&self) -> &[KDTreeNode<N>] {
        self.tree.nodes()
    }

    fn dimensions(&self) -> usize {
        self.tree.dimensions()
    }
}
