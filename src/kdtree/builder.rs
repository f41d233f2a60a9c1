use std::cmp::Ordering;

use geo_traits::CoordTrait;
use log::debug;

use crate::error::{KdNearestError, Result};
use crate::kdtree::{KDTree, KDTreeNode};
use crate::point::Point;
use crate::r#type::IndexableNum;

const DEFAULT_DIMENSIONS: usize = 2;

/// A builder to create a [`KDTree`].
#[derive(Debug, Clone)]
pub struct KDTreeBuilder<N: IndexableNum> {
    points: Vec<Point<N>>,
    dims: usize,
}

impl<N: IndexableNum> KDTreeBuilder<N> {
    /// Create a new builder for a 2-D tree.
    pub fn new() -> Self {
        Self {
            points: vec![],
            dims: DEFAULT_DIMENSIONS,
        }
    }

    /// Create a new builder cycling through `dims` axes.
    ///
    /// Search pruning assumes an axis-aligned Euclidean metric. Only `dims == 2` is exercised
    /// by this crate; other values are accepted but not guaranteed.
    pub fn with_dimensions(dims: usize) -> Result<Self> {
        if dims == 0 {
            return Err(KdNearestError::InvalidDimensions(dims));
        }
        Ok(Self {
            points: vec![],
            dims,
        })
    }

    /// The number of axes the finished tree will cycle through.
    pub fn dimensions(&self) -> usize {
        self.dims
    }

    /// The number of points added so far.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no points have been added.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Add a point to the index, returning its insertion index.
    ///
    /// The point needs at least as many coordinates as the tree has dimensions. Extra
    /// coordinates are kept on the point but ignored for splitting and distances.
    pub fn add(&mut self, point: impl Into<Point<N>>) -> Result<usize> {
        let point = point.into();
        if point.dims() < self.dims {
            return Err(KdNearestError::PointDimensions {
                expected: self.dims,
                actual: point.dims(),
            });
        }
        let index = self.points.len();
        self.points.push(point);
        Ok(index)
    }

    /// Add a point from any [`CoordTrait`] implementation.
    pub fn add_coord(&mut self, coord: &impl CoordTrait<T = N>) -> Result<usize> {
        self.add(Point::from_coord(coord))
    }

    /// Consume this builder, performing the median splits and generating a KDTree ready for
    /// queries.
    pub fn finish(self) -> KDTree<N> {
        let Self { mut points, dims } = self;
        if points.is_empty() {
            debug!("finished empty k-d tree with {} dimensions", dims);
            return KDTree::empty(dims);
        }

        let mut order: Vec<usize> = (0..points.len()).collect();
        let mut links = Vec::with_capacity(points.len());
        let mut depth = 0;
        sort(&points, &mut order, 0, dims, &mut links, &mut depth);

        let nodes: Vec<KDTreeNode<N>> = links
            .into_iter()
            .map(|link| KDTreeNode {
                location: std::mem::take(&mut points[link.id]),
                id: link.id,
                left: link.left,
                right: link.right,
            })
            .collect();

        debug!(
            "finished k-d tree with {} items, {} dimensions, depth {}",
            nodes.len(),
            dims,
            depth
        );

        KDTree { nodes, dims, depth }
    }
}

impl<N: IndexableNum> Default for KDTreeBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Arena slot recorded during construction, before points are moved into nodes.
struct Link {
    id: usize,
    left: Option<usize>,
    right: Option<usize>,
}

/// Recursively split `order` at its median on the axis for `depth`, pushing nodes in pre-order.
///
/// `order` is the working partition of point ids; the caller's points are never reordered.
fn sort<N: IndexableNum>(
    points: &[Point<N>],
    order: &mut [usize],
    depth: usize,
    dims: usize,
    links: &mut Vec<Link>,
    max_depth: &mut usize,
) -> Option<usize> {
    if order.is_empty() {
        return None;
    }
    *max_depth = (*max_depth).max(depth + 1);

    // stable, so coincident coordinates keep their relative order from the level above
    let axis = depth % dims;
    order.sort_by(|&a, &b| compare(points[a][axis], points[b][axis]));

    let mid = order.len() >> 1;
    let node = links.len();
    links.push(Link {
        id: order[mid],
        left: None,
        right: None,
    });

    if order.len() == 1 {
        return Some(node);
    }

    // the median lives only in this node
    let (left, rest) = order.split_at_mut(mid);
    let right = &mut rest[1..];
    let left = sort(points, left, depth + 1, dims, links, max_depth);
    let right = sort(points, right, depth + 1, dims, links, max_depth);
    links[node].left = left;
    links[node].right = right;

    Some(node)
}

#[inline]
fn compare<N: IndexableNum>(a: N, b: N) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Build a tree cycling through `dims` axes from a collection of points.
///
/// An empty collection yields an empty tree.
pub fn build<N: IndexableNum, P: Into<Point<N>>>(
    points: impl IntoIterator<Item = P>,
    dims: usize,
) -> Result<KDTree<N>> {
    let mut builder = KDTreeBuilder::with_dimensions(dims)?;
    for point in points {
        builder.add(point)?;
    }
    Ok(builder.finish())
}
