use geo_traits::CoordTrait;
use log::trace;
use tinyvec::TinyVec;

use crate::error::{KdNearestError, Result};
use crate::kdtree::{KDTree, KDTreeNode, Neighbor, Node};
use crate::r#type::IndexableNum;

/// A trait for searching and accessing data out of a KDTree.
pub trait KDTreeIndex<N: IndexableNum>: Sized {
    /// The nodes of this tree, in pre-order
    fn nodes(&self) -> &[KDTreeNode<N>];

    /// The number of axes this tree cycles through
    fn dimensions(&self) -> usize;

    /// The number of items in this KDTree
    fn num_items(&self) -> usize {
        self.nodes().len()
    }

    /// Whether this KDTree holds no items
    fn is_empty(&self) -> bool {
        self.nodes().is_empty()
    }

    /// Search the index for the single item closest to `query`.
    ///
    /// Only the first [`dimensions`][Self::dimensions] coordinates of the query are used. An
    /// empty tree returns `Ok(None)` for any query. Errors if the query has fewer coordinates
    /// than the tree has dimensions.
    ///
    /// Among items at exactly the same distance, the first one reached (near side of each
    /// split before far side) wins.
    fn nearest_neighbor(&self, query: &[N]) -> Result<Option<Neighbor<'_, N>>> {
        let nodes = self.nodes();
        let dims = self.dimensions();
        if nodes.is_empty() {
            return Ok(None);
        }
        if query.len() < dims {
            return Err(KdNearestError::QueryDimensions {
                expected: dims,
                actual: query.len(),
            });
        }

        let descent = descend(nodes, dims, query);
        trace!(
            "nearest neighbor search visited {} of {} nodes",
            descent.visited,
            nodes.len()
        );

        Ok(descent.best.map(|(arena_id, distance_sq)| {
            let node = &nodes[arena_id];
            Neighbor {
                id: node.id,
                location: &node.location,
                distance_sq,
            }
        }))
    }

    /// Search the index for the single item closest to a coordinate.
    fn nearest_neighbor_coord(
        &self,
        coord: &impl CoordTrait<T = N>,
    ) -> Result<Option<Neighbor<'_, N>>> {
        let dims = coord.dim().size();
        let query: TinyVec<[N; 4]> = (0..dims).map(|n| coord.nth_or_panic(n)).collect();
        self.nearest_neighbor(&query)
    }

    /// Access the root node of the KDTree for manual traversal.
    fn root(&self) -> Option<Node<'_, N, Self>> {
        Node::from_root(self)
    }
}

impl<N: IndexableNum> KDTreeIndex<N> for KDTree<N> {
    fn nodes(&self) -> &[KDTreeNode<N>] {
        &self.nodes
    }

    fn dimensions(&self) -> usize {
        self.dims
    }
}

/// Find the item of `tree` closest to `query`.
///
/// An absent query is not an error; it yields `Ok(None)` like an empty tree does.
pub fn find_nearest_neighbor<'a, N: IndexableNum, T: KDTreeIndex<N>>(
    tree: &'a T,
    query: Option<&[N]>,
) -> Result<Option<Neighbor<'a, N>>> {
    match query {
        Some(query) => tree.nearest_neighbor(query),
        None => Ok(None),
    }
}

/// Outcome of a nearest-neighbor descent.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Descent<N: IndexableNum> {
    /// (arena id, squared distance) of the nearest item
    pub(crate) best: Option<(usize, N)>,
    /// Number of nodes whose point was compared against the query
    pub(crate) visited: usize,
}

/// Descend from the root of a non-empty tree, near side first, backtracking into the far side
/// of a split only while the split is closer than the best item of that subtree.
///
/// `query` must have at least `dims` coordinates.
pub(crate) fn descend<N: IndexableNum>(
    nodes: &[KDTreeNode<N>],
    dims: usize,
    query: &[N],
) -> Descent<N> {
    if nodes.is_empty() {
        return Descent {
            best: None,
            visited: 0,
        };
    }

    // Each frame is one pending level of the descent. Use TinyVec to avoid heap allocations
    let mut stack: TinyVec<[Frame<N>; 33]> = TinyVec::new();
    stack.push(Frame::enter(0, 0));

    // best result of the most recently completed subtree; None for an absent child
    let mut returned: Option<(usize, N)> = None;
    let mut visited = 0;

    while let Some(mut frame) = stack.pop() {
        let node = &nodes[frame.node];
        let axis = frame.depth % dims;
        match frame.stage {
            Stage::Enter => {
                visited += 1;
                frame.best = (frame.node, sq_dist(query, node.location.coords(), dims));

                let (near, far) = if query[axis] < node.location[axis] {
                    (node.left, node.right)
                } else {
                    (node.right, node.left)
                };
                frame.far = far;
                frame.stage = Stage::Near;

                let depth = frame.depth;
                stack.push(frame);
                match near {
                    Some(child) => stack.push(Frame::enter(child, depth + 1)),
                    None => returned = None,
                }
            }
            Stage::Near => {
                frame.absorb(returned);

                // the splitting line is closer than the current best, so the far side may
                // still hold a closer item
                let gap = node.location[axis].axis_gap(query[axis]);
                let far = frame.far;
                match far {
                    Some(far) if within_radius(gap, frame.best.1) => {
                        frame.stage = Stage::Far;
                        let depth = frame.depth;
                        stack.push(frame);
                        stack.push(Frame::enter(far, depth + 1));
                    }
                    _ => returned = Some(frame.best),
                }
            }
            Stage::Far => {
                frame.absorb(returned);
                returned = Some(frame.best);
            }
        }
    }

    Descent {
        best: returned,
        visited,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Stage {
    /// Visit the node itself, then descend to the near child
    #[default]
    Enter,
    /// The near child has returned
    Near,
    /// The far child has returned
    Far,
}

#[derive(Debug, Clone, Copy, Default)]
struct Frame<N: IndexableNum> {
    node: usize,
    depth: usize,
    stage: Stage,
    far: Option<usize>,
    /// (arena id, squared distance) of the best item in this subtree so far
    best: (usize, N),
}

impl<N: IndexableNum> Frame<N> {
    fn enter(node: usize, depth: usize) -> Self {
        Self {
            node,
            depth,
            stage: Stage::Enter,
            far: None,
            best: (node, N::zero()),
        }
    }

    /// Replace the current best only if the child's result is strictly closer.
    #[inline]
    fn absorb(&mut self, child: Option<(usize, N)>) {
        if let Some(child) = child {
            if child.1 < self.best.1 {
                self.best = child;
            }
        }
    }
}

#[inline]
fn within_radius<N: IndexableNum>(gap: N, best_sq: N) -> bool {
    let gap = gap.to_f64().unwrap_or(0.0);
    let radius = best_sq.to_f64().unwrap_or(f64::INFINITY).sqrt();
    gap < radius
}

/// Squared Euclidean distance over the first `dims` coordinates, saturating for integers.
#[inline]
pub(crate) fn sq_dist<N: IndexableNum>(a: &[N], b: &[N], dims: usize) -> N {
    a.iter()
        .zip(b)
        .take(dims)
        .fold(N::zero(), |acc, (&a, &b)| acc.add_square(a.axis_gap(b)))
}
