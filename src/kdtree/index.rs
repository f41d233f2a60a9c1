//! The tree arena, its nodes and the neighbor found by a search.

use crate::point::Point;
use crate::r#type::IndexableNum;

/// One indexed point plus the arena ids of its up to two children.
#[derive(Debug, Clone, PartialEq)]
pub struct KDTreeNode<N: IndexableNum> {
    pub(crate) location: Point<N>,
    pub(crate) id: usize,
    pub(crate) left: Option<usize>,
    pub(crate) right: Option<usize>,
}

impl<N: IndexableNum> KDTreeNode<N> {
    /// The point stored at this node.
    #[inline]
    pub fn location(&self) -> &Point<N> {
        &self.location
    }

    /// The insertion index of this node's point.
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Arena id of the child holding points at or below this node on the split axis.
    #[inline]
    pub fn left(&self) -> Option<usize> {
        self.left
    }

    /// Arena id of the child holding points at or above this node on the split axis.
    #[inline]
    pub fn right(&self) -> Option<usize> {
        self.right
    }

    /// Whether this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// An immutable k-d tree.
///
/// Usually this will be created from scratch via [`KDTreeBuilder`][crate::kdtree::KDTreeBuilder].
/// Nodes are stored in pre-order, so the root is always at arena id 0.
#[derive(Debug, Clone, PartialEq)]
pub struct KDTree<N: IndexableNum> {
    pub(crate) nodes: Vec<KDTreeNode<N>>,
    pub(crate) dims: usize,
    pub(crate) depth: usize,
}

impl<N: IndexableNum> KDTree<N> {
    pub(crate) fn empty(dims: usize) -> Self {
        Self {
            nodes: vec![],
            dims,
            depth: 0,
        }
    }

    /// The number of axes the tree cycles through.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.dims
    }

    /// The number of levels of the tree. An empty tree has depth 0, a single leaf depth 1.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Access a node by its arena id.
    #[inline]
    pub fn node(&self, arena_id: usize) -> Option<&KDTreeNode<N>> {
        self.nodes.get(arena_id)
    }

    /// All nodes of the tree, in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = &KDTreeNode<N>> {
        self.nodes.iter()
    }
}

/// The nearest point found by a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<'a, N: IndexableNum> {
    /// Insertion index of the point
    pub id: usize,
    /// The point itself, with all of its coordinates
    pub location: &'a Point<N>,
    /// Squared Euclidean distance to the query over the tree's dimensions
    pub distance_sq: N,
}
