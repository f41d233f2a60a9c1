//! Utilities to traverse the KDTree structure.

use std::marker::PhantomData;

use crate::kdtree::{KDTreeIndex, KDTreeNode};
use crate::point::Point;
use crate::r#type::IndexableNum;

/// A node in the KDTree, positioned at a known depth.
#[derive(Debug)]
pub struct Node<'a, N: IndexableNum, T: KDTreeIndex<N>> {
    /// The tree that this node is a reference onto
    tree: &'a T,

    /// Arena id of this node
    arena_id: usize,

    depth: usize,

    phantom: PhantomData<N>,
}

// Manual impls, since deriving would require `T: Clone`
impl<N: IndexableNum, T: KDTreeIndex<N>> Clone for Node<'_, N, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N: IndexableNum, T: KDTreeIndex<N>> Copy for Node<'_, N, T> {}

impl<'a, N: IndexableNum, T: KDTreeIndex<N>> Node<'a, N, T> {
    pub(crate) fn from_root(tree: &'a T) -> Option<Self> {
        if tree.is_empty() {
            return None;
        }
        Some(Self {
            tree,
            arena_id: 0,
            depth: 0,
            phantom: PhantomData,
        })
    }

    #[inline]
    fn inner(&self) -> &'a KDTreeNode<N> {
        &self.tree.nodes()[self.arena_id]
    }

    fn child(&self, arena_id: Option<usize>) -> Option<Node<'a, N, T>> {
        arena_id.map(|arena_id| Self {
            tree: self.tree,
            arena_id,
            depth: self.depth + 1,
            phantom: PhantomData,
        })
    }

    /// The depth of this node; the root is at depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The axis that the children of this node are split over.
    pub fn axis(&self) -> usize {
        self.depth % self.tree.dimensions()
    }

    /// The point stored at this node.
    pub fn location(&self) -> &'a Point<N> {
        &self.inner().location
    }

    /// The insertion index of this node's point.
    pub fn id(&self) -> usize {
        self.inner().id
    }

    /// The child holding points at or below this node's coordinate on [`axis`][Self::axis].
    pub fn left_child(&self) -> Option<Node<'a, N, T>> {
        self.child(self.inner().left)
    }

    /// The child holding points at or above this node's coordinate on [`axis`][Self::axis].
    pub fn right_child(&self) -> Option<Node<'a, N, T>> {
        self.child(self.inner().right)
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.inner().is_leaf()
    }

    /// All locations in the subtree rooted at this node, including its own.
    pub fn subtree_locations(&self) -> Vec<&'a Point<N>> {
        let mut result = vec![];
        let mut stack = vec![*self];
        while let Some(node) = stack.pop() {
            result.push(node.location());
            stack.extend(node.left_child());
            stack.extend(node.right_child());
        }
        result
    }
}
