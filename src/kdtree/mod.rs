//! An implementation of an immutable k-d tree with median splits.

#![warn(missing_docs)]

mod builder;
mod index;
mod r#trait;
mod traversal;

pub use builder::{build, KDTreeBuilder};
pub use index::{KDTree, KDTreeNode, Neighbor};
pub(crate) use r#trait::sq_dist;
pub use r#trait::{find_nearest_neighbor, KDTreeIndex};
pub use traversal::Node;
