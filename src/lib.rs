#![doc = include_str!("../README.md")]

mod error;
pub mod kdtree;
pub mod linear;
mod nearest;
mod point;
mod r#type;

pub use error::{KdNearestError, Result};
pub use kdtree::{build, find_nearest_neighbor};
pub use nearest::NearestNeighborIndex;
pub use point::Point;
pub use r#type::IndexableNum;

#[cfg(test)]
pub(crate) mod test;
