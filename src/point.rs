//! An immutable coordinate tuple.

use std::ops::Index;

use geo_traits::CoordTrait;
use tinyvec::TinyVec;

use crate::r#type::IndexableNum;

/// A point with a fixed number of coordinates.
///
/// Two coordinates are stored inline; points with more coordinates spill onto the heap. A tree
/// built with `k` dimensions only looks at the first `k` coordinates of a point, but a point
/// keeps every coordinate it was created with.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Point<N: IndexableNum> {
    coords: TinyVec<[N; 2]>,
}

impl<N: IndexableNum> Point<N> {
    /// Create a new point from its coordinates, in axis order.
    pub fn new(coords: impl IntoIterator<Item = N>) -> Self {
        Self {
            coords: coords.into_iter().collect(),
        }
    }

    /// Create a new 2-D point.
    pub fn xy(x: N, y: N) -> Self {
        Self::new([x, y])
    }

    /// Copy the coordinates out of any [`CoordTrait`] implementation.
    pub fn from_coord(coord: &impl CoordTrait<T = N>) -> Self {
        let dims = coord.dim().size();
        Self::new((0..dims).map(|n| coord.nth_or_panic(n)))
    }

    /// All coordinates of this point.
    #[inline]
    pub fn coords(&self) -> &[N] {
        &self.coords
    }

    /// The number of coordinates of this point.
    #[inline]
    pub fn dims(&self) -> usize {
        self.coords.len()
    }

    /// The coordinate along `axis`, if this point has one.
    #[inline]
    pub fn get(&self, axis: usize) -> Option<N> {
        self.coords.get(axis).copied()
    }
}

impl<N: IndexableNum> Index<usize> for Point<N> {
    type Output = N;

    fn index(&self, axis: usize) -> &N {
        &self.coords[axis]
    }
}

impl<N: IndexableNum> From<(N, N)> for Point<N> {
    fn from((x, y): (N, N)) -> Self {
        Self::xy(x, y)
    }
}

impl<N: IndexableNum> From<(N, N, N)> for Point<N> {
    fn from((x, y, z): (N, N, N)) -> Self {
        Self::new([x, y, z])
    }
}

impl<N: IndexableNum, const D: usize> From<[N; D]> for Point<N> {
    fn from(coords: [N; D]) -> Self {
        Self::new(coords)
    }
}

impl<N: IndexableNum> From<&[N]> for Point<N> {
    fn from(coords: &[N]) -> Self {
        Self::new(coords.iter().copied())
    }
}

impl<N: IndexableNum> From<Vec<N>> for Point<N> {
    fn from(coords: Vec<N>) -> Self {
        Self::new(coords)
    }
}

impl<N: IndexableNum> AsRef<[N]> for Point<N> {
    fn as_ref(&self) -> &[N] {
        self.coords()
    }
}
