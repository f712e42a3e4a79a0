use std::num::NonZero;

use ndarray::Ix;

pub(crate) type Coord = usize;
/// A board dimension; boards always have at least one row and one column.
pub type Dimension = NonZero<Coord>;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A location `(x, y)` on a frame. The top left cell is `Location(0, 0)`; `x` selects the column.
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    /// Whether this location lies on a board of size `dims`, given in `(width, height)` order.
    pub fn within(&self, dims: (Dimension, Dimension)) -> bool {
        self.0 < dims.0.get() && self.1 < dims.1.get()
    }

    /// Position of this location in the flat host encoding, `x + y * width`.
    pub fn flat_index(&self, width: Dimension) -> usize {
        self.0 + self.1 * width.get()
    }

    /// Inverse of [`Self::flat_index`].
    pub fn from_flat_index(index: usize, width: Dimension) -> Self {
        Self(index % width.get(), index / width.get())
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1, value.0)
    }
}
