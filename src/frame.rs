use std::fmt::{Display, Formatter};
use std::num::NonZero;

use itertools::Itertools;
use ndarray::Array2;

use crate::cell::Cell;
use crate::error::ResolveError;
use crate::location::{Dimension, Location};

/// Width of the standard research frame.
pub const STANDARD_WIDTH: Dimension = match NonZero::new(11) {
    Some(width) => width,
    None => unreachable!(),
};
/// Height of the standard research frame.
pub const STANDARD_HEIGHT: Dimension = match NonZero::new(10) {
    Some(height) => height,
    None => unreachable!(),
};

/// A hexagonal grid of [`Cell`]s, laid out as described on [`HexStep`](crate::shape::HexStep).
///
/// Frames are built from the host encoding with [`Frame::from_encoded`] or with a [`FrameBuilder`](crate::builder::FrameBuilder).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Frame {
    pub(crate) cells: Array2<Cell>,
    // width, height
    pub(crate) dims: (Dimension, Dimension),
}

impl Frame {
    /// The dimensions of the standard frame, `11 x 10`.
    pub fn standard_dims() -> (Dimension, Dimension) {
        (STANDARD_WIDTH, STANDARD_HEIGHT)
    }

    /// A frame of the given `(width, height)` with every cell empty.
    pub fn empty(dims: (Dimension, Dimension)) -> Self {
        Self {
            cells: Array2::from_elem((dims.1.get(), dims.0.get()), Cell::Empty),
            dims,
        }
    }

    /// Decode a frame from the flat host encoding, where cell `(x, y)` is at `x + y * width`.
    pub fn from_encoded(dims: (Dimension, Dimension), encoded: &[i32]) -> Result<Self, ResolveError> {
        let expected = dims.0.get() * dims.1.get();
        if encoded.len() != expected {
            return Err(ResolveError::FrameLength { expected, actual: encoded.len() });
        }

        let cells = encoded.iter().copied().map(Cell::decode).collect_vec();
        let cells = Array2::from_shape_vec((dims.1.get(), dims.0.get()), cells)
            .map_err(|_| ResolveError::FrameLength { expected, actual: encoded.len() })?;

        Ok(Self { cells, dims })
    }

    /// Encode this frame in the flat host encoding.
    pub fn to_encoded(&self) -> Vec<i32> {
        self.cells.iter().map(Cell::encode).collect_vec()
    }

    /// `(width, height)`.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// The cell at `location`. Off-board locations read as [`Cell::Void`].
    pub fn get(&self, location: Location) -> Cell {
        self.cells.get(location.as_index()).copied().unwrap_or(Cell::Void)
    }

    /// Overwrite the cell at `location`. Only ever used on cells that started out empty.
    pub(crate) fn set(&mut self, location: Location, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(location.as_index()) {
            *slot = cell;
        }
    }

    /// Every location paired with its cell, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Location, Cell)> + '_ {
        self.cells.indexed_iter().map(|(index, cell)| (Location::from(index), *cell))
    }

    /// Number of cells that differ from `other`. Frames of different dimensions differ everywhere.
    pub fn diff_count(&self, other: &Frame) -> usize {
        if self.dims != other.dims {
            return self.cells.len().max(other.cells.len());
        }

        self.cells.iter().zip(other.cells.iter()).filter(|(a, b)| a != b).count()
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows() {
            writeln!(f, "{}", row.iter().map(|cell| format!("{:>3}", cell.to_string())).join(""))?;
        }

        Ok(())
    }
}
