use std::hash::Hash;

use strum::VariantArray;

use crate::location::{Dimension, Location};

/// Functionality that must be implemented on a case-by-case basis for any cell shape.
///
/// [`HexStep`] is the only built-in implementation.
pub trait Step: Sized + Copy + VariantArray + PartialEq + Eq + Hash {
    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// The result may lie off the board; steps off the top or left edge wrap around to very large coordinates.
    fn attempt_from(&self, location: Location) -> Location;
}

// NB: frames are organized in columns, drawn with odd columns half a cell lower:
//  0   0   0
//    1   1   1
//  1   1   1
//    2   2   2
// The sideways steps do not follow the drawing on odd columns: there both the upper and the level step land on `(x +- 1, y)`,
// so that cell is visited twice and `(x +- 1, y + 1)` never. Which boards count as linked depends on this.
/// Directions on the hexagonal frame, declared in the priority order in which neighbors are visited.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum HexStep {
    /// `(x, y - 1)`.
    Up,
    /// `(x, y + 1)`.
    Down,
    /// `(x + 1, y - 1)` from an even column, `(x + 1, y)` from an odd one.
    UpRight,
    /// `(x + 1, y)`.
    Right,
    /// `(x - 1, y - 1)` from an even column, `(x - 1, y)` from an odd one.
    UpLeft,
    /// `(x - 1, y)`.
    Left,
}

impl Step for HexStep {
    fn attempt_from(&self, location: Location) -> Location {
        let up = if location.0 & 1 == 0 { -1 } else { 0 };
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Down => location.offset_by((0, 1)),
            Self::UpRight => location.offset_by((1, up)),
            Self::Right => location.offset_by((1, 0)),
            Self::UpLeft => location.offset_by((-1, up)),
            Self::Left => location.offset_by((-1, 0)),
        }
    }
}

/// Functionality on top of [`Step`] with identical implementation across all shapes.
pub trait BoardShape: Step {
    /// Every neighbor of `location` on a board of size `dims`, in the declaration order of the step variants.
    /// Directions leading off the board are omitted. Two directions may lead to the same cell; both are yielded.
    fn neighbors_of(location: Location, dims: (Dimension, Dimension)) -> impl Iterator<Item = (Self, Location)>;
}

impl<Sh> BoardShape for Sh
where
    Sh: Step + 'static,
{
    fn neighbors_of(location: Location, dims: (Dimension, Dimension)) -> impl Iterator<Item = (Self, Location)> {
        Self::VARIANTS.iter()
            .map(move |dir| (*dir, dir.attempt_from(location)))
            .filter(move |(_, neighbor)| neighbor.within(dims))
    }
}
