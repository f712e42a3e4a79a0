use itertools::Itertools;

use crate::cell::Cell;
use crate::error::ResolveError;
use crate::frame::Frame;
use crate::location::Location;

/// The fixed endpoints of a search: one start cell and the goals that must all be linked to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Anchors {
    /// The first aspect cell in row-major order.
    pub start: Location,
    /// Goals in row-major order.
    pub goals: Vec<Location>,
}

impl Anchors {
    /// Scan `frame` once in row-major order. The first aspect cell is the start, every later one a goal.
    pub fn locate(frame: &Frame) -> Result<Self, ResolveError> {
        let mut markers = frame.cells()
            .filter(|(_, cell)| matches!(cell, Cell::Aspect(_)))
            .map(|(location, _)| location);

        let start = markers.next().ok_or(ResolveError::MissingStart)?;
        let goals = markers.collect_vec();

        Ok(Self { start, goals })
    }
}
