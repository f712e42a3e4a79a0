use std::collections::HashSet;
use std::num::NonZero;

use ndarray::Array2;

use crate::cell::{AspectId, Cell};
use crate::frame::Frame;
use crate::location::{Dimension, Location};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BuilderInvalidReason {
    /// A feature like a marker was inserted outside the bounds specified by `dims` on the builder.
    FeatureOutOfBounds,
    /// A marker was given aspect id 0, which the host encoding cannot represent.
    NullAspect,
}

/// A builder for [`Frame`]s, for callers that do not already hold the host encoding.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
#[derive(Clone, Debug)]
pub struct FrameBuilder {
    // width, height
    dims: (Dimension, Dimension),
    cells: Array2<Cell>,
    // each marker with the cell it covered
    markers: Vec<(Location, Cell)>,
    invalid_reasons: Vec<BuilderInvalidReason>,
    // holes
    location_blacklist: HashSet<Location>,
}

impl Default for FrameBuilder {
    fn default() -> Self {
        Self::with_dims(Frame::standard_dims())
    }
}

impl FrameBuilder {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(x, y)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            cells: Array2::from_elem((dims.1.get(), dims.0.get()), Cell::Empty),
            markers: Default::default(),
            invalid_reasons: Default::default(),
            location_blacklist: Default::default(),
        }
    }

    /// Shorthand for [`Self::with_dims`] taking plain sizes. Zero is bumped to one.
    pub fn with_size(width: usize, height: usize) -> Self {
        Self::with_dims((
            NonZero::new(width).unwrap_or(NonZero::<usize>::MIN),
            NonZero::new(height).unwrap_or(NonZero::<usize>::MIN),
        ))
    }

    /// Place a start or goal marker holding `aspect`.
    /// Whichever marker comes first in row-major order becomes the start, regardless of insertion order.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) or
    /// [`NullAspect`](BuilderInvalidReason::NullAspect) invalid state.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_marker(&mut self, aspect: AspectId, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !location.within(self.dims) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        if aspect == 0 {
            self.invalid_reasons.push(BuilderInvalidReason::NullAspect);
            return self;
        }

        let covered = std::mem::replace(&mut self.cells[location.as_index()], Cell::Aspect(aspect));
        self.markers.push((location, covered));
        self
    }

    /// Remove the most recently added marker, uncovering whatever it was placed over.
    ///
    /// If the builder is in an invalid state or no markers are present, this function does nothing.
    pub fn pop_marker(&mut self) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if let Some((location, covered)) = self.markers.pop() {
            self.cells[location.as_index()] = covered;
        }

        self
    }

    /// Drop a location from the board, leaving a void cell no chain may use.
    /// A marker here will be deleted regardless of where in the chain this method is called.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if `location` is out of bounds.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn drop_location(&mut self, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !location.within(self.dims) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        self.location_blacklist.insert(location);
        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Frame`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Frame, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        let mut cells = self.cells.clone();
        for location in &self.location_blacklist {
            cells[location.as_index()] = Cell::Void;
        }

        Ok(Frame {
            cells,
            dims: self.dims,
        })
    }
}
