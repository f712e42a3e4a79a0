use thiserror::Error;

use crate::cell::AspectId;

/// Reasons a resolve call may fail before or while searching.
///
/// Running out of time and finding nothing are not failures; both yield whatever solutions were recorded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The encoded grid does not have `width * height` cells.
    #[error("frame has {actual} cells, expected {expected} for the configured layout")]
    FrameLength {
        /// `width * height` of the layout.
        expected: usize,
        /// Cells actually given.
        actual: usize,
    },
    /// No cell holds an aspect, so there is nothing to start a chain from.
    #[error("frame has no start cell")]
    MissingStart,
    /// The supply names an aspect the link graph does not know.
    #[error("aspect {aspect} is not part of the link graph")]
    UnknownAspect {
        /// The unknown id.
        aspect: AspectId,
    },
    /// A positional supply, or a supply built against another link graph, does not line up with the graph's aspects.
    #[error("supply has {actual} slots, expected {expected}")]
    SupplyLength {
        /// Aspects in the link graph.
        expected: usize,
        /// Slots actually given.
        actual: usize,
    },
    /// The background thread running a search panicked.
    #[error("resolver worker panicked")]
    WorkerPanicked,
}
