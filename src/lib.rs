#![warn(missing_docs)]

//! # `hexlink`
//!
//! A solver for aspect-linking research grids: a hexagonal board holding a start aspect and one or more goal aspects,
//! which must be joined by chains of adjacent aspects, each compatible with its neighbor in the chain.
//! Aspects to place come from a finite supply.
//!
//! Begin by describing a board, either from the flat integer encoding with [`Frame::from_encoded`] or with a [`FrameBuilder`](builder::FrameBuilder),
//! and a supply with [`AspectSupply::new`].
//! Then hand both to a [`Resolver`], or call [`resolve`] for the standard board and dataset.
//! The answer is every shortest way of linking the goals, with equivalent uses of the supply collapsed to one.
//!
//! # Internals
//! Aspect compatibility is a fixed undirected graph, see [`LinkGraph`]. The standard dataset is built into the crate and loaded once per process.
//!
//! A high level overview is as follows:
//!
//! The first aspect cell of the frame, reading row by row, is the start; every other aspect cell is a goal.
//! From the start, the search grows a single chain: each step places an aspect linked to the tip's aspect on an empty neighbor of the tip,
//! and that cell becomes the new tip. Every placement is undone on the way back out, so the frame and supply are always exactly as the branch found them.
//!
//! After each placement, every goal is checked for a path back to the start across adjacent, pairwise linked aspects.
//! Once all goals pass, the frame is recorded and the branch ends. Branches longer than the best recorded chain, or than the configured depth, are cut.
//!
//! Finally, only the shortest recorded frames are kept, and of those only one per remaining-supply signature.
//!
//! Runs can be long. They can be cancelled or given a deadline through a [`CancelToken`], report progress through a [`ProgressSink`],
//! and run on their own thread with [`Resolver::spawn`].

pub use aggregate::Solution;
pub use cancel::CancelToken;
pub use cell::{AspectId, Cell, EMPTY_CODE, VOID_CODE};
pub use error::ResolveError;
pub use frame::{Frame, STANDARD_HEIGHT, STANDARD_WIDTH};
pub use links::LinkGraph;
pub use locator::Anchors;
pub use location::{Dimension, Location};
pub use progress::{Ack, ChannelProgress, ProgressEvent, ProgressReceiver, ProgressReport, ProgressSink};
pub use solver::{resolve, Resolution, ResolveOptions, ResolveTask, Resolver};
pub use supply::{AspectSupply, Count, SupplySignature};

pub(crate) mod aggregate;
pub(crate) mod cancel;
pub(crate) mod cell;
/// Building frames marker by marker.
pub mod builder;
pub mod connectivity;
pub(crate) mod error;
pub(crate) mod frame;
pub mod links;
pub(crate) mod locator;
pub(crate) mod location;
pub(crate) mod progress;
pub(crate) mod search;
/// Hexagonal adjacency.
pub mod shape;
pub(crate) mod solver;
pub(crate) mod supply;
