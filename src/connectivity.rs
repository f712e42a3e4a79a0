//! Deciding whether a goal is linked back to the start.
//!
//! A goal is reachable when a walk from it can hop, cell by adjacent cell, across aspects that are pairwise linked until it lands on the start.
//! The walk marks the cells it leaves as visited, so it always runs on a private scratch copy of the frame.

use ndarray::Array2;

use crate::cell::Cell;
use crate::frame::Frame;
use crate::links::LinkGraph;
use crate::location::{Dimension, Location};
use crate::shape::{BoardShape, HexStep};

#[derive(Clone, Copy)]
enum Trace {
    Open(Cell),
    Visited,
}

struct Scratch<'a> {
    cells: Array2<Trace>,
    dims: (Dimension, Dimension),
    links: &'a LinkGraph,
    start: Location,
}

impl Scratch<'_> {
    fn walk(&mut self, at: Location) -> bool {
        if at == self.start {
            return true;
        }

        let current = match self.cells.get(at.as_index()) {
            Some(Trace::Open(Cell::Aspect(aspect))) => *aspect,
            _ => return false,
        };

        // once a neighbor reports success the rest are skipped; otherwise the last attempted walk decides
        let mut reached = false;
        for (_, next) in HexStep::neighbors_of(at, self.dims) {
            if reached {
                break;
            }

            if let Trace::Open(Cell::Aspect(aspect)) = self.cells[next.as_index()] {
                if self.links.linked(current, aspect) {
                    self.cells[at.as_index()] = Trace::Visited;
                    reached = self.walk(next);
                }
            }
        }

        reached
    }
}

/// Whether `goal` is linked to `start` through a chain of adjacent, pairwise linked aspects on `frame`.
///
/// `frame` itself is never touched; the walk runs on a fresh copy.
pub fn reachable(frame: &Frame, links: &LinkGraph, goal: Location, start: Location) -> bool {
    let mut scratch = Scratch {
        cells: frame.cells.map(|cell| Trace::Open(*cell)),
        dims: frame.dims,
        links,
        start,
    };

    scratch.walk(goal)
}

/// Whether every goal is [`reachable`], each checked independently.
pub fn all_reachable(frame: &Frame, links: &LinkGraph, goals: &[Location], start: Location) -> bool {
    goals.iter().all(|goal| reachable(frame, links, *goal, start))
}
